use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::fields::form_fields;
use crate::components::form_status::{Confirmation, SubmissionError, SubmitButton};
use crate::components::hero::PageHero;
use crate::forms::hook::use_form;
use crate::forms::schema::{FieldKind, FieldSpec, FormSchema};
use crate::forms::state::SubmissionStatus;
use crate::icons::{Icon, IconView};

/// Commission rate by monthly referral volume, highest threshold first.
const COMMISSION_TIERS: &[(u32, f64)] = &[(50, 0.30), (10, 0.25), (0, 0.20)];

pub fn commission_rate(referrals: u32) -> f64 {
    COMMISSION_TIERS
        .iter()
        .find(|(threshold, _)| referrals >= *threshold)
        .map(|(_, rate)| *rate)
        .unwrap_or(0.0)
}

/// Monthly payout for `referrals` closed deals worth `avg_deal` each.
pub fn estimate_commission(referrals: u32, avg_deal: f64) -> f64 {
    let avg_deal = if avg_deal.is_finite() && avg_deal > 0.0 { avg_deal } else { 0.0 };
    f64::from(referrals) * avg_deal * commission_rate(referrals)
}

const AUDIENCES: &[&str] = &["Consultancy", "Agency", "Content creator", "Reseller", "Other"];

pub static AFFILIATE_FORM: FormSchema = FormSchema {
    id: "affiliate-application",
    fields: &[
        FieldSpec::new("name", "Full name", FieldKind::Text).required(),
        FieldSpec::new("email", "Email", FieldKind::Email).required(),
        FieldSpec::new("website", "Website or channel", FieldKind::Text).required(),
        FieldSpec::new("audience", "Partner type", FieldKind::Select(AUDIENCES)),
        FieldSpec::new(
            "monthly_visitors",
            "Monthly audience size",
            FieldKind::Number { min: Some(0.0), max: None, default: 1000.0 },
        ),
        FieldSpec::new("pitch", "How would you promote us?", FieldKind::LongText),
        FieldSpec::new("agree_terms", "I accept the partner program terms", FieldKind::Checkbox),
    ],
    agreement: Some("agree_terms"),
};

const BENEFITS: &[(Icon, &str, &str)] = &[
    (Icon::Money, "Up to 30% recurring", "Earn on every renewal for the first 24 months of each account you refer."),
    (Icon::Chart, "Live dashboard", "See clicks, trials and payouts as they happen, with exports for your books."),
    (Icon::Handshake, "Partner manager", "A named contact who helps with co-marketing and tricky deals."),
    (Icon::Book, "Ready-made assets", "Logos, demo videos and landing page copy you can use as is."),
];

struct Testimonial {
    quote: &'static str,
    author: &'static str,
    company: &'static str,
}

const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "The program paid for our whole tooling budget in the first quarter.",
        author: "Priya Raman",
        company: "Lattice Consulting",
    },
    Testimonial {
        quote: "Clear terms, fast payouts and a partner team that actually answers.",
        author: "Jonas Berg",
        company: "Fjord Digital",
    },
];

#[function_component(Affiliate)]
pub fn affiliate() -> Html {
    let referrals = use_state(|| 10u32);
    let avg_deal = use_state(|| 1200.0f64);
    let form = use_form(&AFFILIATE_FORM);
    let status = form.form().status().clone();

    let monthly = estimate_commission(*referrals, *avg_deal);

    let on_referrals = {
        let referrals = referrals.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            referrals.set(input.value().parse().unwrap_or(0));
        })
    };
    let on_deal = {
        let avg_deal = avg_deal.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            avg_deal.set(input.value().parse().unwrap_or(0.0));
        })
    };

    let application = if status == SubmissionStatus::Submitted {
        html! {
            <Confirmation
                title="Application received"
                message="Our partner team reviews applications every week. Expect an answer within 5 business days."
            />
        }
    } else {
        html! {
            <form onsubmit={form.on_submit()} novalidate=true>
                { form_fields(&form) }
                <SubmissionError status={status.clone()} />
                <SubmitButton
                    status={status}
                    label="Apply to the program"
                    enabled={form.form().values().flag("agree_terms")}
                />
            </form>
        }
    };

    html! {
        <div class="affiliate-page">
            <PageHero
                title="Grow with us"
                subtitle="Recommend a product your clients will thank you for, and earn recurring commission while you do."
            />

            <section class="page-section card-grid">
                { for BENEFITS.iter().map(|(icon, title, text)| html! {
                    <div class="card">
                        <IconView icon={*icon} />
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }) }
            </section>

            <section class="page-section">
                <div class="card calculator">
                    <h2>{"Estimate your earnings"}</h2>
                    <label>
                        {"Referrals per month"}
                        <input type="range" min="0" max="100" value={referrals.to_string()} oninput={on_referrals} />
                        <span>{*referrals}</span>
                    </label>
                    <label>
                        {"Average deal size (€)"}
                        <input type="number" min="0" step="100" value={avg_deal.to_string()} oninput={on_deal} />
                    </label>
                    <p class="payout">
                        {format!("{:.0}% commission · €{:.2} per month", commission_rate(*referrals) * 100.0, monthly)}
                    </p>
                </div>
            </section>

            <section class="page-section">
                <h2>{"What partners say"}</h2>
                <div class="card-grid">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <blockquote class="card">
                            <p>{format!("“{}”", t.quote)}</p>
                            <footer>{format!("{}, {}", t.author, t.company)}</footer>
                        </blockquote>
                    }) }
                </div>
            </section>

            <section class="page-section">
                <h2>{"Apply"}</h2>
                <div class="form-panel">{application}</div>
            </section>

            <style>
                {r#"
                .calculator label {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                    margin-bottom: 1rem;
                    color: #ddd;
                }
                .calculator .payout {
                    font-size: 1.4rem;
                    color: #69db7c;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_tiers() {
        assert_eq!(commission_rate(0), 0.20);
        assert_eq!(commission_rate(9), 0.20);
        assert_eq!(commission_rate(10), 0.25);
        assert_eq!(commission_rate(49), 0.25);
        assert_eq!(commission_rate(50), 0.30);
        assert_eq!(commission_rate(500), 0.30);
    }

    #[test]
    fn test_estimate_uses_tiered_rate() {
        assert!((estimate_commission(5, 1000.0) - 1000.0).abs() < 1e-9);
        assert!((estimate_commission(10, 1000.0) - 2500.0).abs() < 1e-9);
        assert!((estimate_commission(50, 200.0) - 3000.0).abs() < 1e-9);
    }

    #[test]
    fn test_bad_deal_sizes_clamp_to_zero() {
        assert_eq!(estimate_commission(20, -50.0), 0.0);
        assert_eq!(estimate_commission(20, f64::NAN), 0.0);
        assert_eq!(estimate_commission(0, 1000.0), 0.0);
    }
}
