use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::hero::PageHero;
use crate::icons::{Icon, IconView};
use crate::navigate;

const FEATURES: &[(Icon, &str, &str)] = &[
    (Icon::Key, "SSO and SCIM", "SAML 2.0 single sign-on with automatic user provisioning and deprovisioning."),
    (Icon::Lock, "Granular permissions", "Custom roles down to individual workflows, fields and environments."),
    (Icon::Document, "Audit log", "Every change recorded for 7 years and streamable to your SIEM."),
    (Icon::Globe, "Data residency", "Keep your data in the EU, US or Australia, with no cross-region replication."),
    (Icon::Support, "24/7 premium support", "One-hour response target for critical issues and a named success manager."),
    (Icon::Lightning, "99.95% uptime SLA", "Contractual availability with service credits if we miss it."),
];

struct PlanRow {
    feature: &'static str,
    business: &'static str,
    enterprise: &'static str,
}

const COMPARISON: &[PlanRow] = &[
    PlanRow { feature: "Seats", business: "Up to 250", enterprise: "Unlimited" },
    PlanRow { feature: "Single sign-on", business: "Google, Microsoft", enterprise: "Any SAML provider" },
    PlanRow { feature: "Audit log retention", business: "90 days", enterprise: "7 years" },
    PlanRow { feature: "Uptime SLA", business: "—", enterprise: "99.95%" },
    PlanRow { feature: "Support", business: "Business hours", enterprise: "24/7, 1h critical response" },
];

/// Calls to action on this page, by target page id.
const ACTIONS: &[(&str, &str)] = &[
    ("demo-request", "Book a demo"),
    ("security", "Read about security"),
    ("contact", "Talk to sales"),
];

#[function_component(Enterprise)]
pub fn enterprise() -> Html {
    let navigator = use_navigator();

    let action_button = |(page_id, label): &(&'static str, &'static str)| {
        let navigator = navigator.clone();
        let page_id = *page_id;
        let onclick = Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = &navigator {
                navigate(navigator, page_id);
            }
        });
        html! {
            <button class={if page_id == "demo-request" { "primary-button" } else { "secondary-button" }} {onclick}>
                {*label}
            </button>
        }
    };

    html! {
        <div class="enterprise-page">
            <PageHero
                title="Built for the way large teams work"
                subtitle="Security, control and support for organisations with thousands of users and strict compliance needs."
            >
                <div class="hero-actions">
                    { for ACTIONS.iter().map(action_button) }
                </div>
            </PageHero>
            <section class="page-section card-grid">
                { for FEATURES.iter().map(|(icon, title, text)| html! {
                    <div class="card">
                        <IconView icon={*icon} />
                        <h3>{*title}</h3>
                        <p>{*text}</p>
                    </div>
                }) }
            </section>
            <section class="page-section">
                <h2>{"Business vs Enterprise"}</h2>
                <table class="comparison-table">
                    <thead>
                        <tr>
                            <th></th>
                            <th>{"Business"}</th>
                            <th>{"Enterprise"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for COMPARISON.iter().map(|row| html! {
                            <tr>
                                <td>{row.feature}</td>
                                <td class="muted">{row.business}</td>
                                <td>{row.enterprise}</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </section>
            <style>
                {r#"
                .hero-actions {
                    display: flex;
                    justify-content: center;
                    gap: 0.75rem;
                    margin-top: 2rem;
                    flex-wrap: wrap;
                }
                .comparison-table {
                    width: 100%;
                    border-collapse: collapse;
                }
                .comparison-table th, .comparison-table td {
                    padding: 0.8rem;
                    text-align: left;
                    border-bottom: 1px solid rgba(30, 144, 255, 0.1);
                }
                "#}
            </style>
        </div>
    }
}
