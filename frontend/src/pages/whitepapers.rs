use yew::prelude::*;

use crate::components::fields::form_fields;
use crate::components::form_status::{Confirmation, SubmissionError, SubmitButton};
use crate::components::hero::PageHero;
use crate::forms::hook::use_form;
use crate::forms::schema::{FieldKind, FieldSpec, FormSchema};
use crate::forms::state::{FieldValue, SubmissionStatus};
use crate::icons::{Icon, IconView};

struct Whitepaper {
    slug: &'static str,
    title: &'static str,
    summary: &'static str,
    pages: u32,
    icon: Icon,
}

const WHITEPAPERS: &[Whitepaper] = &[
    Whitepaper {
        slug: "automation-roi",
        title: "The ROI of workflow automation",
        summary: "Benchmarks from 300 companies on time saved, error rates and payback periods.",
        pages: 24,
        icon: Icon::Chart,
    },
    Whitepaper {
        slug: "zero-trust",
        title: "Zero trust for business applications",
        summary: "A practical model for identity, device posture and least-privilege access.",
        pages: 18,
        icon: Icon::Shield,
    },
    Whitepaper {
        slug: "data-residency",
        title: "Data residency in the EU",
        summary: "What GDPR and Schrems II mean for where your SaaS data lives.",
        pages: 15,
        icon: Icon::Globe,
    },
];

/// Where the PDF for a paper is served from.
pub fn download_href(slug: &str, email: &str) -> String {
    format!(
        "/downloads/{}.pdf?ref={}",
        urlencoding::encode(slug),
        urlencoding::encode(email)
    )
}

const ROLES: &[&str] = &["Engineering", "Security", "Operations", "Leadership", "Other"];

pub static DOWNLOAD_FORM: FormSchema = FormSchema {
    id: "whitepaper-download",
    fields: &[
        FieldSpec::new("whitepaper", "Whitepaper", FieldKind::Text).required(),
        FieldSpec::new("name", "Full name", FieldKind::Text).required(),
        FieldSpec::new("email", "Work email", FieldKind::Email).required(),
        FieldSpec::new("role", "Role", FieldKind::Select(ROLES)),
        FieldSpec::new("newsletter", "Send me the monthly research digest", FieldKind::Checkbox),
    ],
    agreement: None,
};

#[function_component(Whitepapers)]
pub fn whitepapers() -> Html {
    let form = use_form(&DOWNLOAD_FORM);
    let status = form.form().status().clone();
    let chosen = form.form().values().text("whitepaper").to_string();

    let gate = if status == SubmissionStatus::Submitted {
        let paper = WHITEPAPERS.iter().find(|p| p.title == chosen);
        let reset = {
            let form = form.clone();
            Callback::from(move |_: MouseEvent| form.reset())
        };
        html! {
            <Confirmation
                title="Your copy is ready"
                message="We've also emailed you the link so you can read it later."
                on_reset={reset}
                reset_label="Get another paper"
            >
                if let Some(paper) = paper {
                    <a
                        class="primary-button"
                        href={download_href(paper.slug, form.form().values().text("email"))}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {format!("Download “{}”", paper.title)}
                    </a>
                }
            </Confirmation>
        }
    } else {
        html! {
            <form onsubmit={form.on_submit()} novalidate=true>
                { form_fields(&form) }
                <SubmissionError status={status.clone()} />
                <SubmitButton status={status.clone()} label="Get the PDF" />
            </form>
        }
    };

    html! {
        <div class="whitepapers-page">
            <PageHero
                title="Whitepapers"
                subtitle="Research and playbooks from our solutions and security teams."
            />
            <section class="page-section card-grid">
                { for WHITEPAPERS.iter().map(|paper| {
                    let pick = {
                        let form = form.clone();
                        let title = paper.title;
                        Callback::from(move |_: MouseEvent| {
                            form.set_field("whitepaper", FieldValue::Text(title.to_string()));
                        })
                    };
                    html! {
                        <div class={classes!("card", (chosen == paper.title).then(|| "selected"))} key={paper.slug}>
                            <IconView icon={paper.icon} />
                            <h3>{paper.title}</h3>
                            <p>{paper.summary}</p>
                            <p class="muted">{format!("{} pages · PDF", paper.pages)}</p>
                            if status.accepts_submit() {
                                <a class="text-link" href="#download" onclick={pick}>{"Read it →"}</a>
                            }
                        </div>
                    }
                }) }
            </section>
            <section class="page-section" id="download">
                <div class="form-panel">{gate}</div>
            </section>
            <style>
                {r#"
                .card.selected {
                    border-color: #1E90FF;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::state::Form;

    #[test]
    fn test_download_href_encodes_parts() {
        assert_eq!(
            download_href("zero-trust", "ana+docs@example.com"),
            "/downloads/zero-trust.pdf?ref=ana%2Bdocs%40example.com"
        );
    }

    #[test]
    fn test_paper_must_be_chosen() {
        let mut form = Form::new(&DOWNLOAD_FORM);
        form.set_field("name", FieldValue::Text("Ana".into()));
        form.set_field("email", FieldValue::Text("ana@example.com".into()));
        assert!(form.begin_submit().is_err());
        assert!(form.error_for("whitepaper").is_some());

        form.set_field("whitepaper", FieldValue::Text(WHITEPAPERS[1].title.into()));
        assert!(form.begin_submit().is_ok());
    }
}
