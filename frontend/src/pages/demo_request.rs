use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::fields::form_fields;
use crate::components::form_status::{Confirmation, SubmissionError, SubmitButton};
use crate::components::hero::PageHero;
use crate::forms::hook::use_form;
use crate::forms::schema::{FieldKind, FieldSpec, FormSchema};
use crate::forms::state::SubmissionStatus;
use crate::icons::{Icon, IconView};
use crate::{navigate, Route};

const ROLES: &[&str] = &["Engineering", "IT / Security", "Operations", "Executive", "Other"];

pub static DEMO_REQUEST_FORM: FormSchema = FormSchema {
    id: "demo-request",
    fields: &[
        FieldSpec::new("name", "Full name", FieldKind::Text).required(),
        FieldSpec::new("email", "Work email", FieldKind::Email).required(),
        FieldSpec::new("company", "Company", FieldKind::Text).required(),
        FieldSpec::new("role", "Your role", FieldKind::Select(ROLES)),
        FieldSpec::new(
            "team_size",
            "Team size",
            FieldKind::Number { min: Some(1.0), max: Some(100_000.0), default: 25.0 },
        )
        .required(),
        FieldSpec::new("use_case", "What would you like to see?", FieldKind::LongText),
        FieldSpec::new(
            "agree_terms",
            "I agree to the terms of service and privacy policy",
            FieldKind::Checkbox,
        ),
    ],
    agreement: Some("agree_terms"),
};

const AGENDA: &[(Icon, &str, &str)] = &[
    (Icon::Search, "Discovery", "Fifteen minutes on your current setup and what is slowing your team down."),
    (Icon::Rocket, "Live walkthrough", "A tailored tour of the workflows that matter to you, not a slide deck."),
    (Icon::Key, "Security review", "SSO, audit logs, data residency and how we handle your data."),
    (Icon::Chat, "Open Q&A", "Bring your hardest questions. We stay until they are answered."),
];

#[function_component(DemoRequest)]
pub fn demo_request() -> Html {
    let form = use_form(&DEMO_REQUEST_FORM);
    let navigator = use_navigator();
    let status = form.form().status().clone();
    let agreed = form.form().values().flag("agree_terms");

    let body = if status == SubmissionStatus::Submitted {
        let to_events = {
            let navigator = navigator.clone();
            Callback::from(move |_: MouseEvent| {
                if let Some(navigator) = &navigator {
                    navigate(navigator, "events");
                }
            })
        };
        html! {
            <Confirmation
                title="Your demo is requested"
                message="We'll email you within one business day with a few time slots that fit your calendar."
            >
                <button class="secondary-button" onclick={to_events}>{"Meanwhile, join a live event"}</button>
            </Confirmation>
        }
    } else {
        html! {
            <form onsubmit={form.on_submit()} novalidate=true>
                { form_fields(&form) }
                <SubmissionError status={status.clone()} />
                <SubmitButton status={status} label="Request demo" enabled={agreed} />
            </form>
        }
    };

    html! {
        <div class="demo-page">
            <PageHero
                title="See it in action"
                subtitle="A 45-minute session with a product specialist, shaped around your team."
            />
            <section class="page-section demo-layout">
                <div>
                    <h2>{"What we'll cover"}</h2>
                    { for AGENDA.iter().map(|(icon, title, text)| html! {
                        <div class="agenda-item">
                            <IconView icon={*icon} />
                            <div>
                                <h3>{*title}</h3>
                                <p class="muted">{*text}</p>
                            </div>
                        </div>
                    }) }
                    <p class="muted">
                        {"Not ready for a call? "}
                        <Link<Route> to={Route::Contact} classes="text-link">{"Send us a message instead."}</Link<Route>>
                    </p>
                </div>
                <div class="form-panel">{body}</div>
            </section>
            <style>
                {r#"
                .demo-layout {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }
                .agenda-item {
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }
                .agenda-item h3 {
                    margin: 0;
                    color: #7EB2FF;
                }
                @media (max-width: 900px) {
                    .demo-layout {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FieldProblem, FormError};
    use crate::forms::state::{FieldValue, Form};

    fn filled() -> Form {
        let mut form = Form::new(&DEMO_REQUEST_FORM);
        form.set_field("name", FieldValue::Text("Margaret".into()));
        form.set_field("email", FieldValue::Text("margaret@example.com".into()));
        form.set_field("company", FieldValue::Text("Apollo".into()));
        form
    }

    #[test]
    fn test_terms_gate_submission() {
        let mut form = filled();
        let err = form.begin_submit().unwrap_err();
        assert_eq!(
            err.field_errors()[0].problem,
            FieldProblem::AgreementRequired
        );
        assert_eq!(form.status(), &SubmissionStatus::Idle);

        form.set_field("agree_terms", FieldValue::Flag(true));
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn test_team_size_bounds() {
        let mut form = filled();
        form.set_field("agree_terms", FieldValue::Flag(true));
        form.set_field("team_size", FieldValue::Number(0.0));
        assert!(matches!(form.begin_submit(), Err(FormError::Validation(_))));

        form.set_field("team_size", FieldValue::Number(f64::NAN));
        assert!(form.begin_submit().is_err());

        form.set_field("team_size", FieldValue::Number(250.0));
        assert!(form.begin_submit().is_ok());
    }
}
