use yew::prelude::*;

use crate::components::fields::form_fields;
use crate::components::form_status::{Confirmation, SubmissionError, SubmitButton};
use crate::components::hero::PageHero;
use crate::forms::hook::use_form;
use crate::forms::schema::{FieldKind, FieldSpec, FormSchema};
use crate::forms::state::SubmissionStatus;
use crate::icons::{Icon, IconView};

const TOPICS: &[&str] = &["Sales", "Support", "Partnerships", "Press", "Something else"];

pub static CONTACT_FORM: FormSchema = FormSchema {
    id: "contact",
    fields: &[
        FieldSpec::new("name", "Full name", FieldKind::Text).required(),
        FieldSpec::new("email", "Work email", FieldKind::Email).required(),
        FieldSpec::new("company", "Company", FieldKind::Text),
        FieldSpec::new("topic", "What is this about?", FieldKind::Select(TOPICS)).required(),
        FieldSpec::new("message", "Message", FieldKind::LongText).required(),
    ],
    agreement: None,
};

struct Office {
    city: &'static str,
    address: &'static str,
    phone: &'static str,
}

const OFFICES: &[Office] = &[
    Office { city: "Helsinki", address: "Mannerheimintie 12, 00100", phone: "+358 9 4242 1000" },
    Office { city: "Amsterdam", address: "Herengracht 420, 1017 BZ", phone: "+31 20 808 4400" },
    Office { city: "Austin", address: "500 W 2nd St, TX 78701", phone: "+1 512 555 0144" },
];

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_form(&CONTACT_FORM);
    let status = form.form().status().clone();

    let body = if status == SubmissionStatus::Submitted {
        let reset = {
            let form = form.clone();
            Callback::from(move |_: MouseEvent| form.reset())
        };
        html! {
            <Confirmation
                title="Message received"
                message="Thanks for reaching out. Someone from the right team will reply within one business day."
                on_reset={reset}
            />
        }
    } else {
        html! {
            <form onsubmit={form.on_submit()} novalidate=true>
                { form_fields(&form) }
                <SubmissionError status={status.clone()} />
                <SubmitButton status={status} label="Send message" />
            </form>
        }
    };

    html! {
        <div class="contact-page">
            <PageHero
                title="Talk to us"
                subtitle="Questions about pricing, a partnership idea or a support issue? Send us a note."
            />
            <section class="page-section contact-layout">
                <div class="form-panel">{body}</div>
                <aside class="contact-offices">
                    { for OFFICES.iter().map(|office| html! {
                        <div class="card">
                            <IconView icon={Icon::Globe} />
                            <h3>{office.city}</h3>
                            <p>{office.address}</p>
                            <p>{office.phone}</p>
                        </div>
                    }) }
                </aside>
            </section>
            <style>
                {r#"
                .contact-layout {
                    display: grid;
                    grid-template-columns: 2fr 1fr;
                    gap: 2rem;
                    align-items: start;
                }
                .contact-offices {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                @media (max-width: 900px) {
                    .contact-layout {
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
    use crate::forms::state::{FieldValue, Form};

    #[test]
    fn test_topic_defaults_to_first_option() {
        let form = Form::new(&CONTACT_FORM);
        assert_eq!(form.values().text("topic"), "Sales");
    }

    #[test]
    fn test_message_is_required() {
        let mut form = Form::new(&CONTACT_FORM);
        form.set_field("name", FieldValue::Text("Linus".into()));
        form.set_field("email", FieldValue::Text("linus@example.com".into()));
        assert!(form.begin_submit().is_err());
        assert!(form.error_for("message").is_some());

        form.set_field("message", FieldValue::Text("Hello".into()));
        assert!(form.begin_submit().is_ok());
    }
}
