use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::forms::hook::UseFormHandle;
use crate::forms::schema::{FieldKind, FieldSpec};
use crate::forms::state::FieldValue;

#[derive(Properties, PartialEq)]
pub struct FieldInputProps {
    pub spec: FieldSpec,
    pub value: FieldValue,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub disabled: bool,
    pub on_change: Callback<(&'static str, FieldValue)>,
}

#[function_component(FieldInput)]
pub fn field_input(props: &FieldInputProps) -> Html {
    let spec = props.spec;
    let id = format!("field-{}", spec.name);

    let on_text = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((spec.name, FieldValue::Text(input.value())));
        })
    };

    let control = match spec.kind {
        FieldKind::Text | FieldKind::Email => html! {
            <input
                id={id.clone()}
                type={if spec.kind == FieldKind::Email { "email" } else { "text" }}
                value={props.value.as_text().to_string()}
                required={spec.required}
                disabled={props.disabled}
                oninput={on_text}
            />
        },
        FieldKind::LongText => {
            let on_change = props.on_change.clone();
            html! {
                <textarea
                    id={id.clone()}
                    rows="5"
                    value={props.value.as_text().to_string()}
                    required={spec.required}
                    disabled={props.disabled}
                    oninput={move |e: InputEvent| {
                        let area: HtmlTextAreaElement = e.target_unchecked_into();
                        on_change.emit((spec.name, FieldValue::Text(area.value())));
                    }}
                />
            }
        }
        FieldKind::Select(options) => {
            let on_change = props.on_change.clone();
            let current = props.value.as_text().to_string();
            html! {
                <select
                    id={id.clone()}
                    required={spec.required}
                    disabled={props.disabled}
                    onchange={move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        on_change.emit((spec.name, FieldValue::Text(select.value())));
                    }}
                >
                    { for options.iter().map(|option| html! {
                        <option value={*option} selected={current == *option}>{*option}</option>
                    }) }
                </select>
            }
        }
        FieldKind::Number { min, max, .. } => {
            let on_change = props.on_change.clone();
            let value = props
                .value
                .as_number()
                .filter(|n| !n.is_nan())
                .map(|n| n.to_string())
                .unwrap_or_default();
            html! {
                <input
                    id={id.clone()}
                    type="number"
                    min={min.map(|m| m.to_string())}
                    max={max.map(|m| m.to_string())}
                    value={value}
                    required={spec.required}
                    disabled={props.disabled}
                    oninput={move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        let number = input.value().trim().parse::<f64>().unwrap_or(f64::NAN);
                        on_change.emit((spec.name, FieldValue::Number(number)));
                    }}
                />
            }
        }
        FieldKind::Checkbox => {
            let on_change = props.on_change.clone();
            return html! {
                <div class={classes!("form-field", "checkbox-field", props.error.as_ref().map(|_| "has-error"))}>
                    <label for={id.clone()}>
                        <input
                            id={id.clone()}
                            type="checkbox"
                            checked={props.value.as_flag().unwrap_or(false)}
                            disabled={props.disabled}
                            onchange={move |e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                on_change.emit((spec.name, FieldValue::Flag(input.checked())));
                            }}
                        />
                        <span>{spec.label}</span>
                    </label>
                    if let Some(error) = &props.error {
                        <p class="field-error">{error.clone()}</p>
                    }
                </div>
            };
        }
    };

    html! {
        <div class={classes!("form-field", props.error.as_ref().map(|_| "has-error"))}>
            <label for={id}>
                {spec.label}
                if spec.required {
                    <span class="required-mark">{" *"}</span>
                }
            </label>
            {control}
            if let Some(error) = &props.error {
                <p class="field-error">{error.clone()}</p>
            }
        </div>
    }
}

/// Renders every field of the handle's schema, in schema order.
pub fn form_fields(handle: &UseFormHandle) -> Html {
    let form = handle.form();
    let disabled = !form.status().accepts_submit();
    let on_change = {
        let handle = handle.clone();
        Callback::from(move |(name, value): (&'static str, FieldValue)| {
            handle.set_field(name, value);
        })
    };

    html! {
        { for form.schema().fields.iter().map(|spec| {
            let value = form
                .values()
                .get(spec.name)
                .cloned()
                .unwrap_or_else(|| spec.default_value());
            html! {
                <FieldInput
                    key={spec.name}
                    spec={*spec}
                    value={value}
                    error={form.error_for(spec.name).map(|e| e.to_string())}
                    disabled={disabled}
                    on_change={on_change.clone()}
                />
            }
        }) }
    }
}
