use yew::prelude::*;

use crate::forms::state::SubmissionStatus;

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub status: SubmissionStatus,
    pub label: AttrValue,
    #[prop_or(AttrValue::Static("Sending..."))]
    pub busy_label: AttrValue,
    /// Extra gate on top of the status, e.g. an unticked agreement box.
    #[prop_or(true)]
    pub enabled: bool,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    let submitting = props.status == SubmissionStatus::Submitting;
    let disabled = submitting || !props.enabled || !props.status.accepts_submit();

    html! {
        <button type="submit" class={classes!("submit-button", submitting.then(|| "is-busy"))} {disabled}>
            if submitting {
                <>
                    <span class="loading-spinner"></span>
                    {" "}{props.busy_label.clone()}
                </>
            } else {
                {props.label.clone()}
            }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmissionErrorProps {
    pub status: SubmissionStatus,
}

/// Shown above the submit button after a failed attempt.
#[function_component(SubmissionError)]
pub fn submission_error(props: &SubmissionErrorProps) -> Html {
    match &props.status {
        SubmissionStatus::Failed(err) => html! {
            <div class="error-message" role="alert">
                {format!("We couldn't send this right now ({}). Please try again.", err)}
            </div>
        },
        _ => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct ConfirmationProps {
    pub title: AttrValue,
    pub message: AttrValue,
    #[prop_or_default]
    pub on_reset: Option<Callback<MouseEvent>>,
    #[prop_or(AttrValue::Static("Send another"))]
    pub reset_label: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Confirmation)]
pub fn confirmation(props: &ConfirmationProps) -> Html {
    html! {
        <div class="confirmation-panel">
            <div class="confirmation-check">{"✓"}</div>
            <h2>{props.title.clone()}</h2>
            <p>{props.message.clone()}</p>
            { for props.children.iter() }
            if let Some(on_reset) = props.on_reset.clone() {
                <button class="secondary-button" onclick={on_reset}>{props.reset_label.clone()}</button>
            }
        </div>
    }
}
