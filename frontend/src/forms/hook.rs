use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::config;
use crate::forms::schema::FormSchema;
use crate::forms::service::{deliver, SubmissionService};
use crate::forms::state::{FieldValue, Form, FormAction};

/// Submission backend shared with every form below the provider.
#[derive(Clone)]
pub struct SubmissionContext(pub Rc<dyn SubmissionService>);

impl PartialEq for SubmissionContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone)]
pub struct UseFormHandle {
    form: UseReducerHandle<Form>,
    service: Rc<dyn SubmissionService>,
}

impl UseFormHandle {
    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn set_field(&self, name: &str, value: FieldValue) {
        self.form
            .dispatch(FormAction::SetField(name.to_string(), value));
    }

    pub fn submit(&self) {
        let mut probe = (*self.form).clone();
        let outcome = probe.begin_submit();
        self.form.dispatch(FormAction::BeginSubmit);

        match outcome {
            Ok(values) => {
                let form_id = probe.schema().id;
                info!("Submitting {} form", form_id);
                let form = self.form.clone();
                let service = self.service.clone();
                spawn_local(async move {
                    form.dispatch(deliver(service, form_id, values).await);
                });
            }
            Err(err) => warn!("{} form not sent: {}", probe.schema().id, err),
        }
    }

    pub fn reset(&self) {
        self.form.dispatch(FormAction::Reset);
    }

    /// Form `onsubmit` handler that keeps the browser from navigating.
    pub fn on_submit(&self) -> Callback<SubmitEvent> {
        let handle = self.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            handle.submit();
        })
    }
}

#[hook]
pub fn use_form(schema: &'static FormSchema) -> UseFormHandle {
    let form = use_reducer(|| Form::new(schema));
    let service = use_context::<SubmissionContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(config::submission_service);

    UseFormHandle { form, service }
}
