use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;

use crate::error::FormError;
use crate::forms::state::{FormAction, FormState};

/// Something that can deliver a filled-in form.
#[async_trait(?Send)]
pub trait SubmissionService {
    async fn submit(&self, form_id: &str, values: &FormState) -> Result<(), FormError>;
}

/// Waits a fixed delay and reports success. Stands in for a backend.
pub struct SimulatedSubmission {
    delay_ms: u32,
}

impl SimulatedSubmission {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms }
    }
}

#[async_trait(?Send)]
impl SubmissionService for SimulatedSubmission {
    async fn submit(&self, form_id: &str, _values: &FormState) -> Result<(), FormError> {
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
        info!("Simulated submission of {} form finished", form_id);
        Ok(())
    }
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

/// Posts the form values as JSON to `{base_url}/api/forms/{form_id}`.
#[cfg_attr(not(feature = "live-forms"), allow(dead_code))]
pub struct HttpSubmission {
    base_url: String,
}

#[cfg_attr(not(feature = "live-forms"), allow(dead_code))]
impl HttpSubmission {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self, form_id: &str) -> String {
        format!(
            "{}/api/forms/{}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(form_id)
        )
    }
}

#[async_trait(?Send)]
impl SubmissionService for HttpSubmission {
    async fn submit(&self, form_id: &str, values: &FormState) -> Result<(), FormError> {
        let request = Request::post(&self.endpoint(form_id))
            .json(values)
            .map_err(|e| FormError::Network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| FormError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => response.status_text(),
        };
        Err(FormError::Rejected { status, message })
    }
}

/// Runs one submission and turns its outcome into the reducer action that
/// finishes the lifecycle.
pub async fn deliver(
    service: Rc<dyn SubmissionService>,
    form_id: &'static str,
    values: FormState,
) -> FormAction {
    let outcome = service.submit(form_id, &values).await;
    if let Err(err) = &outcome {
        warn!("Submitting {} form failed: {}", form_id, err);
    }
    FormAction::Complete(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::state::FieldValue;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct Recording {
        calls: RefCell<Vec<(String, FormState)>>,
        outcome: Result<(), FormError>,
    }

    #[async_trait(?Send)]
    impl SubmissionService for Recording {
        async fn submit(&self, form_id: &str, values: &FormState) -> Result<(), FormError> {
            self.calls
                .borrow_mut()
                .push((form_id.to_string(), values.clone()));
            self.outcome.clone()
        }
    }

    fn values() -> FormState {
        let mut state = FormState::default();
        state.set("email", FieldValue::Text("a@b.co".into()));
        state
    }

    #[test]
    fn test_deliver_passes_values_through() {
        let service = Rc::new(Recording {
            calls: RefCell::new(Vec::new()),
            outcome: Ok(()),
        });
        let action = block_on(deliver(service.clone(), "contact", values()));

        assert!(matches!(action, FormAction::Complete(Ok(()))));
        let calls = service.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "contact");
        assert_eq!(calls[0].1.text("email"), "a@b.co");
    }

    #[test]
    fn test_deliver_reports_failure() {
        let service = Rc::new(Recording {
            calls: RefCell::new(Vec::new()),
            outcome: Err(FormError::Rejected {
                status: 422,
                message: "bad email".into(),
            }),
        });
        let action = block_on(deliver(service, "newsletter", values()));

        match action {
            FormAction::Complete(Err(FormError::Rejected { status, .. })) => assert_eq!(status, 422),
            _ => panic!("expected a rejected completion"),
        }
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(
            HttpSubmission::new("http://localhost:3001/").endpoint("demo-request"),
            "http://localhost:3001/api/forms/demo-request"
        );
        assert_eq!(HttpSubmission::new("").endpoint("contact"), "/api/forms/contact");
    }
}
