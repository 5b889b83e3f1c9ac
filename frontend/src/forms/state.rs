use std::collections::BTreeMap;
use std::rc::Rc;

use serde::Serialize;
use yew::prelude::*;

use crate::error::{FieldError, FormError};
use crate::forms::schema::FormSchema;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
    Number(f64),
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            _ => "",
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(flag) => Some(*flag),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Current values of a page form, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormState {
    values: BTreeMap<String, FieldValue>,
}

impl FormState {
    pub fn set(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> &str {
        self.get(name).map(FieldValue::as_text).unwrap_or_default()
    }

    pub fn flag(&self, name: &str) -> bool {
        self.get(name).and_then(FieldValue::as_flag).unwrap_or(false)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FieldValue::as_number)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
    Failed(FormError),
}

impl SubmissionStatus {
    pub fn accepts_submit(&self) -> bool {
        matches!(self, SubmissionStatus::Idle | SubmissionStatus::Failed(_))
    }
}

/// A form's values together with where it is in its submission lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    schema: &'static FormSchema,
    values: FormState,
    status: SubmissionStatus,
    errors: Vec<FieldError>,
}

impl Form {
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            schema,
            values: schema.defaults(),
            status: SubmissionStatus::Idle,
            errors: Vec::new(),
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.schema
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn error_for(&self, field: &str) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field == field)
    }

    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        self.values.set(name, value);
        self.errors.retain(|e| e.field != name);
    }

    /// Moves to `Submitting` when the values pass validation and hands back
    /// the snapshot that should be sent.
    pub fn begin_submit(&mut self) -> Result<FormState, FormError> {
        if !self.status.accepts_submit() {
            return Err(FormError::NotIdle);
        }
        match self.schema.validate(&self.values) {
            Ok(()) => {
                self.errors.clear();
                self.status = SubmissionStatus::Submitting;
                Ok(self.values.clone())
            }
            Err(err) => {
                self.errors = err.field_errors().to_vec();
                Err(err)
            }
        }
    }

    pub fn complete(&mut self, outcome: Result<(), FormError>) {
        if self.status != SubmissionStatus::Submitting {
            return;
        }
        self.status = match outcome {
            Ok(()) => SubmissionStatus::Submitted,
            Err(err) => SubmissionStatus::Failed(err),
        };
    }

    pub fn reset(&mut self) {
        *self = Form::new(self.schema);
    }
}

pub enum FormAction {
    SetField(String, FieldValue),
    BeginSubmit,
    Complete(Result<(), FormError>),
    Reset,
}

impl Reducible for Form {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::SetField(name, value) => next.set_field(&name, value),
            FormAction::BeginSubmit => {
                let _ = next.begin_submit();
            }
            FormAction::Complete(outcome) => next.complete(outcome),
            FormAction::Reset => next.reset(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldProblem;
    use crate::forms::schema::{FieldKind, FieldSpec};

    static CONTACT: FormSchema = FormSchema {
        id: "contact",
        fields: &[
            FieldSpec::new("name", "Name", FieldKind::Text).required(),
            FieldSpec::new("email", "Email", FieldKind::Email).required(),
            FieldSpec::new("message", "Message", FieldKind::LongText),
        ],
        agreement: None,
    };

    static WITH_TERMS: FormSchema = FormSchema {
        id: "demo",
        fields: &[FieldSpec::new("email", "Email", FieldKind::Email).required()],
        agreement: Some("agree"),
    };

    fn valid_contact() -> Form {
        let mut form = Form::new(&CONTACT);
        form.set_field("name", FieldValue::Text("Grace".into()));
        form.set_field("email", FieldValue::Text("grace@example.com".into()));
        form
    }

    #[test]
    fn test_last_write_wins_per_field() {
        let mut form = Form::new(&CONTACT);
        form.set_field("name", FieldValue::Text("A".into()));
        form.set_field("message", FieldValue::Text("first".into()));
        form.set_field("name", FieldValue::Text("B".into()));
        form.set_field("message", FieldValue::Text("second".into()));
        form.set_field("name", FieldValue::Text("C".into()));

        assert_eq!(form.values().text("name"), "C");
        assert_eq!(form.values().text("message"), "second");
        assert_eq!(form.values().text("email"), "");
        assert!(form.values().get("phone").is_none());
    }

    #[test]
    fn test_missing_required_field_stays_idle() {
        let mut form = Form::new(&CONTACT);
        form.set_field("name", FieldValue::Text("Grace".into()));

        let err = form.begin_submit().unwrap_err();
        assert!(matches!(err, FormError::Validation(_)));
        assert_eq!(form.status(), &SubmissionStatus::Idle);
        assert_eq!(
            form.error_for("email").map(|e| &e.problem),
            Some(&FieldProblem::Missing)
        );
    }

    #[test]
    fn test_unchecked_agreement_stays_idle() {
        let mut form = Form::new(&WITH_TERMS);
        form.set_field("email", FieldValue::Text("x@example.com".into()));

        assert!(form.begin_submit().is_err());
        assert_eq!(form.status(), &SubmissionStatus::Idle);

        form.set_field("agree", FieldValue::Flag(true));
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.status(), &SubmissionStatus::Submitting);
    }

    #[test]
    fn test_editing_clears_that_fields_error() {
        let mut form = Form::new(&CONTACT);
        let _ = form.begin_submit();
        assert!(form.error_for("name").is_some());

        form.set_field("name", FieldValue::Text("Grace".into()));
        assert!(form.error_for("name").is_none());
        assert!(form.error_for("email").is_some());
    }

    #[test]
    fn test_valid_submit_runs_once_to_submitted() {
        let mut form = valid_contact();

        let snapshot = form.begin_submit().unwrap();
        assert_eq!(snapshot.text("name"), "Grace");
        assert_eq!(form.status(), &SubmissionStatus::Submitting);

        assert_eq!(form.begin_submit(), Err(FormError::NotIdle));
        assert_eq!(form.status(), &SubmissionStatus::Submitting);

        form.complete(Ok(()));
        assert_eq!(form.status(), &SubmissionStatus::Submitted);

        assert_eq!(form.begin_submit(), Err(FormError::NotIdle));
        form.complete(Err(FormError::Network("late".into())));
        assert_eq!(form.status(), &SubmissionStatus::Submitted);
    }

    #[test]
    fn test_failed_submission_can_be_retried() {
        let mut form = valid_contact();
        form.begin_submit().unwrap();
        form.complete(Err(FormError::Network("offline".into())));
        assert!(matches!(form.status(), SubmissionStatus::Failed(_)));

        assert!(form.begin_submit().is_ok());
        assert_eq!(form.status(), &SubmissionStatus::Submitting);
    }

    #[test]
    fn test_complete_ignored_when_idle() {
        let mut form = valid_contact();
        form.complete(Ok(()));
        assert_eq!(form.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = valid_contact();
        form.begin_submit().unwrap();
        form.complete(Ok(()));

        form.reset();
        assert_eq!(form, Form::new(&CONTACT));
    }

    #[test]
    fn test_reducer_keeps_same_rc_when_nothing_changes() {
        let form = Rc::new(valid_contact());
        let next = form.clone().reduce(FormAction::Complete(Ok(())));
        assert!(Rc::ptr_eq(&form, &next));

        let next = form.clone().reduce(FormAction::BeginSubmit);
        assert_eq!(next.status(), &SubmissionStatus::Submitting);
        let done = next.reduce(FormAction::Complete(Ok(())));
        assert_eq!(done.status(), &SubmissionStatus::Submitted);
    }

    #[test]
    fn test_values_serialize_as_flat_object() {
        let mut state = FormState::default();
        state.set("email", FieldValue::Text("a@b.co".into()));
        state.set("seats", FieldValue::Number(3.0));
        state.set("agree", FieldValue::Flag(true));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "agree": true, "email": "a@b.co", "seats": 3.0 })
        );
    }
}
