//! Static descriptions of the forms on the site and the native-style
//! constraints checked before a submission goes out.

use crate::error::{FieldError, FieldProblem, FormError};
use crate::forms::state::{FieldValue, FormState};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    LongText,
    Select(&'static [&'static str]),
    Number {
        min: Option<f64>,
        max: Option<f64>,
        default: f64,
    },
    Checkbox,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn default_value(&self) -> FieldValue {
        match self.kind {
            FieldKind::Text | FieldKind::Email | FieldKind::LongText => FieldValue::Text(String::new()),
            FieldKind::Select(options) => {
                FieldValue::Text(options.first().map(|o| o.to_string()).unwrap_or_default())
            }
            FieldKind::Number { default, .. } => FieldValue::Number(default),
            FieldKind::Checkbox => FieldValue::Flag(false),
        }
    }

    fn check(&self, value: Option<&FieldValue>) -> Option<FieldProblem> {
        match self.kind {
            FieldKind::Text | FieldKind::LongText | FieldKind::Select(_) => {
                let text = value.map(FieldValue::as_text).unwrap_or_default();
                (self.required && text.trim().is_empty()).then_some(FieldProblem::Missing)
            }
            FieldKind::Email => {
                let text = value.map(FieldValue::as_text).unwrap_or_default().trim();
                if text.is_empty() {
                    self.required.then_some(FieldProblem::Missing)
                } else if !looks_like_email(text) {
                    Some(FieldProblem::InvalidEmail)
                } else {
                    None
                }
            }
            FieldKind::Number { min, max, .. } => {
                let number = match value.and_then(FieldValue::as_number) {
                    Some(n) => n,
                    None if self.required => return Some(FieldProblem::Missing),
                    None => return None,
                };
                let below = min.map_or(false, |m| number < m);
                let above = max.map_or(false, |m| number > m);
                (number.is_nan() || below || above).then_some(FieldProblem::OutOfRange { min, max })
            }
            FieldKind::Checkbox => {
                let checked = value.and_then(FieldValue::as_flag).unwrap_or(false);
                (self.required && !checked).then_some(FieldProblem::Missing)
            }
        }
    }
}

/// A page form: its id doubles as the endpoint name when posting.
#[derive(Debug, PartialEq)]
pub struct FormSchema {
    pub id: &'static str,
    pub fields: &'static [FieldSpec],
    /// Checkbox that must be ticked before the form can be sent.
    pub agreement: Option<&'static str>,
}

impl FormSchema {
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn defaults(&self) -> FormState {
        let mut state = FormState::default();
        for field in self.fields {
            state.set(field.name, field.default_value());
        }
        if let Some(agreement) = self.agreement {
            if self.field(agreement).is_none() {
                state.set(agreement, FieldValue::Flag(false));
            }
        }
        state
    }

    pub fn validate(&self, state: &FormState) -> Result<(), FormError> {
        let mut errors: Vec<FieldError> = self
            .fields
            .iter()
            .filter(|field| Some(field.name) != self.agreement)
            .filter_map(|field| {
                field
                    .check(state.get(field.name))
                    .map(|problem| FieldError::new(field.name, problem))
            })
            .collect();

        if let Some(agreement) = self.agreement {
            if !state.flag(agreement) {
                errors.push(FieldError::new(agreement, FieldProblem::AgreementRequired));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(FormError::Validation(errors))
        }
    }
}

/// Roughly what `<input type="email">` accepts.
pub fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: &[&str] = &["1-10", "11-50", "51+"];

    static SCHEMA: FormSchema = FormSchema {
        id: "test",
        fields: &[
            FieldSpec::new("name", "Name", FieldKind::Text).required(),
            FieldSpec::new("email", "Email", FieldKind::Email).required(),
            FieldSpec::new("website", "Website", FieldKind::Text),
            FieldSpec::new("size", "Size", FieldKind::Select(SIZES)),
            FieldSpec::new(
                "seats",
                "Seats",
                FieldKind::Number { min: Some(1.0), max: Some(100.0), default: 5.0 },
            ),
            FieldSpec::new("terms", "I agree", FieldKind::Checkbox),
        ],
        agreement: Some("terms"),
    };

    fn filled() -> FormState {
        let mut state = SCHEMA.defaults();
        state.set("name", FieldValue::Text("Ada".into()));
        state.set("email", FieldValue::Text("ada@example.com".into()));
        state.set("terms", FieldValue::Flag(true));
        state
    }

    fn problems(result: Result<(), FormError>) -> Vec<(String, FieldProblem)> {
        result
            .unwrap_err()
            .field_errors()
            .iter()
            .map(|e| (e.field.clone(), e.problem.clone()))
            .collect()
    }

    #[test]
    fn test_defaults_follow_field_kinds() {
        let state = SCHEMA.defaults();
        assert_eq!(state.text("name"), "");
        assert_eq!(state.text("size"), "1-10");
        assert_eq!(state.number("seats"), Some(5.0));
        assert!(!state.flag("terms"));
    }

    #[test]
    fn test_filled_form_is_valid() {
        assert!(SCHEMA.validate(&filled()).is_ok());
    }

    #[test]
    fn test_blank_required_fields_are_reported() {
        let mut state = filled();
        state.set("name", FieldValue::Text("   ".into()));
        state.set("email", FieldValue::Text(String::new()));
        assert_eq!(
            problems(SCHEMA.validate(&state)),
            vec![
                ("name".to_string(), FieldProblem::Missing),
                ("email".to_string(), FieldProblem::Missing),
            ]
        );
    }

    #[test]
    fn test_agreement_must_be_ticked() {
        let mut state = filled();
        state.set("terms", FieldValue::Flag(false));
        assert_eq!(
            problems(SCHEMA.validate(&state)),
            vec![("terms".to_string(), FieldProblem::AgreementRequired)]
        );
    }

    #[test]
    fn test_number_bounds() {
        let mut state = filled();
        state.set("seats", FieldValue::Number(101.0));
        assert_eq!(
            problems(SCHEMA.validate(&state)),
            vec![(
                "seats".to_string(),
                FieldProblem::OutOfRange { min: Some(1.0), max: Some(100.0) }
            )]
        );
        state.set("seats", FieldValue::Number(100.0));
        assert!(SCHEMA.validate(&state).is_ok());
    }

    #[test]
    fn test_optional_fields_may_stay_empty() {
        let state = filled();
        assert_eq!(state.text("website"), "");
        assert!(SCHEMA.validate(&state).is_ok());
    }

    #[test]
    fn test_email_shapes() {
        assert!(looks_like_email("a@b.co"));
        assert!(looks_like_email("first.last+tag@mail.example.org"));
        assert!(!looks_like_email("plainaddress"));
        assert!(!looks_like_email("@example.com"));
        assert!(!looks_like_email("a@localhost"));
        assert!(!looks_like_email("a@b..com"));
        assert!(!looks_like_email("a b@example.com"));
        assert!(!looks_like_email("a@b@example.com"));
    }
}
