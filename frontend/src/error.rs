use std::fmt;
use thiserror::Error;

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldProblem {
    Missing,
    InvalidEmail,
    OutOfRange { min: Option<f64>, max: Option<f64> },
    AgreementRequired,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub problem: FieldProblem,
}

impl FieldError {
    pub fn new(field: &str, problem: FieldProblem) -> Self {
        Self {
            field: field.to_string(),
            problem,
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.problem {
            FieldProblem::Missing => write!(f, "This field is required"),
            FieldProblem::InvalidEmail => write!(f, "Please enter a valid email address"),
            FieldProblem::OutOfRange { min: Some(min), max: Some(max) } => {
                write!(f, "Please enter a value between {} and {}", min, max)
            }
            FieldProblem::OutOfRange { min: Some(min), max: None } => {
                write!(f, "Please enter a value of at least {}", min)
            }
            FieldProblem::OutOfRange { min: None, max: Some(max) } => {
                write!(f, "Please enter a value of at most {}", max)
            }
            FieldProblem::OutOfRange { min: None, max: None } => write!(f, "Please enter a number"),
            FieldProblem::AgreementRequired => write!(f, "You need to accept the terms to continue"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{} field(s) need attention", .0.len())]
    Validation(Vec<FieldError>),
    #[error("form has already been sent")]
    NotIdle,
    #[error("request failed: {0}")]
    Network(String),
    #[error("server rejected the form ({status}): {message}")]
    Rejected { status: u16, message: String },
}

impl FormError {
    /// Field errors carried by a validation failure, empty otherwise.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            FormError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read stored preferences: {0}")]
    Read(String),
    #[error("failed to write preferences: {0}")]
    Write(String),
    #[error("stored preferences are not valid: {0}")]
    Corrupt(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_counts_fields() {
        let err = FormError::Validation(vec![
            FieldError::new("email", FieldProblem::InvalidEmail),
            FieldError::new("name", FieldProblem::Missing),
        ]);
        assert_eq!(err.to_string(), "2 field(s) need attention");
        assert_eq!(err.field_errors().len(), 2);
    }

    #[test]
    fn test_non_validation_errors_have_no_field_errors() {
        assert!(FormError::Network("offline".into()).field_errors().is_empty());
        assert!(FormError::NotIdle.field_errors().is_empty());
    }

    #[test]
    fn test_range_message() {
        let err = FieldError::new(
            "team_size",
            FieldProblem::OutOfRange { min: Some(1.0), max: Some(500.0) },
        );
        assert_eq!(err.to_string(), "Please enter a value between 1 and 500");
    }
}
