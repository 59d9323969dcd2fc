//! Structured validation failures.

use serde::Serialize;

/// Field key used for errors that concern the payload as a whole.
pub const PAYLOAD_FIELD: &str = "_";

/// Message of the update-mode "nothing changed" rule.
pub const NO_CHANGE_MESSAGE: &str = "At least one field must be updated";

/// One violated constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every problem found in one payload, in schema field order.
///
/// Never empty: a failure is only built from at least one error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationFailure {
    errors: Vec<FieldError>,
}

impl ValidationFailure {
    /// Returns `None` when there is nothing to report.
    pub fn from_errors(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self { errors })
        }
    }

    /// The single whole-payload failure of an update that changes nothing.
    pub fn no_change() -> Self {
        Self {
            errors: vec![FieldError::new(PAYLOAD_FIELD, NO_CHANGE_MESSAGE)],
        }
    }

    /// Put `error` in front of the existing ones.
    pub fn with_leading(mut self, error: FieldError) -> Self {
        self.errors.insert(0, error);
        self
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_str()).collect()
    }

    /// Names of the failing fields, in report order.
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }

    pub fn is_no_change(&self) -> bool {
        self.errors.len() == 1
            && self.errors[0].field == PAYLOAD_FIELD
            && self.errors[0].message == NO_CHANGE_MESSAGE
    }
}

impl From<FieldError> for ValidationFailure {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_error_list_is_not_a_failure() {
        assert!(ValidationFailure::from_errors(vec![]).is_none());
    }

    #[test]
    fn no_change_is_a_single_payload_error() {
        let failure = ValidationFailure::no_change();
        assert!(failure.is_no_change());
        assert_eq!(failure.messages(), vec!["At least one field must be updated"]);
        assert_eq!(failure.fields(), vec!["_"]);
    }

    #[test]
    fn display_lists_every_error() {
        let failure = ValidationFailure::from_errors(vec![
            FieldError::new("name", "Name is required"),
            FieldError::new("slug", "Slug is required"),
        ])
        .unwrap();
        assert!(!failure.is_no_change());
        assert_eq!(
            failure.to_string(),
            "validation failed: name: Name is required; slug: Slug is required"
        );
    }

    #[test]
    fn serializes_as_list() {
        let failure = ValidationFailure::no_change();
        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"field": "_", "message": "At least one field must be updated"}])
        );
    }
}
