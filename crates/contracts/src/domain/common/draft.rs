use chrono::NaiveDate;
use thiserror::Error;

use super::Record;

/// Errors raised while turning form input into a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please provide the {field} for the {entity}.")]
    MissingField {
        entity: &'static str,
        field: &'static str,
    },

    #[error("{field} must be between {min} and {max}.")]
    OutOfRange {
        field: &'static str,
        min: u32,
        max: u32,
    },

    #[error("No more {entity} ids are available.")]
    IdsExhausted { entity: &'static str },
}

impl ValidationError {
    pub fn missing(entity: &'static str, field: &'static str) -> Self {
        Self::MissingField { entity, field }
    }

    /// Short title for notifications
    pub fn title(&self) -> &'static str {
        match self {
            Self::MissingField { .. } => "Missing Information",
            Self::OutOfRange { .. } => "Invalid Value",
            Self::IdsExhausted { .. } => "Limit Reached",
        }
    }
}

/// Transient form state for a new record
pub trait Draft<T: Record> {
    /// Presence checks for required fields
    fn validate(&self) -> Result<(), ValidationError>;

    /// Build the record once an id has been allocated
    fn into_record(self, id: T::Id, today: NaiveDate) -> T;
}

/// Fails with [`ValidationError::MissingField`] when `value` is blank
pub fn require(
    value: &str,
    entity: &'static str,
    field: &'static str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::missing(entity, field))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_blank() {
        assert_eq!(
            require("   ", "service", "title"),
            Err(ValidationError::missing("service", "title"))
        );
        assert!(require("DJ", "service", "title").is_ok());
    }

    #[test]
    fn test_error_text() {
        let err = ValidationError::missing("service", "title");
        assert_eq!(err.to_string(), "Please provide the title for the service.");
        assert_eq!(err.title(), "Missing Information");

        let err = ValidationError::OutOfRange {
            field: "Rating",
            min: 1,
            max: 5,
        };
        assert_eq!(err.to_string(), "Rating must be between 1 and 5.");
        assert_eq!(err.title(), "Invalid Value");

        let err = ValidationError::IdsExhausted { entity: "service" };
        assert_eq!(err.to_string(), "No more service ids are available.");
        assert_eq!(err.title(), "Limit Reached");
    }
}
