//! Contact form error types

use thiserror::Error;

use super::ContactField;

/// Errors from validating a contact submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// One or more fields were empty or whitespace-only
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<ContactField>),
}

impl ContactError {
    pub fn missing_fields(&self) -> &[ContactField] {
        match self {
            ContactError::MissingFields(fields) => fields,
        }
    }
}

fn join_fields(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for contact operations
pub type ContactResult<T> = Result<T, ContactError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactError::MissingFields(vec![ContactField::Name, ContactField::Message]);
        assert_eq!(err.to_string(), "Missing required fields: Name, Message");
    }
}
