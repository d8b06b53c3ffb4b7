//! Contact Form
//!
//! A three-field form (name, email, message) checked only for presence.
//! Submissions are never stored or delivered; a valid one just produces a
//! thank-you message.
//!
//! The form moves through a trivial state machine on each render pass:
//! `Idle` until submitted, then `Accepted` or `Rejected`, and back to
//! `Idle` on the next plain page load.

pub mod error;

pub use error::{ContactError, ContactResult};

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tracker::Feedback;

/// Shown after a complete submission
pub const ACCEPTED_MESSAGE: &str = "✅ Thank you! We'll get back to you shortly.";

/// Shown when any field is missing
pub const REJECTED_MESSAGE: &str = "⚠️ Please fill in all fields before submitting.";

/// The fields of the contact form
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Message => "Message",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One submission of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactSubmission {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Fields that are empty after trimming whitespace
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }

    /// Presence check on all three fields; email format is not inspected
    pub fn validate(&self) -> ContactResult<()> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ContactError::MissingFields(missing))
        }
    }
}

/// Outcome of the current render pass of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ContactState {
    /// Nothing submitted in this pass
    #[default]
    Idle,
    /// All fields present
    Accepted,
    /// At least one field missing
    Rejected(Vec<ContactField>),
}

impl ContactState {
    /// Validate a submission and discard it, keeping only the outcome
    pub fn submit(submission: &ContactSubmission) -> Self {
        match submission.validate() {
            Ok(()) => {
                tracing::info!("Contact submission accepted");
                ContactState::Accepted
            }
            Err(ContactError::MissingFields(missing)) => {
                tracing::debug!(missing = ?missing, "Contact submission rejected");
                ContactState::Rejected(missing)
            }
        }
    }

    /// Status message for this state, if any
    pub fn feedback(&self) -> Option<Feedback> {
        match self {
            ContactState::Idle => None,
            ContactState::Accepted => Some(Feedback::success(ACCEPTED_MESSAGE)),
            ContactState::Rejected(_) => Some(Feedback::error(REJECTED_MESSAGE)),
        }
    }
}
