use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use time::OffsetDateTime;

pub const NAME_MAX_CHARS: usize = 100;
pub const MESSAGE_MAX_CHARS: usize = 1000;

// A single trailing newline is tolerated after the address.
#[allow(clippy::unwrap_used)]
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}\n?\z").unwrap());

/// Reasons a contact form is rejected. The display strings are returned to clients verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,
    #[error("Name must be less than 100 characters")]
    NameTooLong,
    #[error("Email is required")]
    EmailRequired,
    #[error("Invalid email format")]
    InvalidEmail,
    #[error("Message is required")]
    MessageRequired,
    #[error("Message must be less than 1000 characters")]
    MessageTooLong,
}

/// A contact form that passed validation but has not been stored yet.
///
/// Fields keep the exact text the client sent; trimming only applies to the
/// emptiness checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    name: String,
    email: String,
    message: String,
}

impl NewContact {
    /// Validates the raw fields. Rules run in order and the first failure wins.
    ///
    /// # Errors
    /// Returns the first `ValidationError` that applies.
    pub fn parse(name: String, email: String, message: String) -> Result<Self, ValidationError> {
        if name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if name.chars().count() > NAME_MAX_CHARS {
            return Err(ValidationError::NameTooLong);
        }

        if email.trim().is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if !EMAIL_REGEX.is_match(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        if message.trim().is_empty() {
            return Err(ValidationError::MessageRequired);
        }
        if message.chars().count() > MESSAGE_MAX_CHARS {
            return Err(ValidationError::MessageTooLong);
        }

        Ok(Self { name, email, message })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn into_parts(self) -> (String, String, String) {
        (self.name, self.email, self.message)
    }
}

/// A stored contact form submission. Never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub message: String,
    pub created_at: Option<OffsetDateTime>,
}
