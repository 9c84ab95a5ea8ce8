use crate::domain::contact::{NewContact, Submission, ValidationError};
use serde::{Deserialize, Deserializer, Serialize};

/// Body of `POST /contact`. All fields must be present strings.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// # Errors
    /// Returns the first rule the form violates.
    pub fn validate(self) -> Result<NewContact, ValidationError> {
        NewContact::parse(self.name, self.email, self.message)
    }
}

/// Body of `POST /contact-raw`. Missing or null fields read as empty strings.
#[derive(Debug, Default, Deserialize)]
pub struct RawContactForm {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

impl RawContactForm {
    /// # Errors
    /// Returns the first rule the form violates.
    pub fn validate(self) -> Result<NewContact, ValidationError> {
        NewContact::parse(self.name, self.email, self.message)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Public view of a submission; `created_at` is not exposed.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactResponse {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl From<Submission> for ContactResponse {
    fn from(submission: Submission) -> Self {
        Self { id: submission.id, name: submission.name, email: submission.email, message: submission.message }
    }
}
