use crate::domain::contact::{NewContact, Submission};
use crate::error::{AppError, Result};
use crate::storage::contact_repo::ContactRepository;
use opentelemetry::{KeyValue, global, metrics::Counter};

#[derive(Clone, Debug)]
pub(crate) struct Metrics {
    pub(crate) submissions_total: Counter<u64>,
}

impl Metrics {
    fn new() -> Self {
        let meter = global::meter("contact-form-server");
        Self {
            submissions_total: meter
                .u64_counter("contact_submissions_total")
                .with_description("Contact form submissions by outcome")
                .build(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ContactService {
    repo: ContactRepository,
    metrics: Metrics,
}

impl ContactService {
    #[must_use]
    pub fn new(repo: ContactRepository) -> Self {
        Self { repo, metrics: Metrics::new() }
    }

    /// Stores a validated contact form and returns the new submission.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the submission cannot be persisted.
    #[tracing::instrument(skip_all)]
    pub async fn submit(&self, contact: NewContact) -> Result<Submission> {
        match self.repo.append(contact).await {
            Ok(submission) => {
                self.metrics.submissions_total.add(1, &[KeyValue::new("status", "success")]);
                tracing::info!(id = submission.id, "New contact form submitted");
                Ok(submission)
            }
            Err(e) => {
                self.metrics.submissions_total.add(1, &[KeyValue::new("status", "failure")]);
                Err(AppError::storage("submit contact form")(e))
            }
        }
    }

    /// Records a submission rejected by validation.
    pub fn record_rejected(&self) {
        self.metrics.submissions_total.add(1, &[KeyValue::new("status", "invalid")]);
    }

    /// Lists all submissions, oldest first.
    ///
    /// # Errors
    /// Returns `AppError::Storage` if the store cannot be read.
    #[tracing::instrument(skip_all)]
    pub async fn list(&self) -> Result<Vec<Submission>> {
        let submissions = self.repo.list_all().await.map_err(AppError::storage("fetch contacts"))?;
        tracing::debug!(count = submissions.len(), "Fetched contacts");
        Ok(submissions)
    }
}
