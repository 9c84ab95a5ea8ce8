use crate::storage::contact_repo::ContactRepository;
use opentelemetry::{KeyValue, global, metrics::Gauge};

#[derive(Clone, Debug)]
pub struct Metrics {
    pub status: Gauge<i64>,
}

impl Metrics {
    #[must_use]
    pub(crate) fn new() -> Self {
        let meter = global::meter("contact-form-server");
        Self {
            status: meter
                .i64_gauge("contact_health_status")
                .with_description("Status of health checks (1 for ok, 0 for error)")
                .build(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct HealthService {
    repo: ContactRepository,
    metrics: Metrics,
}

impl HealthService {
    #[must_use]
    pub fn new(repo: ContactRepository) -> Self {
        Self { repo, metrics: Metrics::new() }
    }

    /// Checks that the contact store can be read.
    ///
    /// # Errors
    /// Returns a string describing the failure if the store is unreadable or malformed.
    pub async fn check_storage(&self) -> Result<(), String> {
        match self.repo.check().await {
            Ok(()) => {
                self.metrics.status.record(1, &[KeyValue::new("component", "storage")]);
                Ok(())
            }
            Err(e) => {
                self.metrics.status.record(0, &[KeyValue::new("component", "storage")]);
                Err(format!("Contact store check failed: {e}"))
            }
        }
    }
}
