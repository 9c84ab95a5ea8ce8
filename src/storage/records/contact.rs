use crate::domain::contact::Submission;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::{Iso8601, Rfc3339};
use time::{OffsetDateTime, PrimitiveDateTime};

/// On-disk shape of one submission inside the JSON store.
///
/// `created_at` stays as text so records written by other producers are kept
/// byte-for-byte when the collection is rewritten.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ContactRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub message: String,
    #[serde(default)]
    pub created_at: String,
}

/// Parses an RFC 3339 timestamp, falling back to an ISO 8601 timestamp without
/// offset which is taken as UTC.
fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .or_else(|| PrimitiveDateTime::parse(raw, &Iso8601::DEFAULT).ok().map(PrimitiveDateTime::assume_utc))
}

impl From<ContactRecord> for Submission {
    fn from(record: ContactRecord) -> Self {
        let created_at = parse_timestamp(&record.created_at);
        if created_at.is_none() {
            tracing::debug!(id = record.id, created_at = %record.created_at, "Unparseable created_at timestamp");
        }
        Self { id: record.id, name: record.name, email: record.email, message: record.message, created_at }
    }
}
