use std::path::PathBuf;
use thiserror::Error;

pub mod contact_repo;
pub mod records;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed contact store {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Failed to encode contact store: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}
