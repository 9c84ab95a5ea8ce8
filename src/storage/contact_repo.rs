use crate::domain::contact::{NewContact, Submission};
use crate::storage::StorageError;
use crate::storage::records::ContactRecord;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::Mutex;

/// Append-only collection of submissions kept in a single JSON file.
///
/// Every append rewrites the whole file. Appends are serialized through an
/// in-process lock so id assignment (`count + 1`) cannot race; the file is
/// replaced by rename so readers never observe a partial write.
#[derive(Clone, Debug)]
pub struct ContactRepository {
    path: Arc<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl ContactRepository {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: Arc::new(path.into()), write_lock: Arc::new(Mutex::new(())) }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stores a validated contact under the next id and returns it.
    ///
    /// # Errors
    /// Returns `StorageError` if the store cannot be read or written.
    /// A malformed store counts as empty; it is moved aside to `<file>.corrupt` before the rewrite.
    #[tracing::instrument(err, skip_all)]
    pub async fn append(&self, contact: NewContact) -> Result<Submission, StorageError> {
        let _guard = self.write_lock.lock().await;

        let mut records = match self.load().await {
            Ok(records) => records.unwrap_or_default(),
            Err(StorageError::Malformed { path, source }) => {
                let corrupt_path = self.corrupt_path();
                tracing::warn!(
                    path = %path.display(),
                    moved_to = %corrupt_path.display(),
                    error = %source,
                    "Contact store is malformed, starting a new collection"
                );
                tokio::fs::rename(&path, &corrupt_path).await.map_err(io_error(&corrupt_path))?;
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        let id = records.len() as u64 + 1;
        let now = OffsetDateTime::now_utc();
        let (name, email, message) = contact.into_parts();

        let record = ContactRecord { id, name, email, message, created_at: now.format(&Rfc3339)? };
        records.push(record.clone());
        self.save(&records).await?;

        tracing::debug!(id, total = records.len(), "Contact store rewritten");
        Ok(Submission { id, name: record.name, email: record.email, message: record.message, created_at: Some(now) })
    }

    /// Returns every submission, oldest first.
    ///
    /// A missing or malformed store reads as empty.
    ///
    /// # Errors
    /// Returns `StorageError::Io` for I/O failures other than the file not existing.
    #[tracing::instrument(err, skip_all)]
    pub async fn list_all(&self) -> Result<Vec<Submission>, StorageError> {
        match self.load().await {
            Ok(records) => Ok(records.unwrap_or_default().into_iter().map(Submission::from).collect()),
            Err(StorageError::Malformed { path, source }) => {
                tracing::warn!(path = %path.display(), error = %source, "Contact store is malformed, treating as empty");
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Checks that the store is readable and well-formed.
    ///
    /// # Errors
    /// Returns the `StorageError` a write would hit while loading the collection.
    pub async fn check(&self) -> Result<(), StorageError> {
        self.load().await.map(|_| ())
    }

    /// Reads the collection. `Ok(None)` means the file does not exist yet.
    async fn load(&self) -> Result<Option<Vec<ContactRecord>>, StorageError> {
        let bytes = match tokio::fs::read(self.path.as_path()).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(io_error(&self.path)(source)),
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StorageError::Malformed { path: self.path.to_path_buf(), source })
    }

    async fn save(&self, records: &[ContactRecord]) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(records).map_err(StorageError::Encode)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_error(parent))?;
        }

        let tmp_path = self.tmp_path();
        tokio::fs::write(&tmp_path, &bytes).await.map_err(io_error(&tmp_path))?;
        tokio::fs::rename(&tmp_path, self.path.as_path()).await.map_err(io_error(self.path.as_path()))?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        self.sibling_path(".tmp")
    }

    fn corrupt_path(&self) -> PathBuf {
        self.sibling_path(".corrupt")
    }

    fn sibling_path(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.file_name().map(ToOwned::to_owned).unwrap_or_default();
        name.push(suffix);
        self.path.with_file_name(name)
    }
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> StorageError + use<> {
    let path = path.to_path_buf();
    move |source| StorageError::Io { path, source }
}
