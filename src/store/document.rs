use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::error::HabitError;
use super::models::UserRecord;

/// The full persisted document: string user id to that user's record.
pub type StoreData = HashMap<String, UserRecord>;

/// Owns the on-disk JSON document and its read/write protocol.
///
/// Writes go to a temporary sibling file first and are renamed over the
/// target, so a reader never observes a half-written document.
#[derive(Clone)]
pub struct StoreDocument {
    path: PathBuf,
}

impl StoreDocument {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document. A missing or malformed file degrades to an
    /// empty store; other I/O failures propagate.
    pub async fn load(&self) -> Result<StoreData, HabitError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("Store document {} not found, starting empty", self.path.display());
                return Ok(StoreData::new());
            }
            Err(e) => return Err(HabitError::Storage(e)),
        };

        if content.trim().is_empty() {
            return Ok(StoreData::new());
        }

        match serde_json::from_str(&content) {
            Ok(data) => Ok(data),
            Err(e) => {
                warn!(
                    "Store document {} is malformed ({}), treating as empty",
                    self.path.display(),
                    e
                );
                Ok(StoreData::new())
            }
        }
    }

    /// Writes the whole document atomically: temp file, then rename.
    pub async fn save(&self, data: &StoreData) -> Result<(), HabitError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(data)?;
        let tmp_path = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, content.as_bytes()).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}
