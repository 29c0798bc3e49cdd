//! Fault taxonomy for the label store.
//!
//! Absent ids and unknown categories are not errors; those surface as
//! `Ok(None)` / empty vectors from the store operations.

use std::path::PathBuf;

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Disk, permission, or encoding failure while writing an image or
    /// JSON document.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// I/O failure while reading a document that must exist.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document was readable but not deserializable.
    #[error("corrupt document {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Rejected input; nothing was written.
    #[error("invalid label input: {0}")]
    Validation(String),
}

impl StoreError {
    pub fn write(path: PathBuf, source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        StoreError::Write {
            path,
            source: source.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        StoreError::Validation(message.into())
    }
}
