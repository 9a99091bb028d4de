//! Best-effort file mirror of saved resumes.
//!
//! The in-memory store is authoritative. A mirror write happens after the
//! store commit and its failure is only logged by the caller.

use std::path::PathBuf;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::resume::StoredResume;

#[derive(Debug, Error)]
pub enum MirrorError {
    #[error("could not create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not serialize resume: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Secondary persistence for saved resumes. Carried by `ResumeStore` as
/// `Arc<dyn ResumeMirror>`.
#[async_trait]
pub trait ResumeMirror: Send + Sync {
    /// Persists one resume, returning where it went.
    async fn write(&self, resume: &StoredResume) -> Result<PathBuf, MirrorError>;
}

/// Writes `<dir>/<resume_id>.json`, pretty-printed with two-space indents.
/// The directory is created on first write. Writes are not atomic.
#[derive(Debug, Clone)]
pub struct JsonFileMirror {
    dir: PathBuf,
}

impl JsonFileMirror {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, resume_id: &str) -> PathBuf {
        self.dir.join(format!("{resume_id}.json"))
    }
}

#[async_trait]
impl ResumeMirror for JsonFileMirror {
    async fn write(&self, resume: &StoredResume) -> Result<PathBuf, MirrorError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| MirrorError::CreateDir {
                path: self.dir.clone(),
                source,
            })?;

        let path = self.path_for(&resume.id);
        let body = serde_json::to_vec_pretty(resume)?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|source| MirrorError::Write {
                path: path.clone(),
                source,
            })?;

        Ok(path)
    }
}
