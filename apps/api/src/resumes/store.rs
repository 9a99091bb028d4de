//! In-memory resume store.
//!
//! Owned by `AppState` and shared across handlers. The map is guarded by an
//! async `RwLock`. Saves are serialized by `commit_order` so the insert and
//! the mirror write for one save happen before the next save starts; the
//! last file written for an id always matches the map entry.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{Local, NaiveDateTime, SubsecRound};
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::resume::{ResumeProfile, StoredResume};
use crate::resumes::mirror::ResumeMirror;

const ID_PREFIX: &str = "resume_";

/// How resume ids are derived.
///
/// `Timestamp` gives `resume_YYYYMMDD_HHMMSS`; two saves in the same second
/// share an id and the later one replaces the earlier. `Unique` appends
/// eight hex chars from a v4 UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    #[default]
    Timestamp,
    Unique,
}

impl IdStrategy {
    pub fn generate(&self, at: NaiveDateTime) -> String {
        let stamp = at.format("%Y%m%d_%H%M%S");
        match self {
            IdStrategy::Timestamp => format!("{ID_PREFIX}{stamp}"),
            IdStrategy::Unique => {
                let suffix = Uuid::new_v4().simple().to_string();
                format!("{ID_PREFIX}{stamp}_{}", &suffix[..8])
            }
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Timestamp => f.write_str("timestamp"),
            IdStrategy::Unique => f.write_str("unique"),
        }
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "timestamp" => Ok(IdStrategy::Timestamp),
            "unique" => Ok(IdStrategy::Unique),
            other => Err(format!(
                "unknown resume id strategy '{other}' (expected 'timestamp' or 'unique')"
            )),
        }
    }
}

pub struct ResumeStore {
    entries: RwLock<HashMap<String, StoredResume>>,
    /// Held across insert + mirror write.
    commit_order: Mutex<()>,
    mirror: Arc<dyn ResumeMirror>,
    id_strategy: IdStrategy,
}

impl ResumeStore {
    pub fn new(mirror: Arc<dyn ResumeMirror>, id_strategy: IdStrategy) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            commit_order: Mutex::new(()),
            mirror,
            id_strategy,
        }
    }

    /// Saves a snapshot of `profile` stamped with the current local time.
    pub async fn save(&self, profile: ResumeProfile) -> StoredResume {
        let now = Local::now().naive_local().trunc_subsecs(6);
        self.save_at(profile, now).await
    }

    /// Saves with an explicit timestamp. The returned value is the in-memory
    /// copy regardless of whether the mirror write succeeds.
    pub async fn save_at(&self, profile: ResumeProfile, at: NaiveDateTime) -> StoredResume {
        let stored = StoredResume {
            id: self.id_strategy.generate(at),
            timestamp: at,
            data: profile,
        };

        let _commit = self.commit_order.lock().await;

        let replaced = {
            let mut entries = self.entries.write().await;
            entries.insert(stored.id.clone(), stored.clone()).is_some()
        };
        if replaced {
            warn!(resume_id = %stored.id, "Resume id collided; previous entry replaced");
        }

        match self.mirror.write(&stored).await {
            Ok(path) => info!(resume_id = %stored.id, path = %path.display(), "Resume saved"),
            Err(e) => {
                warn!(resume_id = %stored.id, "Could not save resume to file: {e}");
            }
        }

        stored
    }

    #[cfg(test)]
    pub async fn get(&self, id: &str) -> Option<StoredResume> {
        self.entries.read().await.get(id).cloned()
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Mutex as StdMutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use super::*;
    use crate::models::resume::{EducationEntry, ExperienceEntry};
    use crate::resumes::mirror::{JsonFileMirror, MirrorError};

    struct FailingMirror;

    #[async_trait]
    impl ResumeMirror for FailingMirror {
        async fn write(&self, _resume: &StoredResume) -> Result<PathBuf, MirrorError> {
            Err(MirrorError::Write {
                path: PathBuf::from("/dev/null/nope.json"),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }
    }

    /// Records the name on every write; writes for "Ada" are slow.
    #[derive(Default)]
    struct SlowRecordingMirror {
        last_written: StdMutex<Option<String>>,
    }

    #[async_trait]
    impl ResumeMirror for SlowRecordingMirror {
        async fn write(&self, resume: &StoredResume) -> Result<PathBuf, MirrorError> {
            if resume.data.name == "Ada" {
                tokio::time::sleep(Duration::from_millis(50)).await;
            }
            *self.last_written.lock().unwrap() = Some(resume.data.name.clone());
            Ok(PathBuf::from(format!("{}.json", resume.id)))
        }
    }

    fn profile(name: &str) -> ResumeProfile {
        ResumeProfile {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "+1 555 0100".to_string(),
            summary: "Backend engineer".to_string(),
            experience: vec![ExperienceEntry {
                id: "exp-1".to_string(),
                company: "Acme".to_string(),
                position: "Engineer".to_string(),
                duration: "2020-2023".to_string(),
                description: "Worked on billing".to_string(),
            }],
            education: vec![EducationEntry {
                id: "edu-1".to_string(),
                institution: "State U".to_string(),
                degree: "BSc".to_string(),
                year: "2019".to_string(),
            }],
            skills: vec!["Rust".to_string(), "SQL".to_string()],
        }
    }

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn is_timestamp_id(id: &str) -> bool {
        let Some(rest) = id.strip_prefix("resume_") else {
            return false;
        };
        let parts: Vec<&str> = rest.split('_').collect();
        parts.len() == 2
            && parts[0].len() == 8
            && parts[1].len() == 6
            && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
    }

    #[test]
    fn test_timestamp_id_format() {
        assert_eq!(
            IdStrategy::Timestamp.generate(at(7, 8, 9)),
            "resume_20240309_070809"
        );
    }

    #[test]
    fn test_unique_id_keeps_prefix_and_adds_suffix() {
        let a = IdStrategy::Unique.generate(at(7, 8, 9));
        let b = IdStrategy::Unique.generate(at(7, 8, 9));
        assert!(a.starts_with("resume_20240309_070809_"));
        assert_eq!(a.len(), "resume_20240309_070809_".len() + 8);
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_save_returns_snapshot_and_stores_it() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ResumeStore::new(
            Arc::new(JsonFileMirror::new(tmp.path())),
            IdStrategy::Timestamp,
        );

        let saved = store.save(profile("Ada")).await;
        assert!(is_timestamp_id(&saved.id), "bad id {}", saved.id);
        assert_eq!(saved.data, profile("Ada"));

        let fetched = store.get(&saved.id).await.unwrap();
        assert_eq!(fetched, saved);
        assert_eq!(store.len().await, 1);
        assert!(tmp.path().join(format!("{}.json", saved.id)).exists());
    }

    #[tokio::test]
    async fn test_same_second_saves_overwrite() {
        let store = ResumeStore::new(Arc::new(FailingMirror), IdStrategy::Timestamp);

        let first = store.save_at(profile("Ada"), at(10, 0, 0)).await;
        let second = store.save_at(profile("Grace"), at(10, 0, 0)).await;

        assert_eq!(first.id, second.id);
        assert_eq!(store.len().await, 1);
        assert_eq!(store.get(&first.id).await.unwrap().data.name, "Grace");
    }

    #[tokio::test]
    async fn test_unique_strategy_avoids_collisions() {
        let store = ResumeStore::new(Arc::new(FailingMirror), IdStrategy::Unique);

        store.save_at(profile("Ada"), at(10, 0, 0)).await;
        store.save_at(profile("Grace"), at(10, 0, 0)).await;

        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_mirror_failure_does_not_fail_save() {
        let store = ResumeStore::new(Arc::new(FailingMirror), IdStrategy::Timestamp);
        assert!(store.is_empty().await);

        let saved = store.save_at(profile("Ada"), at(11, 30, 0)).await;

        assert_eq!(saved.id, "resume_20240309_113000");
        assert_eq!(store.get("resume_20240309_113000").await, Some(saved));
    }

    #[tokio::test]
    async fn test_concurrent_saves_with_unique_ids() {
        let store = Arc::new(ResumeStore::new(
            Arc::new(FailingMirror),
            IdStrategy::Unique,
        ));

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    store.save_at(profile(&format!("User{i}")), at(12, 0, 0)).await
                })
            })
            .collect();
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 16);
    }

    #[tokio::test]
    async fn test_last_file_write_matches_map_on_collision() {
        let mirror = Arc::new(SlowRecordingMirror::default());
        let store = ResumeStore::new(mirror.clone(), IdStrategy::Timestamp);

        let (first, second) = tokio::join!(
            store.save_at(profile("Ada"), at(9, 15, 0)),
            store.save_at(profile("Grace"), at(9, 15, 0)),
        );
        assert_eq!(first.id, second.id);

        let in_memory = store.get(&first.id).await.unwrap().data.name;
        let on_disk = mirror.last_written.lock().unwrap().clone();
        assert_eq!(on_disk.as_deref(), Some(in_memory.as_str()));
    }
}
