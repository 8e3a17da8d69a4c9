use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::curriculum::Level;
use crate::error::StoreError;
use crate::pipeline::PipelineResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    pub id: String,
    pub name: String,
    pub level: String,
    pub join_date: DateTime<Utc>,
}

impl Default for LearnerProfile {
    fn default() -> Self {
        Self {
            id: format!("user_{}", uuid::Uuid::new_v4().simple()),
            name: "Student".to_string(),
            level: "Explorer".to_string(),
            join_date: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerStats {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_points: u64,
    pub completed_levels: u32,
    pub processed_docs: u64,
    pub ai_questions: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub name: String,
    pub size: u64,
    pub processed_at: DateTime<Utc>,
    pub questions_generated: usize,
}

/// Everything persisted for one learner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LibrarySnapshot {
    pub user: LearnerProfile,
    pub stats: LearnerStats,
    #[serde(default)]
    pub documents: Vec<DocumentRecord>,
    #[serde(default)]
    pub levels: Vec<Level>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// JSON snapshot of the learner's library at a fixed path.
pub struct LibraryStore {
    path: PathBuf,
    snapshot: LibrarySnapshot,
}

impl LibraryStore {
    /// Loads the snapshot at `path`, or starts from defaults when the file
    /// doesn't exist yet. Nothing is written until [`LibraryStore::save`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        let snapshot = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| StoreError::ReadSnapshot {
                path: path.clone(),
                source: e,
            })?;
            serde_json::from_str(&content).map_err(|e| StoreError::ParseSnapshot {
                path: path.clone(),
                source: e,
            })?
        } else {
            debug!(path = %path.display(), "No library snapshot yet, starting fresh");
            LibrarySnapshot::default()
        };

        Ok(Self { path, snapshot })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn snapshot(&self) -> &LibrarySnapshot {
        &self.snapshot
    }

    /// Folds a successful run into the snapshot. Failed results are ignored.
    pub fn record(&mut self, result: &PipelineResult) {
        if !result.success {
            return;
        }

        let stats = &mut self.snapshot.stats;
        stats.processed_docs += 1;
        stats.ai_questions += result.total_questions as u64;
        stats.last_activity = Some(result.processed_at);

        self.snapshot.documents.push(DocumentRecord {
            name: result.file_name.clone(),
            size: result.file_size,
            processed_at: result.processed_at,
            questions_generated: result.total_questions,
        });
        self.snapshot.levels.extend(result.levels.iter().cloned());

        info!(
            document = %crate::sanitize::redact_name(&result.file_name),
            questions = result.total_questions,
            "Recorded document in library"
        );
    }

    /// Writes the snapshot through a temp file and a rename, so readers see
    /// either the old or the new snapshot.
    pub fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::CreateDirectory {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json =
            serde_json::to_vec_pretty(&self.snapshot).map_err(StoreError::SerializeSnapshot)?;

        let tmp_path = self.temp_path();
        let write_err = |e| StoreError::WriteSnapshot {
            path: tmp_path.clone(),
            source: e,
        };

        let mut file = std::fs::File::create(&tmp_path).map_err(write_err)?;
        file.write_all(&json).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
        drop(file);

        std::fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::WriteSnapshot {
            path: self.path.clone(),
            source: e,
        })?;

        debug!(path = %self.path.display(), bytes = json.len(), "Saved library snapshot");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
