// src/store/mod.rs

//! File-backed plan history.
//!
//! Each plan lives in its own JSON file under the store directory:
//!
//! ```text
//! <dir>/<plan id>.json   { "id": "...", "goal": "...", "created_at": "...", "tasks": [ ... ] }
//! ```
//!
//! Every `create` is its own history entry, even for identical content.
//! Listings are newest first.
//!
//! The store is the persistence sink for edited plans. It only ever receives
//! complete task lists; a failed write leaves whatever the caller holds in
//! memory untouched.

use std::path::{Path, PathBuf};

use blake3::Hasher;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::errors::{PlanError, Result};
use crate::fs::FileSystem;
use crate::plan::Task;
use crate::types::PlanId;

const PLAN_FILE_EXT: &str = "json";
const PLAN_ID_LEN: usize = 16;

/// A stored plan: the goal it was generated for and its tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub id: PlanId,
    pub goal: String,
    /// Records written before timestamps existed read as the Unix epoch.
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    pub tasks: Vec<Task>,
}

/// Listing entry for `history list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSummary {
    pub id: PlanId,
    pub goal: String,
    pub created_at: DateTime<Utc>,
    pub task_count: usize,
}

/// Derive a plan id from its content, creation time and a collision counter.
///
/// The same inputs always yield the same id; `PlanStore::create_at` bumps
/// `attempt` until the id is unused.
pub fn plan_id_for(
    goal: &str,
    tasks: &[Task],
    created_at: DateTime<Utc>,
    attempt: u32,
) -> PlanId {
    let mut hasher = Hasher::new();
    hasher.update(created_at.to_rfc3339().as_bytes());
    hasher.update(&attempt.to_le_bytes());
    hasher.update(goal.as_bytes());
    for task in tasks {
        hasher.update(b"\0");
        hasher.update(task.name.as_bytes());
        hasher.update(b"\0");
        hasher.update(task.duration.as_bytes());
        hasher.update(b"\0");
        hasher.update(task.dependency().unwrap_or_default().as_bytes());
    }
    let hex = hasher.finalize().to_hex();
    PlanId::new(&hex.as_str()[..PLAN_ID_LEN])
}

#[derive(Debug)]
pub struct PlanStore<F: FileSystem> {
    fs: F,
    dir: PathBuf,
}

impl<F: FileSystem> PlanStore<F> {
    pub fn new(fs: F, dir: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            dir: dir.into(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Store a new plan stamped with the current time and return its id.
    pub fn create(&self, goal: &str, tasks: Vec<Task>) -> Result<PlanId> {
        self.create_at(goal, tasks, Utc::now())
    }

    /// Store a new plan with an explicit creation time.
    pub fn create_at(
        &self,
        goal: &str,
        tasks: Vec<Task>,
        created_at: DateTime<Utc>,
    ) -> Result<PlanId> {
        let mut attempt = 0;
        let id = loop {
            let candidate = plan_id_for(goal, &tasks, created_at, attempt);
            if !self.fs.is_file(&self.path_for(&candidate)?) {
                break candidate;
            }
            attempt += 1;
        };

        let record = PlanRecord {
            id: id.clone(),
            goal: goal.to_string(),
            created_at,
            tasks,
        };
        self.write_record(&record)?;
        info!(plan = %id, tasks = record.tasks.len(), "stored task plan");
        Ok(id)
    }

    pub fn load(&self, id: &PlanId) -> Result<PlanRecord> {
        let path = self.path_for(id)?;
        if !self.fs.is_file(&path) {
            return Err(PlanError::PlanNotFound(id.to_string()));
        }
        let contents = self.fs.read_to_string(&path)?;
        let record: PlanRecord = serde_json::from_str(&contents)?;
        debug!(plan = %id, "loaded task plan");
        Ok(record)
    }

    /// Replace the task list of an existing plan.
    pub fn update_tasks(&self, id: &PlanId, tasks: Vec<Task>) -> Result<PlanRecord> {
        let mut record = self.load(id)?;
        record.tasks = tasks;
        self.write_record(&record)?;
        info!(plan = %id, "updated task plan");
        Ok(record)
    }

    /// All stored plans, newest first. Unreadable files are skipped.
    pub fn list(&self) -> Result<Vec<PlanSummary>> {
        if !self.fs.is_dir(&self.dir) {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        for path in self.plan_files()? {
            let parsed = self
                .fs
                .read_to_string(&path)
                .map_err(PlanError::from)
                .and_then(|s| serde_json::from_str::<PlanRecord>(&s).map_err(PlanError::from));
            match parsed {
                Ok(record) => summaries.push(PlanSummary {
                    id: record.id,
                    goal: record.goal,
                    created_at: record.created_at,
                    task_count: record.tasks.len(),
                }),
                Err(err) => warn!(path = ?path, error = %err, "skipping unreadable plan file"),
            }
        }

        summaries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(summaries)
    }

    pub fn delete(&self, id: &PlanId) -> Result<()> {
        let path = self.path_for(id)?;
        if !self.fs.is_file(&path) {
            return Err(PlanError::PlanNotFound(id.to_string()));
        }
        self.fs.remove_file(&path)?;
        info!(plan = %id, "deleted task plan");
        Ok(())
    }

    /// Delete every stored plan, returning how many were removed.
    pub fn clear(&self) -> Result<usize> {
        if !self.fs.is_dir(&self.dir) {
            return Ok(0);
        }
        let files = self.plan_files()?;
        for path in &files {
            self.fs.remove_file(path)?;
        }
        info!(removed = files.len(), "cleared plan history");
        Ok(files.len())
    }

    fn plan_files(&self) -> Result<Vec<PathBuf>> {
        let mut files: Vec<PathBuf> = self
            .fs
            .read_dir(&self.dir)?
            .into_iter()
            .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(PLAN_FILE_EXT))
            .filter(|p| self.fs.is_file(p))
            .collect();
        files.sort();
        Ok(files)
    }

    fn path_for(&self, id: &PlanId) -> Result<PathBuf> {
        if !id.is_well_formed() {
            return Err(PlanError::PlanNotFound(id.to_string()));
        }
        Ok(self.dir.join(format!("{id}.{PLAN_FILE_EXT}")))
    }

    fn write_record(&self, record: &PlanRecord) -> Result<()> {
        let path = self.path_for(&record.id)?;
        let json = serde_json::to_string_pretty(record)?;
        self.fs.write(&path, json.as_bytes())?;
        Ok(())
    }
}
