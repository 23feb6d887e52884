//! Degraded project list used when no authenticated remote store is available.
//!
//! Summaries are stored as one JSON array under a fixed key. This list never
//! touches columns or tasks and is independent of any loaded board.

use async_trait::async_trait;
use hive_core::{HiveError, HiveResult};
use hive_domain::{Project, ProjectSummary};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{KeyValueStore, ValueUpdate};

pub const PROJECTS_KEY: &str = "projects";

/// String key-value store persisted as a single JSON object file
#[derive(Debug, Clone)]
pub struct LocalKeyValueStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl LocalKeyValueStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_map(&self) -> HiveResult<BTreeMap<String, String>> {
        match AtomicWriter::read_optional(&self.path).await? {
            Some(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| HiveError::Serialization(e.to_string())),
            None => Ok(BTreeMap::new()),
        }
    }

    async fn write_map(&self, map: &BTreeMap<String, String>) -> HiveResult<()> {
        let bytes =
            serde_json::to_vec_pretty(map).map_err(|e| HiveError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&self.path, &bytes).await
    }
}

#[async_trait]
impl KeyValueStore for LocalKeyValueStore {
    async fn get(&self, key: &str) -> HiveResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_map().await?.remove(key))
    }

    async fn set(&self, key: &str, value: String) -> HiveResult<()> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value);
        self.write_map(&map).await
    }

    async fn update(&self, key: &str, f: ValueUpdate) -> HiveResult<()> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        let value = f(map.remove(key))?;
        map.insert(key.to_string(), value);
        self.write_map(&map).await
    }
}

pub struct OfflineProjectList<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> OfflineProjectList<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> HiveResult<Vec<ProjectSummary>> {
        parse_summaries(self.store.get(PROJECTS_KEY).await?)
    }

    /// Appends a new summary with zeroed task counts and a single member
    pub async fn add(
        &self,
        title: &str,
        description: Option<&str>,
        color: &str,
    ) -> HiveResult<ProjectSummary> {
        let title = Project::validate_title(title)?;
        let description = description.map(str::trim).unwrap_or_default().to_string();
        let summary = ProjectSummary::new(title, description, color.to_string());

        let entry = summary.clone();
        self.store
            .update(
                PROJECTS_KEY,
                Box::new(move |current| {
                    let mut projects = parse_summaries(current)?;
                    projects.push(entry);
                    serde_json::to_string(&projects)
                        .map_err(|e| HiveError::Serialization(e.to_string()))
                }),
            )
            .await?;

        tracing::info!(project_id = %summary.id, "Saved offline project '{}'", summary.title);
        Ok(summary)
    }
}

fn parse_summaries(raw: Option<String>) -> HiveResult<Vec<ProjectSummary>> {
    match raw {
        Some(raw) => {
            serde_json::from_str(&raw).map_err(|e| HiveError::Serialization(e.to_string()))
        }
        None => Ok(Vec::new()),
    }
}
