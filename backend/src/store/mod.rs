//! Flat-file record store: one pretty-printed JSON array per collection.
//!
//! Persistence is whole-file replace. A missing collection file is
//! initialized to an empty list on first read; writes go through a
//! temporary file and a rename so a crash never leaves a torn file.
//! Server-side read-modify-write cycles hold a per-collection mutex;
//! client-driven whole-collection replacement stays last-writer-wins.

mod integrity;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::{AppError, AppResult};
use shared::models::{ReportDocument, SpeciesGroup};

/// The four record collections. The report (bilan) and the species
/// taxonomy live in their own files and have dedicated accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Seeds,
    Locations,
    Cultures,
    Harvests,
}

impl Collection {
    /// Parse an API category name.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "seeds" => Some(Collection::Seeds),
            "locations" => Some(Collection::Locations),
            "cultures" => Some(Collection::Cultures),
            "harvests" => Some(Collection::Harvests),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Seeds => "seeds",
            Collection::Locations => "locations",
            Collection::Cultures => "cultures",
            Collection::Harvests => "harvests",
        }
    }

    fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }

    fn index(&self) -> usize {
        match self {
            Collection::Seeds => 0,
            Collection::Locations => 1,
            Collection::Cultures => 2,
            Collection::Harvests => 3,
        }
    }
}

/// Flat-file store over a data directory.
pub struct JsonStore {
    data_dir: PathBuf,
    collection_locks: [Mutex<()>; 4],
    report_lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            collection_locks: Default::default(),
            report_lock: Mutex::new(()),
        }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }

    /// Load a full collection. A missing file is initialized to `[]`;
    /// any other read or parse error propagates.
    pub async fn load<T: DeserializeOwned>(&self, collection: Collection) -> AppResult<Vec<T>> {
        self.read_array_file(
            &self.path(&collection.file_name()),
            Some(&self.collection_locks[collection.index()]),
        )
        .await
    }

    /// Load a collection without interpreting the records, for
    /// operations that only need the `id` field.
    pub async fn load_raw(&self, collection: Collection) -> AppResult<Vec<Value>> {
        self.read_array_file(
            &self.path(&collection.file_name()),
            Some(&self.collection_locks[collection.index()]),
        )
        .await
    }

    /// Replace a full collection.
    pub async fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> AppResult<()> {
        let _guard = self.collection_locks[collection.index()].lock().await;
        write_json(&self.path(&collection.file_name()), records).await
    }

    /// Delete one record by id, subject to the referential-integrity
    /// guard. The id must exist.
    pub async fn delete(&self, collection: Collection, id: &str, force: bool) -> AppResult<()> {
        integrity::check_delete(self, collection, id, force).await?;

        let _guard = self.collection_locks[collection.index()].lock().await;
        // The guard is already held; locking again would deadlock.
        let mut records = self
            .read_array_file::<Value>(&self.path(&collection.file_name()), None)
            .await?;
        let before = records.len();
        records.retain(|record| record.get("id").and_then(Value::as_str) != Some(id));
        if records.len() == before {
            return Err(AppError::NotFound("record".to_string()));
        }
        write_json(&self.path(&collection.file_name()), &records).await
    }

    /// Load the stored bilan. A missing file, or a legacy file holding
    /// an empty array, reads as an empty report.
    pub async fn load_report(&self) -> AppResult<ReportDocument> {
        let path = self.path("bilan.json");
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Initialize under the lock, re-checking in case a
                // generation landed in the meantime.
                let _guard = self.report_lock.lock().await;
                match tokio::fs::read(&path).await {
                    Ok(bytes) => bytes,
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                        write_json(&path, &ReportDocument::default()).await?;
                        return Ok(ReportDocument::default());
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            Err(e) => return Err(e.into()),
        };
        let value: Value = serde_json::from_slice(&bytes)?;
        if value.is_array() {
            return Ok(ReportDocument::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Replace the stored bilan.
    pub async fn save_report(&self, report: &ReportDocument) -> AppResult<()> {
        let _guard = self.report_lock.lock().await;
        write_json(&self.path("bilan.json"), report).await
    }

    /// Static taxonomy list served by the species endpoint. Read-only
    /// apart from initialization, which is idempotent, so no lock.
    pub async fn load_species(&self) -> AppResult<Vec<SpeciesGroup>> {
        self.read_array_file(&self.path("species.json"), None).await
    }

    /// Read a JSON array file, initializing a missing file to `[]`.
    /// The initialization write takes `lock` (when given) so it cannot
    /// interleave with a concurrent save of the same collection, and
    /// re-checks the file once the lock is held.
    async fn read_array_file<T: DeserializeOwned>(
        &self,
        path: &Path,
        lock: Option<&Mutex<()>>,
    ) -> AppResult<Vec<T>> {
        match tokio::fs::read(path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let _guard = match lock {
                    Some(lock) => Some(lock.lock().await),
                    None => None,
                };
                match tokio::fs::read(path).await {
                    Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                        write_json::<[Value]>(path, &[]).await?;
                        Ok(Vec::new())
                    }
                    Err(e) => Err(e.into()),
                }
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Serialize pretty-printed and replace the file via temp + rename.
/// Temp names carry a process-wide sequence number so concurrent
/// writers never share one.
async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> AppResult<()> {
    static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }
    let bytes = serde_json::to_vec_pretty(value)?;
    let tmp = path.with_extension(format!("tmp{}", TMP_SEQ.fetch_add(1, Ordering::Relaxed)));
    tokio::fs::write(&tmp, bytes).await?;
    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}
