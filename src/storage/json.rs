//! JSON file-based storage backend.
//!
//! This module provides a human-readable storage implementation using JSON
//! serialization. It uses atomic file writes (write-to-temp + rename) so the
//! file is never left half written.
//!
//! Every write is prepared on a copy of the in-memory image and only becomes
//! visible after the copy has reached the disk. A failed write therefore leaves
//! both the file and the image as they were.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(n) scan of the in-memory image
//! - **Write**: O(n) - serializes and writes the entire collection
//! - **Best for**: a few thousand locations, interactive write rates

use crate::domain::error::{Result, SpotfinderError};
use crate::domain::LocationDraft;
use crate::storage::backend::Storage;
use crate::storage::models::LocationRecord;
use crate::storage::search::NameQuery;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// First id handed out by a fresh collection.
const FIRST_ID: i64 = 1;

const fn first_id() -> i64 {
    FIRST_ID
}

/// JSON storage container format.
///
/// This is the top-level structure serialized to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Schema version the document was written with.
    version: u32,

    /// Next id to assign. Only ever grows, so deleted ids are never reused.
    #[serde(default = "first_id")]
    next_id: i64,

    /// Unix timestamp of the last successful save.
    #[serde(default)]
    saved_at: Option<i64>,

    /// The `locations` collection in insertion order.
    #[serde(default)]
    locations: Vec<LocationRecord>,
}

impl StorageData {
    const fn empty(version: u32) -> Self {
        Self {
            version,
            next_id: FIRST_ID,
            saved_at: None,
            locations: Vec::new(),
        }
    }

    fn push(&mut self, draft: &LocationDraft) -> i64 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.locations.push(LocationRecord::new(id, draft));
        id
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.locations.iter().position(|record| record.id == id)
    }
}

/// How [`JsonStorage::open`] found the backing file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// No file existed; the collection starts empty.
    Created,

    /// An existing file with the requested schema version was loaded.
    Opened,

    /// The file was written with another schema version and its contents
    /// were discarded.
    Migrated {
        /// Schema version found on disk.
        from: u32,
    },
}

impl OpenOutcome {
    /// Returns `true` when the collection was (re)created and should be seeded.
    #[must_use]
    pub const fn needs_seed(self) -> bool {
        !matches!(self, Self::Opened)
    }
}

/// JSON file storage backend.
///
/// Stores the `locations` collection in a single JSON document. The whole
/// collection is kept in memory and rewritten on each modification.
///
/// # Thread Safety
///
/// This type is `Send` but not `Sync`.
/// [`LocationStore`](crate::storage::LocationStore) wraps it in a mutex.
///
/// # File Format
///
/// ```json
/// {
///   "version": 5,
///   "next_id": 3,
///   "saved_at": 1760745600,
///   "locations": [
///     {
///       "id": 1,
///       "location_name": "CN Tower",
///       "address": "290 Bremner Blvd, Toronto, ON",
///       "latitude": 43.6426,
///       "longitude": -79.3871
///     }
///   ]
/// }
/// ```
#[derive(Debug)]
pub struct JsonStorage {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory image of the last successfully written document.
    data: StorageData,
}

impl JsonStorage {
    /// Opens or creates a JSON storage backend.
    ///
    /// If the file exists and was written with `schema_version`, its data is
    /// loaded. A file with any other version is treated as stale: its
    /// contents are dropped and the outcome is [`OpenOutcome::Migrated`].
    /// Parent directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if:
    /// - Parent directory creation fails
    /// - The file exists but cannot be read
    /// - The file contains invalid JSON
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use spotfinder::storage::{JsonStorage, OpenOutcome};
    /// use std::path::PathBuf;
    ///
    /// let (storage, outcome) = JsonStorage::open(PathBuf::from("/tmp/spotfinder.json"), 5)?;
    /// if outcome == OpenOutcome::Created {
    ///     println!("fresh collection at {}", storage.path().display());
    /// }
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn open(file_path: PathBuf, schema_version: u32) -> Result<(Self, OpenOutcome)> {
        tracing::debug!(path = ?file_path, schema_version, "opening JSON storage");

        if let Some(parent) = file_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SpotfinderError::StorageUnavailable(format!(
                    "cannot create {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let (data, outcome) = if file_path.exists() {
            let stored = Self::load_from_file(&file_path)?;
            if stored.version == schema_version {
                (stored, OpenOutcome::Opened)
            } else {
                tracing::warn!(
                    from = stored.version,
                    to = schema_version,
                    dropped = stored.locations.len(),
                    "schema version changed, dropping stored locations"
                );
                (
                    StorageData::empty(schema_version),
                    OpenOutcome::Migrated {
                        from: stored.version,
                    },
                )
            }
        } else {
            tracing::debug!("initializing new empty storage");
            (StorageData::empty(schema_version), OpenOutcome::Created)
        };

        tracing::debug!(
            location_count = data.locations.len(),
            next_id = data.next_id,
            outcome = ?outcome,
            "storage opened"
        );

        Ok((Self { file_path, data }, outcome))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Schema version of the open document.
    #[must_use]
    pub const fn schema_version(&self) -> u32 {
        self.data.version
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SpotfinderError::StorageUnavailable(format!("cannot read {}: {e}", path.display()))
        })?;
        let data: StorageData = serde_json::from_str(&contents).map_err(|e| {
            SpotfinderError::StorageUnavailable(format!("failed to parse JSON: {e}"))
        })?;

        tracing::debug!(
            version = data.version,
            locations = data.locations.len(),
            "loaded storage data"
        );

        Ok(data)
    }

    /// Writes `next` to disk and, only if that succeeds, makes it the live image.
    ///
    /// # Errors
    ///
    /// Returns `WriteFailed` if serialization, the temporary write or the
    /// rename fails.
    fn commit(&mut self, mut next: StorageData) -> Result<()> {
        next.saved_at = Some(chrono::Utc::now().timestamp());

        let json = serde_json::to_string_pretty(&next)
            .map_err(|e| SpotfinderError::WriteFailed(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");

        tracing::trace!(tmp_path = ?tmp_path, "writing to temporary file");
        std::fs::write(&tmp_path, json).map_err(|e| {
            SpotfinderError::WriteFailed(format!("cannot write {}: {e}", tmp_path.display()))
        })?;

        tracing::trace!("renaming temporary file to final location");
        if let Err(e) = std::fs::rename(&tmp_path, &self.file_path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(SpotfinderError::WriteFailed(format!(
                "cannot replace {}: {e}",
                self.file_path.display()
            )));
        }

        self.data = next;
        tracing::debug!(location_count = self.data.locations.len(), "storage saved");
        Ok(())
    }
}

/// Rejects drafts whose coordinates could not be read back from the file.
fn check_coordinates(draft: &LocationDraft) -> Result<()> {
    if draft.has_finite_coordinates() {
        return Ok(());
    }
    Err(SpotfinderError::WriteFailed(format!(
        "non-finite coordinates for {:?}: ({}, {})",
        draft.name, draft.latitude, draft.longitude
    )))
}

impl Storage for JsonStorage {
    fn insert(&mut self, draft: &LocationDraft) -> Result<i64> {
        let _span = tracing::debug_span!("json_insert", name = %draft.name).entered();
        check_coordinates(draft)?;

        let mut next = self.data.clone();
        let id = next.push(draft);
        self.commit(next)?;

        tracing::debug!(id, "location inserted");
        Ok(id)
    }

    fn insert_batch(&mut self, drafts: &[LocationDraft]) -> Result<Vec<i64>> {
        let _span = tracing::debug_span!("json_insert_batch", count = drafts.len()).entered();
        drafts.iter().try_for_each(check_coordinates)?;

        let mut next = self.data.clone();
        let ids: Vec<i64> = drafts.iter().map(|draft| next.push(draft)).collect();
        self.commit(next)?;

        tracing::debug!(inserted = ids.len(), "batch inserted");
        Ok(ids)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<LocationRecord>> {
        let _span = tracing::debug_span!("json_find_by_name", name = %name).entered();

        let query = NameQuery::new(name);
        let found = self
            .data
            .locations
            .iter()
            .find(|record| query.matches_exactly(&record.location_name))
            .cloned();

        tracing::debug!(found = found.is_some(), "name lookup complete");
        Ok(found)
    }

    fn search_by_name(&self, fragment: &str) -> Result<Vec<LocationRecord>> {
        let _span = tracing::debug_span!("json_search_by_name", fragment = %fragment).entered();

        let query = NameQuery::new(fragment);
        let matches: Vec<LocationRecord> = self
            .data
            .locations
            .iter()
            .filter(|record| query.is_contained_in(&record.location_name))
            .cloned()
            .collect();

        tracing::debug!(count = matches.len(), "search complete");
        Ok(matches)
    }

    fn all(&self) -> Result<Vec<LocationRecord>> {
        Ok(self.data.locations.clone())
    }

    fn update(&mut self, id: i64, draft: &LocationDraft) -> Result<bool> {
        let _span = tracing::debug_span!("json_update", id, name = %draft.name).entered();
        check_coordinates(draft)?;

        let Some(index) = self.data.position(id) else {
            tracing::debug!("no location with this id");
            return Ok(false);
        };

        let mut next = self.data.clone();
        next.locations[index].apply(draft);
        self.commit(next)?;

        tracing::debug!("location updated");
        Ok(true)
    }

    fn delete(&mut self, id: i64) -> Result<bool> {
        let _span = tracing::debug_span!("json_delete", id).entered();

        let Some(index) = self.data.position(id) else {
            tracing::debug!("no location with this id");
            return Ok(false);
        };

        let mut next = self.data.clone();
        next.locations.remove(index);
        self.commit(next)?;

        tracing::debug!("location deleted");
        Ok(true)
    }

    fn count(&self) -> usize {
        self.data.locations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> LocationDraft {
        LocationDraft::new(name, format!("{name} address"), 43.0, -79.0)
    }

    fn open(path: &Path, version: u32) -> (JsonStorage, OpenOutcome) {
        JsonStorage::open(path.to_path_buf(), version).unwrap()
    }

    #[test]
    fn fresh_file_is_created_on_first_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("spotfinder.json");

        let (mut storage, outcome) = open(&path, 5);
        assert_eq!(outcome, OpenOutcome::Created);
        assert!(outcome.needs_seed());
        assert_eq!(storage.count(), 0);

        storage.insert(&draft("A")).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn data_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spotfinder.json");

        {
            let (mut storage, _) = open(&path, 5);
            storage.insert_batch(&[draft("A"), draft("B")]).unwrap();
        }

        let (storage, outcome) = open(&path, 5);
        assert_eq!(outcome, OpenOutcome::Opened);
        assert!(!outcome.needs_seed());
        let names: Vec<_> = storage.all().unwrap().into_iter().map(|r| r.location_name).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spotfinder.json");

        let (mut storage, _) = open(&path, 5);
        let a = storage.insert(&draft("A")).unwrap();
        let b = storage.insert(&draft("B")).unwrap();
        assert!(storage.delete(b).unwrap());
        drop(storage);

        let (mut storage, _) = open(&path, 5);
        let c = storage.insert(&draft("C")).unwrap();
        assert!(c > b);
        assert_ne!(c, a);
    }

    #[test]
    fn version_change_drops_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spotfinder.json");

        {
            let (mut storage, _) = open(&path, 4);
            storage.insert(&draft("Old")).unwrap();
        }

        let (storage, outcome) = open(&path, 5);
        assert_eq!(outcome, OpenOutcome::Migrated { from: 4 });
        assert_eq!(storage.schema_version(), 5);
        assert_eq!(storage.count(), 0);
    }

    #[test]
    fn corrupt_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spotfinder.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = JsonStorage::open(path, 5).unwrap_err();
        assert!(err.is_storage_unavailable());
    }

    #[test]
    fn failed_write_changes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spotfinder.json");
        let (mut storage, _) = open(&path, 5);
        let id = storage.insert(&draft("A")).unwrap();

        // A directory where the temporary file should go makes every write fail.
        std::fs::create_dir(path.with_extension("tmp")).unwrap();

        assert!(storage.insert(&draft("B")).unwrap_err().is_write_failed());
        assert!(storage.update(id, &draft("A2")).unwrap_err().is_write_failed());
        assert!(storage.delete(id).unwrap_err().is_write_failed());

        let rows = storage.all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].location_name, "A");
    }

    #[test]
    fn non_finite_coordinates_are_refused_and_file_stays_readable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spotfinder.json");

        {
            let (mut storage, _) = open(&path, 5);
            let id = storage.insert(&draft("A")).unwrap();

            let nan = LocationDraft::new("Weird", "x", f64::NAN, 1.0);
            let inf = LocationDraft::new("Far", "x", 1.0, f64::INFINITY);
            assert!(storage.insert(&nan).unwrap_err().is_write_failed());
            assert!(storage.insert_batch(&[draft("B"), inf.clone()]).unwrap_err().is_write_failed());
            assert!(storage.update(id, &inf).unwrap_err().is_write_failed());
            assert_eq!(storage.count(), 1);
        }

        let (storage, outcome) = open(&path, 5);
        assert_eq!(outcome, OpenOutcome::Opened);
        let rows = storage.all().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].location_name, "A");
        assert_eq!(rows[0].latitude, 43.0);
    }

    #[test]
    fn missing_ids_are_not_errors() {
        let dir = tempfile::tempdir().unwrap();
        let (mut storage, _) = open(&dir.path().join("spotfinder.json"), 5);

        assert!(!storage.update(42, &draft("X")).unwrap());
        assert!(!storage.delete(42).unwrap());
    }

    #[test]
    fn document_uses_the_locations_collection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spotfinder.json");
        let (mut storage, _) = open(&path, 5);
        storage.insert(&draft("CN Tower")).unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["version"], 5);
        assert_eq!(doc["next_id"], 2);
        assert!(doc["saved_at"].is_i64());
        assert_eq!(doc["locations"][0]["location_name"], "CN Tower");
    }
}
