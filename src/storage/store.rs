//! The location store handle.
//!
//! [`LocationStore`] is the single entry point for persisted locations. It
//! owns one [`Storage`] backend behind a mutex, seeds a freshly created
//! collection, and converts rows into [`Location`] snapshots.
//!
//! # Lifecycle
//!
//! ```text
//! open(path, schema_version)
//!   ├─ file missing          → create empty → load seed dataset
//!   ├─ same schema version   → load as is
//!   └─ other schema version  → drop rows   → load seed dataset
//! ```
//!
//! Seeding happens only when the collection is (re)created. A store whose
//! user deleted every location stays empty on the next open.

use crate::domain::error::{Result, SpotfinderError};
use crate::domain::{Location, LocationDraft};
use crate::storage::backend::Storage;
use crate::storage::json::JsonStorage;
use crate::storage::seed::seed_drafts;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Schema version written by this release.
///
/// Opening a file written with another version discards its contents and
/// reloads the seed dataset.
pub const SCHEMA_VERSION: u32 = 5;

/// Thread-safe handle to the persisted `locations` collection.
///
/// All operations lock the backend for their whole duration, so concurrent
/// callers are serialized. Results are owned snapshots.
///
/// # Examples
///
/// ```no_run
/// use spotfinder::domain::LocationDraft;
/// use spotfinder::storage::{LocationStore, SCHEMA_VERSION};
///
/// let store = LocationStore::open("/tmp/spotfinder.json", SCHEMA_VERSION)?;
/// let id = store.create(&LocationDraft::new("Home", "1 Main St", 43.7, -79.4))?;
/// let home = store.get_by_name("home")?.expect("just created");
/// assert_eq!(home.id, id);
/// # Ok::<(), spotfinder::SpotfinderError>(())
/// ```
pub struct LocationStore {
    backend: Mutex<Box<dyn Storage>>,
    path: PathBuf,
}

impl LocationStore {
    /// Opens or creates the JSON-backed store at `path`.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the file cannot be opened, created or
    /// seeded.
    pub fn open(path: impl Into<PathBuf>, schema_version: u32) -> Result<Self> {
        let path = path.into();
        let _span = tracing::info_span!("store_open", path = ?path, schema_version).entered();

        let (mut storage, outcome) = JsonStorage::open(path.clone(), schema_version)?;

        if outcome.needs_seed() {
            let seed = seed_drafts();
            storage.insert_batch(&seed).map_err(|e| {
                SpotfinderError::StorageUnavailable(format!("failed to load seed dataset: {e}"))
            })?;
            tracing::info!(seeded = seed.len(), outcome = ?outcome, "seed dataset loaded");
        }

        tracing::info!(locations = storage.count(), "location store ready");
        Ok(Self::with_backend(Box::new(storage), path))
    }

    /// Wraps an already opened backend. No seeding takes place.
    #[must_use]
    pub fn with_backend(backend: Box<dyn Storage>, path: PathBuf) -> Self {
        Self {
            backend: Mutex::new(backend),
            path,
        }
    }

    /// Path of the backing medium.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<MutexGuard<'_, Box<dyn Storage>>> {
        self.backend
            .lock()
            .map_err(|_| SpotfinderError::StorageUnavailable("store lock poisoned".to_string()))
    }

    /// Inserts a new location and returns its assigned id.
    ///
    /// Neither coordinate ranges nor name uniqueness are checked.
    ///
    /// # Errors
    ///
    /// Returns `WriteFailed` if the insert did not apply.
    pub fn create(&self, draft: &LocationDraft) -> Result<i64> {
        let id = self.lock()?.insert(draft)?;
        tracing::info!(id, name = %draft.name, "location created");
        Ok(id)
    }

    /// Returns the first location whose name equals `name`, ignoring case.
    ///
    /// Names are not unique. When several locations share a name, the one
    /// earliest in enumeration order wins.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the store lock is poisoned.
    pub fn get_by_name(&self, name: &str) -> Result<Option<Location>> {
        Ok(self.lock()?.find_by_name(name)?.map(Location::from))
    }

    /// Returns every location whose name contains `fragment`, ignoring case,
    /// in enumeration order.
    ///
    /// An empty fragment matches every location.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the store lock is poisoned.
    pub fn search_by_name(&self, fragment: &str) -> Result<Vec<Location>> {
        let rows = self.lock()?.search_by_name(fragment)?;
        Ok(rows.into_iter().map(Location::from).collect())
    }

    /// Returns all locations in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the store lock is poisoned.
    pub fn list(&self) -> Result<Vec<Location>> {
        let rows = self.lock()?.all()?;
        Ok(rows.into_iter().map(Location::from).collect())
    }

    /// Replaces every mutable field of the location with `id`.
    ///
    /// Returns `Ok(false)` when no location has that id.
    ///
    /// # Errors
    ///
    /// Returns `WriteFailed` if the update did not apply.
    pub fn update(&self, id: i64, draft: &LocationDraft) -> Result<bool> {
        let updated = self.lock()?.update(id, draft)?;
        if updated {
            tracing::info!(id, name = %draft.name, "location updated");
        }
        Ok(updated)
    }

    /// Removes the location with `id`.
    ///
    /// Returns `Ok(false)` when no location has that id.
    ///
    /// # Errors
    ///
    /// Returns `WriteFailed` if the delete did not apply.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let deleted = self.lock()?.delete(id)?;
        if deleted {
            tracing::info!(id, "location deleted");
        }
        Ok(deleted)
    }

    /// Number of stored locations.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the store lock is poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self.lock()?.count())
    }

    /// Returns `true` when no location is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the store lock is poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl std::fmt::Debug for LocationStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocationStore")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}
