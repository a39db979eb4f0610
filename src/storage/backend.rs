//! Storage backend abstraction.
//!
//! This module defines the [`Storage`] trait that abstracts over persistence
//! backends for the `locations` collection. [`crate::storage::LocationStore`]
//! owns one backend behind a lock and never talks to the medium directly.
//!
//! # Design Philosophy
//!
//! The trait is minimal and maps one method to one store operation, plus a
//! batch insert for seeding. It is not a generic ORM.

use crate::domain::error::Result;
use crate::domain::LocationDraft;
use crate::storage::models::LocationRecord;

/// Abstraction over persistent storage backends.
///
/// Every query returns owned rows in the backend's enumeration order, which
/// for [`JsonStorage`](crate::storage::JsonStorage) is insertion order.
///
/// A method that writes must either persist its change and then expose it to
/// subsequent reads, or fail with
/// [`SpotfinderError::WriteFailed`](crate::SpotfinderError::WriteFailed) and
/// leave every read unaffected.
///
/// # Examples
///
/// ```no_run
/// use spotfinder::domain::LocationDraft;
/// use spotfinder::storage::{JsonStorage, Storage};
/// use std::path::PathBuf;
///
/// let (mut storage, _outcome) = JsonStorage::open(PathBuf::from("/tmp/spotfinder.json"), 5)?;
/// let id = storage.insert(&LocationDraft::new("Casa Loma", "1 Austin Terrace", 43.678, -79.4094))?;
/// assert!(storage.find_by_name("casa loma")?.is_some_and(|row| row.id == id));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Storage: Send {
    /// Inserts a new row and returns its freshly assigned id.
    ///
    /// # Errors
    ///
    /// Returns `WriteFailed` if the row could not be persisted.
    fn insert(&mut self, draft: &LocationDraft) -> Result<i64>;

    /// Inserts several rows with a single write, returning their ids in order.
    ///
    /// # Errors
    ///
    /// Returns `WriteFailed` if the batch could not be persisted. No row of
    /// the batch is visible afterwards.
    fn insert_batch(&mut self, drafts: &[LocationDraft]) -> Result<Vec<i64>>;

    /// Returns the first row whose name equals `name`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn find_by_name(&self, name: &str) -> Result<Option<LocationRecord>>;

    /// Returns every row whose name contains `fragment`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn search_by_name(&self, fragment: &str) -> Result<Vec<LocationRecord>>;

    /// Returns all rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the read operation fails.
    fn all(&self) -> Result<Vec<LocationRecord>>;

    /// Replaces the mutable columns of the row with `id`.
    ///
    /// Returns `Ok(false)` when no such row exists.
    ///
    /// # Errors
    ///
    /// Returns `WriteFailed` if the change could not be persisted.
    fn update(&mut self, id: i64, draft: &LocationDraft) -> Result<bool>;

    /// Removes the row with `id`.
    ///
    /// Returns `Ok(false)` when no such row exists.
    ///
    /// # Errors
    ///
    /// Returns `WriteFailed` if the change could not be persisted.
    fn delete(&mut self, id: i64) -> Result<bool>;

    /// Number of stored rows.
    fn count(&self) -> usize;
}
