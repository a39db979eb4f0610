//! Error types for Spotfinder.
//!
//! This module defines the centralized error type [`SpotfinderError`] and a type alias
//! [`Result`] used throughout the crate. All errors are implemented using the
//! `thiserror` crate for automatic `Error` trait implementation.
//!
//! A lookup that finds nothing is not an error: store queries report it as
//! `Ok(None)`, an empty `Vec`, or `Ok(false)`.

use thiserror::Error;

/// The main error type for Spotfinder operations.
///
/// # Examples
///
/// ```
/// use spotfinder::SpotfinderError;
///
/// fn open_medium() -> Result<(), SpotfinderError> {
///     Err(SpotfinderError::StorageUnavailable("permission denied".to_string()))
/// }
///
/// assert!(open_medium().unwrap_err().is_storage_unavailable());
/// ```
#[derive(Debug, Error)]
pub enum SpotfinderError {
    /// The backing storage medium could not be opened or created.
    ///
    /// Fatal to store initialization. Also reported when the store lock was
    /// poisoned by a panicking caller.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// An insert, update or delete did not apply.
    ///
    /// The in-memory image is left exactly as it was before the call, so the
    /// caller may simply re-issue the same operation.
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SpotfinderError {
    /// Returns `true` for [`SpotfinderError::StorageUnavailable`].
    #[must_use]
    pub const fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }

    /// Returns `true` for [`SpotfinderError::WriteFailed`].
    #[must_use]
    pub const fn is_write_failed(&self) -> bool {
        matches!(self, Self::WriteFailed(_))
    }
}

/// A specialized `Result` type for Spotfinder operations.
pub type Result<T> = std::result::Result<T, SpotfinderError>;
