//! Domain layer for Spotfinder.
//!
//! Core types independent of the storage medium and of any presentation
//! surface.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`location`]: Location record and the id-less draft used for writes
//!
//! # Examples
//!
//! ```
//! use spotfinder::domain::{Location, LocationDraft};
//!
//! let draft = LocationDraft::new("Casa Loma", "1 Austin Terrace, Toronto, ON", 43.6780, -79.4094);
//! let stored = Location::from_draft(12, draft);
//! assert_eq!(stored.name, "Casa Loma");
//! ```

pub mod error;
pub mod location;

pub use error::{Result, SpotfinderError};
pub use location::{Location, LocationDraft};
