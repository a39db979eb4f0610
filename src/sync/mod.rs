//! View synchronization between the store and its presentations.
//!
//! After any store mutation or search, the caller hands the result to
//! [`ViewSync`], which refreshes the cached list and re-issues map markers.
//!
//! ```text
//! caller ─▶ LocationStore ─▶ result ─▶ ViewSync ─┬─▶ cached list
//!                                                └─▶ MapSurface (markers, camera)
//! ```
//!
//! # Modules
//!
//! - [`map`]: The map collaborator trait, markers and camera framing
//! - [`view`]: [`ViewSync`] and the live-search session state
//! - [`testing`]: A recording map double, public for embedders' tests

pub mod map;
pub mod testing;
pub mod view;

pub use map::{CameraTarget, MapSurface, Marker, BOUNDS_PADDING_PX, SINGLE_POINT_ZOOM};
pub use testing::{MapCommand, RecordingMap};
pub use view::{SearchSession, ViewSync};
