//! Terminal presentation of the list view and the map.
//!
//! The real list and map widgets are outside this crate; this module gives
//! the command-line front-end a text rendition of both.
//!
//! ```text
//! ViewSync::locations → ListViewModel → render_list → stdout
//! ViewSync markers    → TerminalMap (MapSurface)    → stdout
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Display-ready list rows
//! - [`renderer`]: Table rendering to any writer
//! - [`map`]: Text implementation of the map collaborator

pub mod map;
pub mod renderer;
pub mod viewmodel;

pub use map::TerminalMap;
pub use renderer::render_list;
pub use viewmodel::{EmptyState, HeaderInfo, ListRow, ListViewModel};
