//! Application layer coordinating the store, view sync, and UI actions.
//!
//! This module sits between the embedding UI (here, `main.rs`) and the
//! storage/sync layers. It follows a unidirectional data flow:
//!
//! ```text
//! User Input → Events → Event Handler → Store + ViewSync → Actions → UI
//! ```
//!
//! # Modules
//!
//! - [`actions`]: UI-side effect commands and user-facing notices
//! - [`handler`]: Event processing logic
//! - [`modes`]: Details panel mode
//! - [`state`]: Central application state container

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::{Action, Notice};
pub use handler::{handle_event, Event, FormInput};
pub use modes::FormMode;
pub use state::AppState;
