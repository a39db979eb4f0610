//! Form mode state for the details panel.
//!
//! The details panel (address and coordinate inputs) is hidden until the user
//! starts adding or editing a location. The mode decides what `Save` does.
//!
//! # State Machine
//!
//! ```text
//! Hidden ──BeginAdd──▶ Adding ─────────Save──▶ Hidden
//!    │
//!    └──BeginUpdate──▶ Updating { id } ──Save──▶ Hidden
//! ```

/// What the details panel is currently collecting input for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Panel not shown. A save in this mode creates a new location.
    #[default]
    Hidden,

    /// Collecting fields for a new location.
    Adding,

    /// Editing the location with this id.
    ///
    /// The id is captured when editing starts, so renaming the location in
    /// the form still updates the same record.
    Updating {
        /// Id of the location being edited.
        id: i64,
    },
}

impl FormMode {
    /// Returns `true` when the details panel is visible.
    #[must_use]
    pub const fn is_open(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
