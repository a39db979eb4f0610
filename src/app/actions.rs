//! Actions representing side effects for the embedding UI.
//!
//! The event handler updates the store and the [`ViewSync`](crate::sync::ViewSync)
//! itself; everything that belongs to the input widgets (toasts, clearing the
//! form, showing the details panel) is returned as an [`Action`] for the UI to
//! carry out.
//!
//! # Example
//!
//! ```rust
//! use spotfinder::app::{Action, Notice};
//!
//! let actions = vec![Action::Notify(Notice::Added), Action::ClearInputs, Action::HideDetails];
//! assert_eq!(Notice::Added.message(), "Location added");
//! ```

use crate::domain::Location;

/// Commands for the input/list UI.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Shows a short user-facing message.
    Notify(Notice),

    /// Opens the details panel, prefilled from the location when editing.
    ShowDetails(Option<Location>),

    /// Closes the details panel.
    HideDetails,

    /// Empties the name, address and coordinate inputs.
    ClearInputs,

    /// Puts a name into the search field, e.g. after a list selection.
    FillSearchField(String),

    /// The cached list changed and should be redrawn.
    RenderList,
}

/// User-facing outcome messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    EnterName,
    FillAllFields,
    NoResultFound,
    Added,
    Updated,
    Deleted,
    InsertFailed,
    UpdateFailed,
    DeleteFailed,
}

impl Notice {
    /// Text shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::EnterName => "Please enter a location name",
            Self::FillAllFields => "Please fill all fields",
            Self::NoResultFound => "No result found",
            Self::Added => "Location added",
            Self::Updated => "Location updated",
            Self::Deleted => "Location deleted",
            Self::InsertFailed => "Error adding location",
            Self::UpdateFailed => "Error updating location",
            Self::DeleteFailed => "Error deleting location",
        }
    }

    /// Returns `true` for messages reporting a failed write.
    #[must_use]
    pub const fn is_failure(self) -> bool {
        matches!(self, Self::InsertFailed | Self::UpdateFailed | Self::DeleteFailed)
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
