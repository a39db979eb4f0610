//! View model types representing the renderable list.
//!
//! View models are computed from the cached list held by
//! [`ViewSync`](crate::sync::ViewSync) and consumed by the renderer. They
//! contain no logic, only display-ready strings.
//!
//! # Example
//!
//! ```rust
//! use spotfinder::domain::{Location, LocationDraft};
//! use spotfinder::ui::ListViewModel;
//!
//! let locations = vec![Location::from_draft(1, LocationDraft::new("A", "1 Main St", 43.0, -79.0))];
//! let vm = ListViewModel::from_locations(&locations);
//! assert_eq!(vm.rows[0].coordinates, "(43.0, -79.0)");
//! assert_eq!(vm.header.title, " Locations (1) ");
//! ```

use crate::domain::Location;

/// Width of the NAME column, in characters.
pub const NAME_COLUMN_WIDTH: usize = 36;

/// Width of the ADDRESS column, in characters.
pub const ADDRESS_COLUMN_WIDTH: usize = 44;

/// Complete list view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListViewModel {
    pub header: HeaderInfo,
    /// One row per location, numbered from 1.
    pub rows: Vec<ListRow>,
    /// Shown instead of the table when there are no rows.
    pub empty_state: Option<EmptyState>,
}

/// One rendered list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    /// 1-based position, used by the `select` command.
    pub index: usize,
    pub name: String,
    pub address: String,
    pub coordinates: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}

impl ListViewModel {
    /// Builds the view model for `locations`, truncating long text to fit
    /// the table columns.
    #[must_use]
    pub fn from_locations(locations: &[Location]) -> Self {
        let rows: Vec<ListRow> = locations
            .iter()
            .enumerate()
            .map(|(i, location)| ListRow {
                index: i + 1,
                name: truncate(&location.name, NAME_COLUMN_WIDTH - 1),
                address: truncate(&location.address, ADDRESS_COLUMN_WIDTH - 1),
                coordinates: location.coordinates_label(),
            })
            .collect();

        let empty_state = rows.is_empty().then(|| EmptyState {
            message: "No locations stored. Use `add <name>` to create one.".to_string(),
        });

        Self {
            header: HeaderInfo {
                title: format!(" Locations ({}) ", rows.len()),
            },
            rows,
            empty_state,
        }
    }
}

/// Shortens `text` to at most `max` characters, marking the cut with `...`.
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
