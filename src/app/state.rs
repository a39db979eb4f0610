//! Application state container.
//!
//! [`AppState`] bundles the location store, the view synchronizer and the
//! transient input state (search text, details panel mode). It is the single
//! value the event handler mutates.
//!
//! # Example
//!
//! ```rust,no_run
//! use spotfinder::app::AppState;
//! use spotfinder::storage::{LocationStore, SCHEMA_VERSION};
//! use spotfinder::sync::RecordingMap;
//!
//! let store = LocationStore::open("/tmp/spotfinder.json", SCHEMA_VERSION)?;
//! let state = AppState::new(store, RecordingMap::default())?;
//! assert!(!state.view.locations().is_empty());
//! # Ok::<(), spotfinder::SpotfinderError>(())
//! ```

use super::modes::FormMode;
use crate::domain::error::Result;
use crate::domain::Location;
use crate::storage::LocationStore;
use crate::sync::{MapSurface, ViewSync};

/// Central application state.
#[derive(Debug)]
pub struct AppState<M> {
    /// Authoritative location storage.
    pub store: LocationStore,

    /// Cached list and map markers mirroring the store.
    pub view: ViewSync<M>,

    /// Current details panel mode.
    pub form: FormMode,

    /// Last text seen in the search field, untrimmed.
    pub search_text: String,
}

impl<M: MapSurface> AppState<M> {
    /// Creates the state and loads the initial list from the store.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the initial listing cannot be read.
    pub fn new(store: LocationStore, map: M) -> Result<Self> {
        let mut view = ViewSync::new(map);
        view.refresh_list(&store)?;

        Ok(Self {
            store,
            view,
            form: FormMode::Hidden,
            search_text: String::new(),
        })
    }

    /// Returns the cached location at `index` of the list, if any.
    #[must_use]
    pub fn list_item(&self, index: usize) -> Option<&Location> {
        self.view.locations().get(index)
    }
}
