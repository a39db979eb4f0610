//! Event handling and state transition logic.
//!
//! This module implements the handler that turns user input into store
//! operations and view synchronization, returning the UI-side effects as
//! [`Action`]s.
//!
//! # Architecture
//!
//! 1. Events arrive from the embedding UI
//! 2. [`handle_event`] pattern-matches the event type
//! 3. Store operations run synchronously, then the view is refreshed
//! 4. Actions for the input widgets are collected and returned
//!
//! A write that fails is reported as a [`Notice`], never as an `Err`; only an
//! unavailable store propagates out of the handler.
//!
//! # Example
//!
//! ```rust,no_run
//! use spotfinder::app::{handle_event, AppState, Event};
//! use spotfinder::storage::{LocationStore, SCHEMA_VERSION};
//! use spotfinder::sync::RecordingMap;
//!
//! let store = LocationStore::open("/tmp/spotfinder.json", SCHEMA_VERSION)?;
//! let mut state = AppState::new(store, RecordingMap::default())?;
//! let actions = handle_event(&mut state, &Event::SearchTextChanged("tower".to_string()))?;
//! assert!(actions.is_empty());
//! # Ok::<(), spotfinder::SpotfinderError>(())
//! ```

use crate::app::modes::FormMode;
use crate::app::{Action, AppState, Notice};
use crate::domain::error::{Result, SpotfinderError};
use crate::domain::{Location, LocationDraft};
use crate::sync::MapSurface;

/// Raw contents of the details form.
///
/// Coordinates are `None` when the input could not be parsed as a number.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormInput {
    pub name: String,
    pub address: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl FormInput {
    /// Returns a draft when every field is present and non-blank and both
    /// coordinates are finite.
    #[must_use]
    pub fn to_draft(&self) -> Option<LocationDraft> {
        let name = self.name.trim();
        let address = self.address.trim();
        if name.is_empty() || address.is_empty() {
            return None;
        }
        let draft = LocationDraft::new(name, address, self.latitude?, self.longitude?);
        draft.has_finite_coordinates().then_some(draft)
    }
}

/// Events triggered by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The search field changed; runs a live search.
    SearchTextChanged(String),
    /// The search button was pressed with this text.
    SearchSubmitted(String),
    /// A row of the list was picked.
    LocationSelected(Location),
    /// Start adding a location with this name.
    BeginAdd(String),
    /// Start editing the location with this name.
    BeginUpdate(String),
    /// Delete the location with this name.
    Delete(String),
    /// Save the details form.
    Save(FormInput),
    /// Show every stored location on the map.
    ShowAll,
    /// Re-read the list from the store.
    Refresh,
}

/// Processes an event, mutates application state, and returns UI actions.
///
/// # Errors
///
/// Returns `StorageUnavailable` if the store cannot be read. Failed writes are
/// reported through [`Notice`] actions instead.
pub fn handle_event<M: MapSurface>(state: &mut AppState<M>, event: &Event) -> Result<Vec<Action>> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SearchTextChanged(text) => {
            state.search_text.clone_from(text);
            state.view.search_as_you_type(&state.store, text)?;
            Ok(vec![])
        }
        Event::SearchSubmitted(text) => submit_search(state, text.trim()),
        Event::LocationSelected(location) => {
            state.view.show_single(location);
            state.search_text.clone_from(&location.name);
            Ok(vec![Action::FillSearchField(location.name.clone())])
        }
        Event::BeginAdd(name) => {
            if name.trim().is_empty() {
                return Ok(vec![Action::Notify(Notice::EnterName)]);
            }
            state.form = FormMode::Adding;
            Ok(vec![Action::ShowDetails(None)])
        }
        Event::BeginUpdate(name) => {
            let name = name.trim();
            if name.is_empty() {
                return Ok(vec![Action::Notify(Notice::EnterName)]);
            }
            match state.store.get_by_name(name)? {
                Some(location) => {
                    tracing::debug!(id = location.id, "editing location");
                    state.form = FormMode::Updating { id: location.id };
                    Ok(vec![Action::ShowDetails(Some(location))])
                }
                None => Ok(vec![Action::Notify(Notice::NoResultFound)]),
            }
        }
        Event::Delete(name) => delete_by_name(state, name.trim()),
        Event::Save(input) => save(state, input),
        Event::ShowAll => {
            let listing = state.view.locations().to_vec();
            state.view.show_all(&listing);
            Ok(vec![])
        }
        Event::Refresh => {
            state.view.refresh_list(&state.store)?;
            Ok(vec![Action::RenderList])
        }
    }
}

/// Exact name first, then substring matches.
fn submit_search<M: MapSurface>(state: &mut AppState<M>, query: &str) -> Result<Vec<Action>> {
    if query.is_empty() {
        return Ok(vec![Action::Notify(Notice::EnterName)]);
    }

    if let Some(location) = state.store.get_by_name(query)? {
        state.view.show_single(&location);
        return Ok(vec![]);
    }

    let results = state.store.search_by_name(query)?;
    if results.is_empty() {
        state.view.clear_map();
        return Ok(vec![Action::Notify(Notice::NoResultFound)]);
    }

    state.view.show_search_results(&results);
    Ok(vec![])
}

fn delete_by_name<M: MapSurface>(state: &mut AppState<M>, name: &str) -> Result<Vec<Action>> {
    if name.is_empty() {
        return Ok(vec![Action::Notify(Notice::EnterName)]);
    }

    let Some(location) = state.store.get_by_name(name)? else {
        return Ok(vec![Action::Notify(Notice::NoResultFound)]);
    };

    let notice = match write_outcome(state.store.delete(location.id), Notice::DeleteFailed)? {
        Some(true) => Notice::Deleted,
        Some(false) => Notice::NoResultFound,
        None => return Ok(vec![Action::Notify(Notice::DeleteFailed)]),
    };

    state.view.refresh_list(&state.store)?;
    Ok(vec![Action::Notify(notice), Action::RenderList, Action::ClearInputs])
}

fn save<M: MapSurface>(state: &mut AppState<M>, input: &FormInput) -> Result<Vec<Action>> {
    let Some(draft) = input.to_draft() else {
        return Ok(vec![Action::Notify(Notice::FillAllFields)]);
    };

    let notice = match state.form {
        FormMode::Updating { id } => {
            match write_outcome(state.store.update(id, &draft), Notice::UpdateFailed)? {
                Some(true) => Notice::Updated,
                Some(false) => Notice::NoResultFound,
                None => Notice::UpdateFailed,
            }
        }
        FormMode::Hidden | FormMode::Adding => {
            match write_outcome(state.store.create(&draft), Notice::InsertFailed)? {
                Some(_) => Notice::Added,
                None => Notice::InsertFailed,
            }
        }
    };

    state.form = FormMode::Hidden;
    state.view.refresh_list(&state.store)?;

    Ok(vec![
        Action::Notify(notice),
        Action::RenderList,
        Action::ClearInputs,
        Action::HideDetails,
    ])
}

/// Maps a failed write to `Ok(None)` and lets every other error through.
fn write_outcome<T>(result: Result<T>, notice: Notice) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(SpotfinderError::WriteFailed(reason)) => {
            tracing::warn!(reason = %reason, notice = %notice, "write did not apply");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
