//! List and map reconciliation.
//!
//! [`ViewSync`] owns the two presentation artifacts that mirror the store: a
//! cached list of every location and the set of markers currently on the map.
//! Both are replaced wholesale on every call, never patched, so a refresh can
//! not leave them half updated.

use crate::domain::error::Result;
use crate::domain::Location;
use crate::storage::LocationStore;
use crate::sync::map::{CameraTarget, MapSurface, Marker};

/// State of the live search driven by [`ViewSync::search_as_you_type`].
///
/// ```text
/// Idle ──type──▶ Searching ──▶ ResultsShown(n) ──clear──▶ Idle
///                    │
///                    └───────▶ NoResults ──────clear──▶ Idle
/// ```
///
/// Each keystroke re-enters `Searching` and supersedes the previous markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchSession {
    /// Search field empty, map cleared.
    #[default]
    Idle,
    /// A query is being resolved.
    Searching,
    /// At least one match; markers placed and camera framed.
    ResultsShown(usize),
    /// No match; markers cleared and camera left where it was.
    NoResults,
}

/// Keeps a cached location list and a map's markers consistent with the store.
///
/// # Example
///
/// ```no_run
/// use spotfinder::storage::{LocationStore, SCHEMA_VERSION};
/// use spotfinder::sync::ViewSync;
/// use spotfinder::ui::TerminalMap;
///
/// let store = LocationStore::open("/tmp/spotfinder.json", SCHEMA_VERSION)?;
/// let mut view = ViewSync::new(TerminalMap::stdout());
/// view.refresh_list(&store)?;
/// view.search_as_you_type(&store, "park")?;
/// # Ok::<(), spotfinder::SpotfinderError>(())
/// ```
#[derive(Debug)]
pub struct ViewSync<M> {
    map: M,
    locations: Vec<Location>,
    markers: Vec<Marker>,
    camera: Option<CameraTarget>,
    session: SearchSession,
}

impl<M: MapSurface> ViewSync<M> {
    #[must_use]
    pub const fn new(map: M) -> Self {
        Self {
            map,
            locations: Vec::new(),
            markers: Vec::new(),
            camera: None,
            session: SearchSession::Idle,
        }
    }

    /// The cached list, in store order as of the last refresh.
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Markers currently on the map.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Last camera target issued, if any.
    #[must_use]
    pub const fn camera(&self) -> Option<&CameraTarget> {
        self.camera.as_ref()
    }

    #[must_use]
    pub const fn session(&self) -> SearchSession {
        self.session
    }

    #[must_use]
    pub const fn map(&self) -> &M {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    /// Re-reads the store and replaces the cached list.
    ///
    /// Called after every create, update and delete. On error the previous
    /// list is kept.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the listing could not be read.
    pub fn refresh_list(&mut self, store: &LocationStore) -> Result<usize> {
        let locations = store.list()?;
        tracing::debug!(count = locations.len(), "list refreshed");
        self.locations = locations;
        Ok(self.locations.len())
    }

    /// Shows exactly one marker for `location` and centers the camera on it.
    ///
    /// Used after a successful exact-name search or a list selection.
    pub fn show_single(&mut self, location: &Location) {
        tracing::debug!(id = location.id, name = %location.name, "showing single location");

        self.clear_map();
        self.place(location);
        self.focus(CameraTarget::point(location.latitude, location.longitude));
    }

    /// Replaces the markers with one per result and frames them all.
    ///
    /// An empty result set is a no-op: markers and camera stay as they were,
    /// and nothing is reported, so typing into the search field is never
    /// interrupted.
    pub fn show_search_results(&mut self, results: &[Location]) {
        if results.is_empty() {
            tracing::debug!("no results, leaving map untouched");
            return;
        }
        self.show_many(results);
    }

    /// Places a marker for every location of the full listing and frames them.
    ///
    /// Same placement as [`show_search_results`](Self::show_search_results),
    /// triggered explicitly by the user. Old markers are always removed, so an
    /// empty listing leaves an empty map; the camera only moves when there is
    /// something to frame.
    pub fn show_all(&mut self, locations: &[Location]) {
        self.show_many(locations);
    }

    /// Removes every marker. The camera does not move.
    pub fn clear_map(&mut self) {
        self.map.clear_markers();
        self.markers.clear();
    }

    /// Runs one live-search keystroke against the store.
    ///
    /// Blank text clears the map and returns to [`SearchSession::Idle`].
    /// Otherwise the trimmed text is searched: matches are shown and framed,
    /// and zero matches clear the markers without moving the camera.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the search could not be read. The map and
    /// the session are left as they were.
    pub fn search_as_you_type(&mut self, store: &LocationStore, text: &str) -> Result<SearchSession> {
        let query = text.trim();
        if query.is_empty() {
            self.clear_map();
            self.session = SearchSession::Idle;
            return Ok(self.session);
        }

        let previous = self.session;
        self.session = SearchSession::Searching;
        let results = match store.search_by_name(query) {
            Ok(results) => results,
            Err(e) => {
                self.session = previous;
                return Err(e);
            }
        };

        self.session = if results.is_empty() {
            self.clear_map();
            SearchSession::NoResults
        } else {
            self.show_search_results(&results);
            SearchSession::ResultsShown(results.len())
        };

        tracing::debug!(query = %query, session = ?self.session, "live search");
        Ok(self.session)
    }

    fn show_many(&mut self, locations: &[Location]) {
        self.clear_map();
        for location in locations {
            self.place(location);
        }
        if let Some(target) = CameraTarget::framing(locations.iter().map(Location::coordinates)) {
            self.focus(target);
        }
        tracing::debug!(markers = self.markers.len(), "markers placed");
    }

    fn place(&mut self, location: &Location) {
        let marker = Marker::for_location(location);
        self.map.add_marker(&marker);
        self.markers.push(marker);
    }

    fn focus(&mut self, target: CameraTarget) {
        self.map.focus_camera(&target);
        self.camera = Some(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LocationDraft, SpotfinderError};
    use crate::storage::{LocationRecord, Storage};
    use crate::sync::testing::{MapCommand, RecordingMap};

    fn location(id: i64, name: &str, lat: f64, lng: f64) -> Location {
        Location::from_draft(id, LocationDraft::new(name, format!("{id} Main St"), lat, lng))
    }

    fn store_with(dir: &tempfile::TempDir, names: &[&str]) -> LocationStore {
        let store = LocationStore::open(dir.path().join("spotfinder.json"), 5).unwrap();
        for existing in store.list().unwrap() {
            store.delete(existing.id).unwrap();
        }
        for (i, name) in names.iter().enumerate() {
            let offset = f64::from(u32::try_from(i).unwrap()) / 10.0;
            store
                .create(&LocationDraft::new(*name, "", 43.0 + offset, -79.0 - offset))
                .unwrap();
        }
        store
    }

    #[test]
    fn show_single_replaces_markers_and_zooms() {
        let mut view = ViewSync::new(RecordingMap::default());
        view.show_search_results(&[location(1, "A", 43.0, -79.0), location(2, "B", 44.0, -80.0)]);

        view.show_single(&location(3, "C", 43.5, -79.5));

        assert_eq!(view.markers().len(), 1);
        assert_eq!(view.markers()[0].title, "C");
        assert_eq!(view.camera(), Some(&CameraTarget::point(43.5, -79.5)));
        assert_eq!(view.map().markers().len(), 1);
    }

    #[test]
    fn search_results_are_framed() {
        let mut view = ViewSync::new(RecordingMap::default());
        view.show_search_results(&[location(1, "A", 43.0, -79.0), location(2, "B", 43.1, -79.1)]);

        assert_eq!(view.markers().len(), 2);
        assert!(matches!(view.camera(), Some(CameraTarget::Bounds { .. })));
        assert_eq!(view.map().commands().first(), Some(&MapCommand::Clear));
    }

    #[test]
    fn empty_results_leave_map_and_camera_alone() {
        let mut view = ViewSync::new(RecordingMap::default());
        view.show_single(&location(1, "A", 43.0, -79.0));
        let markers = view.markers().to_vec();
        let camera = view.camera().cloned();
        let issued = view.map().commands().len();

        view.show_search_results(&[]);

        assert_eq!(view.markers(), markers.as_slice());
        assert_eq!(view.camera().cloned(), camera);
        assert_eq!(view.map().commands().len(), issued);
    }

    #[test]
    fn clear_map_keeps_the_camera() {
        let mut view = ViewSync::new(RecordingMap::default());
        view.show_single(&location(1, "A", 43.0, -79.0));
        view.clear_map();

        assert!(view.markers().is_empty());
        assert!(view.map().markers().is_empty());
        assert!(view.camera().is_some());
    }

    #[test]
    fn refresh_replaces_the_cached_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with(&dir, &["A", "B"]);
        let mut view = ViewSync::new(RecordingMap::default());

        assert_eq!(view.refresh_list(&store).unwrap(), 2);
        let a = view.locations()[0].clone();
        store.delete(a.id).unwrap();
        view.refresh_list(&store).unwrap();

        let names: Vec<_> = view.locations().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["B"]);
    }

    #[test]
    fn live_search_walks_the_session_states() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with(&dir, &["High Park", "Riverdale Park", "Casa Loma"]);
        let mut view = ViewSync::new(RecordingMap::default());

        assert_eq!(view.search_as_you_type(&store, "park").unwrap(), SearchSession::ResultsShown(2));
        assert_eq!(view.markers().len(), 2);
        let framed = view.camera().cloned();

        assert_eq!(view.search_as_you_type(&store, "parkz").unwrap(), SearchSession::NoResults);
        assert!(view.markers().is_empty());
        assert_eq!(view.camera().cloned(), framed);

        assert_eq!(view.search_as_you_type(&store, "loma").unwrap(), SearchSession::ResultsShown(1));
        assert_eq!(view.markers()[0].title, "Casa Loma");

        assert_eq!(view.search_as_you_type(&store, "   ").unwrap(), SearchSession::Idle);
        assert!(view.markers().is_empty());
        assert_eq!(view.session(), SearchSession::Idle);
    }

    #[test]
    fn show_all_of_an_empty_listing_clears_old_markers() {
        let mut view = ViewSync::new(RecordingMap::default());
        view.show_single(&location(1, "A", 43.0, -79.0));
        let camera = view.camera().cloned();

        view.show_all(&[]);

        assert!(view.markers().is_empty());
        assert!(view.map().markers().is_empty());
        assert_eq!(view.camera().cloned(), camera);
        assert_eq!(view.map().commands().last(), Some(&MapCommand::Clear));
    }

    struct Unreadable;

    impl Storage for Unreadable {
        fn insert(&mut self, _: &LocationDraft) -> Result<i64> {
            Err(SpotfinderError::WriteFailed("read-only".to_string()))
        }

        fn insert_batch(&mut self, _: &[LocationDraft]) -> Result<Vec<i64>> {
            Err(SpotfinderError::WriteFailed("read-only".to_string()))
        }

        fn find_by_name(&self, _: &str) -> Result<Option<LocationRecord>> {
            Ok(None)
        }

        fn search_by_name(&self, _: &str) -> Result<Vec<LocationRecord>> {
            Err(SpotfinderError::StorageUnavailable("disk gone".to_string()))
        }

        fn all(&self) -> Result<Vec<LocationRecord>> {
            Ok(Vec::new())
        }

        fn update(&mut self, _: i64, _: &LocationDraft) -> Result<bool> {
            Ok(false)
        }

        fn delete(&mut self, _: i64) -> Result<bool> {
            Ok(false)
        }

        fn count(&self) -> usize {
            0
        }
    }

    #[test]
    fn failed_live_search_keeps_the_previous_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut view = ViewSync::new(RecordingMap::default());
        view.search_as_you_type(&store_with(&dir, &["A"]), "a").unwrap();
        assert_eq!(view.session(), SearchSession::ResultsShown(1));

        let broken = LocationStore::with_backend(Box::new(Unreadable), dir.path().join("none.json"));
        let err = view.search_as_you_type(&broken, "ab").unwrap_err();

        assert!(err.is_storage_unavailable());
        assert_eq!(view.session(), SearchSession::ResultsShown(1));
        assert_eq!(view.markers().len(), 1);
    }

    #[test]
    fn show_all_places_the_full_listing() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with(&dir, &["A", "B", "C"]);
        let mut view = ViewSync::new(RecordingMap::default());
        view.refresh_list(&store).unwrap();

        let listing = view.locations().to_vec();
        view.show_all(&listing);

        let titles: Vec<_> = view.map().markers().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }
}
