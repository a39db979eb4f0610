//! List and map synchronization driven through the controller.

use spotfinder::app::{handle_event, Action, AppState, Event, FormInput, Notice};
use spotfinder::storage::{LocationStore, SCHEMA_VERSION};
use spotfinder::sync::{CameraTarget, RecordingMap, SearchSession, BOUNDS_PADDING_PX, SINGLE_POINT_ZOOM};

fn seeded(dir: &tempfile::TempDir) -> AppState<RecordingMap> {
    let store = LocationStore::open(dir.path().join("spotfinder.json"), SCHEMA_VERSION).unwrap();
    AppState::new(store, RecordingMap::default()).unwrap()
}

fn form(name: &str, address: &str, lat: f64, lng: f64) -> FormInput {
    FormInput {
        name: name.to_string(),
        address: address.to_string(),
        latitude: Some(lat),
        longitude: Some(lng),
    }
}

#[test]
fn list_tracks_every_write() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = seeded(&dir);
    let before = state.view.locations().len();

    handle_event(&mut state, &Event::BeginAdd("Home".to_string())).unwrap();
    let actions = handle_event(&mut state, &Event::Save(form("Home", "1 Main St", 43.7, -79.4))).unwrap();
    assert_eq!(actions.first(), Some(&Action::Notify(Notice::Added)));
    assert_eq!(state.view.locations().len(), before + 1);
    assert_eq!(state.view.locations().last().map(|l| l.name.as_str()), Some("Home"));

    handle_event(&mut state, &Event::BeginUpdate("home".to_string())).unwrap();
    handle_event(&mut state, &Event::Save(form("Cottage", "9 Lake Rd", 44.5, -78.9))).unwrap();
    assert!(state.view.locations().iter().any(|l| l.name == "Cottage"));
    assert!(!state.view.locations().iter().any(|l| l.name == "Home"));

    let actions = handle_event(&mut state, &Event::Delete("Cottage".to_string())).unwrap();
    assert_eq!(actions.first(), Some(&Action::Notify(Notice::Deleted)));
    assert_eq!(state.view.locations().len(), before);
}

#[test]
fn exact_search_centers_one_marker() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = seeded(&dir);

    handle_event(&mut state, &Event::SearchSubmitted("cn tower".to_string())).unwrap();

    let markers = state.view.map().markers();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].title, "CN Tower");
    assert_eq!(
        state.view.map().camera(),
        Some(&CameraTarget::Point {
            latitude: 43.6426,
            longitude: -79.3871,
            zoom: SINGLE_POINT_ZOOM,
        })
    );
}

#[test]
fn live_search_walks_the_session_states() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = seeded(&dir);

    handle_event(&mut state, &Event::SearchTextChanged("park".to_string())).unwrap();
    let SearchSession::ResultsShown(count) = state.view.session() else {
        panic!("expected results, got {:?}", state.view.session());
    };
    assert_eq!(state.view.map().markers().len(), count);
    if count > 1 {
        assert!(matches!(
            state.view.map().camera(),
            Some(CameraTarget::Bounds { padding_px, .. }) if *padding_px == BOUNDS_PADDING_PX
        ));
    }
    let framed = state.view.map().camera().cloned();

    handle_event(&mut state, &Event::SearchTextChanged("parkzzz".to_string())).unwrap();
    assert_eq!(state.view.session(), SearchSession::NoResults);
    assert!(state.view.map().markers().is_empty());
    assert_eq!(state.view.map().camera().cloned(), framed);

    handle_event(&mut state, &Event::SearchTextChanged(String::new())).unwrap();
    assert_eq!(state.view.session(), SearchSession::Idle);
    assert!(state.view.map().markers().is_empty());
}

#[test]
fn show_all_places_a_marker_per_row() {
    let dir = tempfile::tempdir().unwrap();
    let mut state = seeded(&dir);

    handle_event(&mut state, &Event::ShowAll).unwrap();
    assert_eq!(state.view.map().markers().len(), state.view.locations().len());
    assert!(matches!(state.view.map().camera(), Some(CameraTarget::Bounds { .. })));
}
