//! End-to-end session tests over the mock map backend.

use approx::assert_relative_eq;
use nalgebra::Point2;

use geocore::mock::{MockMap, RenderCommand, SharedMemoryStore};
use geocore::traits::{KeyValueStore, MarkerKind};
use geocore::types::LatLng;
use gesture::{LONG_PRESS_MS, PressEvent, PressRegion};
use ugv_console_app::{ConsoleConfig, UgvConsole};

const START: LatLng = LatLng { lat: 50.0755, lng: 14.4378 };

fn press(x: f64, y: f64, t: u64) -> PressEvent {
    PressEvent {
        screen: Point2::new(x, y),
        region: PressRegion::Surface,
        timestamp_ms: t,
    }
}

fn fresh_console() -> UgvConsole<MockMap> {
    fresh_console_with(SharedMemoryStore::new())
}

fn fresh_console_with(store: SharedMemoryStore) -> UgvConsole<MockMap> {
    let config = ConsoleConfig::default();
    let backend = MockMap::new(config.initial_position, config.zoom);
    let mut console = UgvConsole::new(config, Box::new(store));
    console.initialize(backend);
    console
}

#[test]
fn keys_before_initialize_are_ignored() {
    let config = ConsoleConfig::default();
    let mut console: UgvConsole<MockMap> =
        UgvConsole::new(config, Box::new(SharedMemoryStore::new()));

    console.handle_key("ArrowUp");
    console.handle_key("ArrowRight");

    assert_eq!(console.position(), START);
    assert_eq!(console.heading(), 0);
}

#[test]
fn arrow_keys_drive_the_vehicle() {
    let mut console = fresh_console();

    console.handle_key("ArrowRight");
    console.handle_key("ArrowRight");
    assert_eq!(console.heading(), 6);

    console.handle_key("ArrowUp");
    assert!(console.position().lat > START.lat);
    assert!(console.position().lng > START.lng);

    console.handle_key("ArrowDown");
    assert_relative_eq!(console.position().lat, START.lat, epsilon = 1e-9);
    assert_relative_eq!(console.position().lng, START.lng, epsilon = 1e-9);

    // Unrecognized keys change nothing.
    console.handle_key("Space");
    assert_eq!(console.heading(), 6);
}

#[test]
fn long_press_proposes_then_save_persists() {
    let store = SharedMemoryStore::new();
    let mut console = fresh_console_with(store.clone());
    console.attach_long_press(|| true);

    console.pointer_down(press(400.0, 300.0, 0));
    assert_eq!(console.pump(1000), None);

    let fired = console.pump(LONG_PRESS_MS + 100).expect("press held");
    // (400, 300) is the mock viewport center, which projects to the map
    // center, i.e. the start position.
    assert_relative_eq!(fired.coordinate.lat, START.lat, epsilon = 1e-9);
    assert_relative_eq!(fired.coordinate.lng, START.lng, epsilon = 1e-9);

    console.propose_waypoint(fired.coordinate, None);
    assert_eq!(console.pending_waypoint().unwrap().name, "Waypoint 1");

    console.save_waypoint();
    assert!(console.pending_waypoint().is_none());
    assert_eq!(console.saved_waypoints().len(), 1);
    assert!(store.get("ugv_saved_waypoints").is_some());
}

#[test]
fn released_press_never_becomes_a_waypoint() {
    let mut console = fresh_console();
    console.attach_long_press(|| true);

    console.pointer_down(press(100.0, 100.0, 0));
    console.pointer_up();

    assert_eq!(console.pump(LONG_PRESS_MS * 2), None);
    assert!(console.pending_waypoint().is_none());
}

#[test]
fn gate_can_suppress_the_surface() {
    let mut console = fresh_console();
    console.attach_long_press(|| false);

    console.pointer_down(press(100.0, 100.0, 0));
    assert_eq!(console.pump(LONG_PRESS_MS * 2), None);
}

#[test]
fn pending_pin_moves_and_clears() {
    let mut console = fresh_console();

    console.propose_waypoint(LatLng::new(50.1, 14.5), None);
    console.propose_waypoint(LatLng::new(50.2, 14.6), None);

    // One pin, moved rather than stacked: two placements total (vehicle
    // marker at initialize, then a single waypoint pin).
    let commands = console.backend().unwrap().commands();
    let placed = commands
        .iter()
        .filter(|c| matches!(c, RenderCommand::PlaceMarker { .. }))
        .count();
    let moved_pin = commands
        .iter()
        .any(|c| matches!(c, RenderCommand::MoveMarker { at, .. } if *at == LatLng::new(50.2, 14.6)));
    assert_eq!(placed, 2);
    assert!(moved_pin);

    console.discard_waypoint();
    assert!(console.pending_waypoint().is_none());
    let removed = console
        .backend()
        .unwrap()
        .commands()
        .iter()
        .any(|c| matches!(c, RenderCommand::RemoveMarker { .. }));
    assert!(removed);
}

#[test]
fn drive_to_saved_waypoint_teleports() {
    let mut console = fresh_console();

    let target = LatLng::new(50.2, 14.6);
    console.propose_waypoint(target, Some("Gate"));
    console.save_waypoint();

    console.handle_key("ArrowLeft"); // heading 357
    console.drive_to_waypoint(0);

    assert_eq!(console.position(), target);
    assert_eq!(console.heading(), 357); // teleport leaves heading alone

    // Out-of-range index: nothing moves.
    console.drive_to_waypoint(7);
    assert_eq!(console.position(), target);
}

#[test]
fn waypoints_survive_a_session_restart() {
    let store = SharedMemoryStore::new();

    let mut console = fresh_console_with(store.clone());
    for i in 0..3 {
        console.propose_waypoint(LatLng::new(50.0 + f64::from(i) * 0.01, 14.4), None);
        console.save_waypoint();
    }
    console.destroy();

    let reloaded = fresh_console_with(store);
    assert_eq!(reloaded.saved_waypoints().len(), 3);
    assert_eq!(reloaded.saved_waypoints()[2].name, "Waypoint 3");
}

#[test]
fn destroy_quiesces_the_session() {
    let mut console = fresh_console();
    console.attach_long_press(|| true);
    console.destroy();

    assert!(!console.is_initialized());
    console.handle_key("ArrowUp");
    assert_eq!(console.position(), START);

    console.pointer_down(press(10.0, 10.0, 0));
    assert_eq!(console.pump(LONG_PRESS_MS * 2), None);
}

#[test]
fn vehicle_marker_is_rotatable_pin_is_not() {
    let mut console = fresh_console();
    console.propose_waypoint(LatLng::new(50.1, 14.5), None);

    let backend = console.backend().unwrap();
    let kinds: Vec<_> = backend
        .commands()
        .iter()
        .filter_map(|c| match c {
            RenderCommand::PlaceMarker { marker, rotatable, .. } => {
                Some((backend.marker_kind(*marker), *rotatable))
            }
            _ => None,
        })
        .collect();
    assert!(kinds.contains(&(Some(MarkerKind::Vehicle), true)));
    assert!(kinds.contains(&(Some(MarkerKind::Waypoint), false)));
}
