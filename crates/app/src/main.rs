//! Headless console demo
//!
//! Runs a scripted session against the mock map backend: drives the vehicle
//! with arrow-key commands, long-presses the surface to propose a waypoint,
//! saves it, and teleports back to it. Useful for eyeballing the command
//! stream a real map widget would receive.

use log::{LevelFilter, info};
use nalgebra::Point2;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use geocore::mock::MockMap;
use gesture::{LONG_PRESS_MS, PressEvent, PressRegion};
use ugv_console_app::{ConsoleConfig, FileStore, UgvConsole};

fn main() {
    TermLogger::init(
        LevelFilter::Debug,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .expect("logger init");

    let config = match std::env::args().nth(1) {
        Some(path) => match ConsoleConfig::from_file(std::path::Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("failed to load config {path}: {err}");
                std::process::exit(1);
            }
        },
        None => ConsoleConfig::default(),
    };

    let store = FileStore::open(config.storage_path.clone());
    let backend = MockMap::new(config.initial_position, config.zoom);
    let mut console = UgvConsole::new(config, Box::new(store));
    console.initialize(backend);
    console.attach_long_press(|| true);

    // Drive a short arc: turn right ten steps, then forward five.
    for _ in 0..10 {
        console.handle_key("ArrowRight");
    }
    for _ in 0..5 {
        console.handle_key("ArrowUp");
    }
    info!(
        "pose after arc: ({:.6}, {:.6}) heading {}°",
        console.position().lat,
        console.position().lng,
        console.heading()
    );

    // Long-press the surface to propose a waypoint, then save it.
    console.pointer_down(PressEvent {
        screen: Point2::new(520.0, 260.0),
        region: PressRegion::Surface,
        timestamp_ms: 0,
    });
    if let Some(press) = console.pump(LONG_PRESS_MS + 100) {
        console.propose_waypoint(press.coordinate, None);
        info!(
            "proposed {:?} at ({:.6}, {:.6})",
            console.pending_waypoint().map(|w| w.name.clone()),
            press.coordinate.lat,
            press.coordinate.lng
        );
        console.save_waypoint();
    }

    console.drive_to_waypoint(0);
    info!(
        "teleported to saved waypoint; {} saved total",
        console.saved_waypoints().len()
    );

    console.destroy();
}
