// Countdown Widget Application
// Main entry point

use std::path::PathBuf;

use countdown_widget::ui_egui::CountdownApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Countdown Widget");

    let storage_path = resolve_storage_path();
    log::info!("Persisting events to {}", storage_path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Countdown Widget")
            .with_inner_size([480.0, 560.0])
            .with_min_inner_size([360.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Countdown Widget",
        options,
        Box::new(move |cc| Ok(Box::new(CountdownApp::new(cc, storage_path)))),
    )
}

/// Events live in the platform data directory for release builds and next
/// to the working directory during development.
fn resolve_storage_path() -> PathBuf {
    if cfg!(debug_assertions) {
        return PathBuf::from("countdown_events.json");
    }

    directories::ProjectDirs::from("", "", "countdown-widget")
        .map(|dirs| dirs.data_dir().join("events.json"))
        .unwrap_or_else(|| PathBuf::from("countdown_events.json"))
}
