mod app;
mod color;
mod data;
mod state;
mod ui;

use app::PenguinApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // The dataset is fixed and bundled; failing to parse it means the
    // binary itself is broken.
    let dataset = match data::loader::load_bundled() {
        Ok(dataset) => dataset,
        Err(e) => {
            log::error!("failed to load bundled dataset: {e:#}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 820.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Penguin Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(PenguinApp::new(AppState::new(dataset))))),
    )
}
