mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use anyhow::Context;
use app::FiltscopeApp;
use config::{Layout, SignalKind, ViewerConfig, SAMPLE_RATE_HZ};
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Load everything up front: a malformed file must fail the run before
    // any window opens.
    let cwd = std::env::current_dir().context("resolving working directory")?;
    let input_path = config::discover_input(&cwd).context("locating filter output")?;
    let matrix = data::loader::load_matrix(&input_path).context("loading filter output")?;

    let kind = SignalKind::from_path(&input_path);
    let config = ViewerConfig {
        layout: Layout::for_matrix(kind, matrix.n_channels()),
        input_path,
        sample_rate: SAMPLE_RATE_HZ,
    };
    let state = AppState::assemble(&config, &matrix).context("slicing channels")?;

    log::info!(
        "loaded {} samples x {} channels from {} ({} subplots)",
        state.n_samples,
        state.n_channels,
        state.source.display(),
        state.panes.len(),
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([500.0, 400.0]),
        ..Default::default()
    };

    // Blocks until the user closes the window.
    eframe::run_native(
        "Filtscope – filter output",
        options,
        Box::new(move |_cc| Ok(Box::new(FiltscopeApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("display failed: {e}"))
}
