use eframe::egui::Ui;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – what was loaded
// ---------------------------------------------------------------------------

/// One line of facts about the loaded file. Everything here is fixed for the
/// lifetime of the window; the bar exists so a glance answers "what am I
/// looking at".
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("filtscope");
        ui.separator();
        ui.label(state.source.display().to_string());
        ui.separator();
        ui.label(format!(
            "{} samples x {} channels",
            state.n_samples, state.n_channels
        ));
        ui.separator();
        ui.label(format!(
            "{:.0} Hz, {:.3} s",
            state.sample_rate,
            state.duration_secs()
        ));
    });
}
