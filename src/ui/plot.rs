use eframe::egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::color::channel_palette;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Stacked trace plots (central panel)
// ---------------------------------------------------------------------------

/// Pair the shared time axis with one channel's samples.
///
/// Pure: rendering derives its point arrays from the immutable state every
/// frame, so identical inputs always plot identical data.
fn trace_points(time: &[f64], samples: &[f64]) -> Vec<[f64; 2]> {
    time.iter()
        .zip(samples.iter())
        .map(|(&t, &y)| [t, y])
        .collect()
}

/// Render one subplot per pane, top to bottom, splitting the available
/// height evenly. All subplots share the x range, zoom/pan and cursor
/// through one link group; only the bottom one carries the x-axis label.
pub fn stacked_traces(ui: &mut Ui, state: &AppState) {
    let n = state.panes.len();
    let palette = channel_palette(n);
    let link_group = ui.id().with("stacked_x");

    let spacing = ui.spacing().item_spacing.y;
    let height =
        ((ui.available_height() - spacing * (n as f32 - 1.0)) / n as f32).max(40.0);

    for (i, pane) in state.panes.iter().enumerate() {
        let bottom = i + 1 == n;

        let mut plot = Plot::new(format!("trace_{i}"))
            .height(height)
            .y_axis_label(pane.label)
            .link_axis(link_group, [true, false])
            .link_cursor(link_group, [true, false])
            .allow_boxed_zoom(true)
            .allow_drag(true)
            .allow_scroll(true)
            .allow_zoom(true);
        if bottom {
            plot = plot.x_axis_label("time/sec");
        }

        plot.show(ui, |plot_ui| {
            let points: PlotPoints = trace_points(&state.time, &pane.samples).into();
            plot_ui.line(Line::new(pane.label, points).color(palette[i]).width(1.0));
        });
    }
}
