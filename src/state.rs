use std::path::PathBuf;

use crate::config::ViewerConfig;
use crate::data::model::{build_time_axis, DataMatrix};
use crate::error::ViewerError;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// One subplot's worth of data: the channel samples and their y-axis label.
#[derive(Debug, Clone, PartialEq)]
pub struct TracePane {
    pub label: &'static str,
    pub samples: Vec<f64>,
}

/// Everything the UI renders. Assembled once from config + matrix before the
/// window opens, never mutated afterwards: every frame draws the same data.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Source file, shown in the status bar.
    pub source: PathBuf,
    pub sample_rate: f64,
    pub n_samples: usize,
    pub n_channels: usize,
    /// Shared x axis, same length as every pane's samples.
    pub time: Vec<f64>,
    /// Subplots, top to bottom.
    pub panes: Vec<TracePane>,
}

impl AppState {
    /// Slice the matrix into panes per the layout and derive the time axis.
    ///
    /// Fails with `IndexOutOfRange` when the layout names a column the file
    /// does not have (variant/file mismatch).
    pub fn assemble(config: &ViewerConfig, matrix: &DataMatrix) -> Result<Self, ViewerError> {
        let mut panes = Vec::with_capacity(config.layout.len());
        for spec in &config.layout.channels {
            panes.push(TracePane {
                label: spec.label,
                samples: matrix.channel(spec.column)?,
            });
        }

        Ok(AppState {
            source: config.input_path.clone(),
            sample_rate: config.sample_rate,
            n_samples: matrix.n_samples(),
            n_channels: matrix.n_channels(),
            time: build_time_axis(matrix.n_samples(), config.sample_rate),
            panes,
        })
    }

    /// Spanned duration in seconds (the time-axis endpoint).
    pub fn duration_secs(&self) -> f64 {
        self.time.last().copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Layout, SAMPLE_RATE_HZ};

    fn config_for(layout: Layout) -> ViewerConfig {
        ViewerConfig {
            input_path: PathBuf::from("ecg_filtered.dat"),
            sample_rate: SAMPLE_RATE_HZ,
            layout,
        }
    }

    fn matrix(rows: usize, cols: usize) -> DataMatrix {
        let flat: Vec<f64> = (0..rows * cols).map(|v| v as f64).collect();
        DataMatrix::from_flat(rows, cols, flat)
    }

    #[test]
    fn panes_and_time_axis_share_one_length() {
        let m = matrix(8, 3);
        let state = AppState::assemble(&config_for(Layout::ecg()), &m).unwrap();
        assert_eq!(state.panes.len(), 3);
        assert_eq!(state.time.len(), 8);
        for pane in &state.panes {
            assert_eq!(pane.samples.len(), state.time.len());
        }
        assert_eq!(state.duration_secs(), 8.0 / SAMPLE_RATE_HZ);
    }

    #[test]
    fn pane_order_follows_the_layout() {
        let m = matrix(4, 3);
        let state = AppState::assemble(&config_for(Layout::eeg()), &m).unwrap();
        let labels: Vec<&str> = state.panes.iter().map(|p| p.label).collect();
        assert_eq!(labels, ["eeg", "ecg", "fnn"]);
        // "eeg" is column 1 of the stored file.
        assert_eq!(state.panes[0].samples, m.channel(1).unwrap());
    }

    #[test]
    fn narrow_file_fails_at_extraction() {
        let m = matrix(4, 3);
        let result = AppState::assemble(&config_for(Layout::ecg_with_weights()), &m);
        assert!(matches!(
            result,
            Err(ViewerError::IndexOutOfRange { index: 3, width: 3 })
        ));
    }
}
