use std::path::{Path, PathBuf};

use crate::error::ViewerError;

// ---------------------------------------------------------------------------
// Fixed constants of the upstream filter contract
// ---------------------------------------------------------------------------

/// Sample rate of the filter output, in samples per second. Used only to
/// scale the time axis.
pub const SAMPLE_RATE_HZ: f64 = 1000.0;

/// Filenames the upstream filter writes, probed in the working directory in
/// this order.
pub const INPUT_CANDIDATES: [&str; 2] = ["ecg_filtered.dat", "eeg_filtered.dat"];

/// Which upstream pipeline produced the file, inferred from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    Ecg,
    Eeg,
}

impl SignalKind {
    pub fn from_path(path: &Path) -> Self {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        if stem.starts_with("eeg") {
            SignalKind::Eeg
        } else {
            SignalKind::Ecg
        }
    }
}

// ---------------------------------------------------------------------------
// Layout – ordered mapping of channels to subplots
// ---------------------------------------------------------------------------

/// One subplot: which matrix column to draw and its y-axis label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelSpec {
    pub column: usize,
    pub label: &'static str,
}

/// Ordered subplot arrangement, top to bottom.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub channels: Vec<ChannelSpec>,
}

impl Layout {
    /// ECG output: filtered signal, raw input, noise-remover estimate.
    pub fn ecg() -> Self {
        Layout {
            channels: vec![
                ChannelSpec { column: 0, label: "filtered" },
                ChannelSpec { column: 1, label: "original" },
                ChannelSpec { column: 2, label: "remover" },
            ],
        }
    }

    /// ECG output that also logs the two adaptive weight magnitudes.
    pub fn ecg_with_weights() -> Self {
        let mut layout = Layout::ecg();
        layout.channels.push(ChannelSpec { column: 3, label: "w1" });
        layout.channels.push(ChannelSpec { column: 4, label: "w2" });
        layout
    }

    /// EEG output. The file stores fnn, eeg, ecg; the subplots show
    /// eeg, ecg, fnn, matching what operators are used to reading.
    pub fn eeg() -> Self {
        Layout {
            channels: vec![
                ChannelSpec { column: 1, label: "eeg" },
                ChannelSpec { column: 2, label: "ecg" },
                ChannelSpec { column: 0, label: "fnn" },
            ],
        }
    }

    /// Pick the layout for a loaded file. A file narrower than the chosen
    /// layout is caught later, at channel extraction.
    pub fn for_matrix(kind: SignalKind, width: usize) -> Self {
        match kind {
            SignalKind::Ecg if width >= 5 => Layout::ecg_with_weights(),
            SignalKind::Ecg => Layout::ecg(),
            SignalKind::Eeg => Layout::eeg(),
        }
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ViewerConfig – everything the viewer needs, in one place
// ---------------------------------------------------------------------------

/// Explicit run configuration, assembled in `main` and handed to state
/// construction. Replaces the scattered constants of the original scripts.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub input_path: PathBuf,
    pub sample_rate: f64,
    pub layout: Layout,
}

/// Find the filter output file in `dir`.
pub fn discover_input(dir: &Path) -> Result<PathBuf, ViewerError> {
    for name in INPUT_CANDIDATES {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(ViewerError::FileNotFound {
        path: dir.join(INPUT_CANDIDATES[0]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn signal_kind_follows_the_filename() {
        assert_eq!(
            SignalKind::from_path(Path::new("ecg_filtered.dat")),
            SignalKind::Ecg
        );
        assert_eq!(
            SignalKind::from_path(Path::new("/tmp/eeg_filtered.dat")),
            SignalKind::Eeg
        );
    }

    #[test]
    fn ecg_layout_orders_filtered_original_remover() {
        let layout = Layout::ecg();
        let labels: Vec<&str> = layout.channels.iter().map(|c| c.label).collect();
        assert_eq!(labels, ["filtered", "original", "remover"]);
        let columns: Vec<usize> = layout.channels.iter().map(|c| c.column).collect();
        assert_eq!(columns, [0, 1, 2]);
    }

    #[test]
    fn eeg_layout_reorders_the_stored_columns() {
        let layout = Layout::eeg();
        let pairs: Vec<(usize, &str)> = layout
            .channels
            .iter()
            .map(|c| (c.column, c.label))
            .collect();
        assert_eq!(pairs, [(1, "eeg"), (2, "ecg"), (0, "fnn")]);
    }

    #[test]
    fn width_selects_the_weights_variant() {
        assert_eq!(Layout::for_matrix(SignalKind::Ecg, 3).len(), 3);
        assert_eq!(Layout::for_matrix(SignalKind::Ecg, 4).len(), 3);
        assert_eq!(Layout::for_matrix(SignalKind::Ecg, 5).len(), 5);
        assert_eq!(Layout::for_matrix(SignalKind::Eeg, 3).len(), 3);
        let labels: Vec<&str> = Layout::for_matrix(SignalKind::Ecg, 5)
            .channels
            .iter()
            .map(|c| c.label)
            .collect();
        assert_eq!(labels, ["filtered", "original", "remover", "w1", "w2"]);
    }

    #[test]
    fn discovery_prefers_ecg_then_eeg() {
        let dir = std::env::temp_dir().join(format!("filtscope_cfg_test_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();

        assert!(matches!(
            discover_input(&dir),
            Err(ViewerError::FileNotFound { .. })
        ));

        fs::write(dir.join("eeg_filtered.dat"), "0 0 0\n").unwrap();
        assert_eq!(discover_input(&dir).unwrap(), dir.join("eeg_filtered.dat"));

        fs::write(dir.join("ecg_filtered.dat"), "0 0 0\n").unwrap();
        assert_eq!(discover_input(&dir).unwrap(), dir.join("ecg_filtered.dat"));

        fs::remove_dir_all(&dir).ok();
    }
}
