use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the load → extract → render pipeline.
///
/// Every variant is fatal: the caller reports the diagnostic and exits
/// without opening a window. There is no retry and no partial rendering.
#[derive(Debug, Error)]
pub enum ViewerError {
    /// No filter output file at the expected location.
    #[error("input file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Non-numeric token, inconsistent row width, or an empty data file.
    #[error("parse error at {}:{line}: {reason}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// The layout requested a column the file does not have.
    #[error("channel index {index} out of range for {width}-column data")]
    IndexOutOfRange { index: usize, width: usize },

    /// Any other I/O failure while reading the input.
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_location() {
        let err = ViewerError::Parse {
            path: PathBuf::from("ecg_filtered.dat"),
            line: 7,
            reason: "expected 3 values, got 2".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ecg_filtered.dat"));
        assert!(msg.contains(":7"));
        assert!(msg.contains("expected 3 values, got 2"));
    }

    #[test]
    fn display_reports_index_and_width() {
        let err = ViewerError::IndexOutOfRange { index: 4, width: 3 };
        let msg = err.to_string();
        assert!(msg.contains('4'));
        assert!(msg.contains('3'));
    }
}
