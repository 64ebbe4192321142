use std::fs;
use std::io;
use std::path::Path;

use super::model::DataMatrix;
use crate::error::ViewerError;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a filter output file into a [`DataMatrix`].
///
/// The format is the one the upstream filter writes: one sample per line,
/// 3–5 floating-point values separated by spaces or tabs. Blank lines and
/// `#`-prefixed comment lines are skipped. Every data row must have the
/// same width; a malformed file aborts the load with no partial result.
///
/// The whole file is read into memory and the handle released before any
/// plotting starts.
pub fn load_matrix(path: &Path) -> Result<DataMatrix, ViewerError> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ViewerError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ViewerError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    parse_matrix(&text, path)
}

// ---------------------------------------------------------------------------
// Text parsing
// ---------------------------------------------------------------------------

fn parse_matrix(text: &str, path: &Path) -> Result<DataMatrix, ViewerError> {
    let mut flat: Vec<f64> = Vec::new();
    let mut width: Option<usize> = None;
    let mut rows = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut row_width = 0usize;
        for token in line.split_whitespace() {
            let value: f64 = token.parse().map_err(|_| ViewerError::Parse {
                path: path.to_path_buf(),
                line: line_no,
                reason: format!("'{token}' is not a number"),
            })?;
            flat.push(value);
            row_width += 1;
        }

        match width {
            None => width = Some(row_width),
            Some(w) if w != row_width => {
                return Err(ViewerError::Parse {
                    path: path.to_path_buf(),
                    line: line_no,
                    reason: format!("expected {w} values, got {row_width}"),
                });
            }
            Some(_) => {}
        }
        rows += 1;
    }

    let width = width.ok_or_else(|| ViewerError::Parse {
        path: path.to_path_buf(),
        line: 0,
        reason: "file contains no data rows".to_string(),
    })?;

    Ok(DataMatrix::from_flat(rows, width, flat))
}
