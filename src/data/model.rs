use ndarray::Array2;

use crate::error::ViewerError;

// ---------------------------------------------------------------------------
// DataMatrix – the full numeric table loaded from the .dat file
// ---------------------------------------------------------------------------

/// Row-major matrix of samples: one row per sample instant, one column per
/// channel. Immutable after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct DataMatrix {
    values: Array2<f64>,
}

impl DataMatrix {
    /// Build a matrix from a flat row-major buffer.
    ///
    /// `flat` must hold exactly `rows * cols` values; the loader guarantees
    /// this by construction.
    pub fn from_flat(rows: usize, cols: usize, flat: Vec<f64>) -> Self {
        let values = Array2::from_shape_fn((rows, cols), |(r, c)| flat[r * cols + c]);
        DataMatrix { values }
    }

    /// Number of sample rows.
    pub fn n_samples(&self) -> usize {
        self.values.nrows()
    }

    /// Number of channel columns.
    pub fn n_channels(&self) -> usize {
        self.values.ncols()
    }

    /// Extract one channel (column) as an owned sample vector.
    ///
    /// The returned vector always has length [`Self::n_samples`].
    pub fn channel(&self, index: usize) -> Result<Vec<f64>, ViewerError> {
        if index >= self.n_channels() {
            return Err(ViewerError::IndexOutOfRange {
                index,
                width: self.n_channels(),
            });
        }
        Ok(self.values.column(index).to_vec())
    }
}

// ---------------------------------------------------------------------------
// Time axis
// ---------------------------------------------------------------------------

/// `length` evenly spaced timestamps spanning `[0, length/sample_rate]`,
/// both endpoints included.
///
/// The span deliberately ends at `length/sample_rate`, not
/// `(length-1)/sample_rate`: one sample interval longer than a strict
/// `index/sample_rate` axis. The final timestamp equals the endpoint
/// exactly.
pub fn build_time_axis(length: usize, sample_rate: f64) -> Vec<f64> {
    match length {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let end = length as f64 / sample_rate;
            let step = end / (length - 1) as f64;
            let mut axis: Vec<f64> = (0..length).map(|i| i as f64 * step).collect();
            axis[length - 1] = end;
            axis
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix_3x4() -> DataMatrix {
        // [[1,2,3],[4,5,6],[7,8,9],[10,11,12]]
        let flat: Vec<f64> = (1..=12).map(|v| v as f64).collect();
        DataMatrix::from_flat(4, 3, flat)
    }

    #[test]
    fn channel_extraction_returns_the_column() {
        let m = matrix_3x4();
        assert_eq!(m.channel(1).unwrap(), vec![2.0, 5.0, 8.0, 11.0]);
    }

    #[test]
    fn channel_out_of_range_is_rejected() {
        let m = matrix_3x4();
        match m.channel(4) {
            Err(ViewerError::IndexOutOfRange { index: 4, width: 3 }) => {}
            other => panic!("expected IndexOutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn channel_length_matches_row_count() {
        let m = matrix_3x4();
        for c in 0..m.n_channels() {
            assert_eq!(m.channel(c).unwrap().len(), m.n_samples());
        }
    }

    #[test]
    fn time_axis_spans_zero_to_length_over_rate() {
        let axis = build_time_axis(5, 1000.0);
        let expected = [0.0, 0.00125, 0.0025, 0.00375, 0.005];
        assert_eq!(axis.len(), 5);
        for (got, want) in axis.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-12, "got {got}, want {want}");
        }
        // Endpoint is exact, not accumulated.
        assert_eq!(axis[4], 5.0 / 1000.0);
    }

    #[test]
    fn time_axis_degenerate_lengths() {
        assert!(build_time_axis(0, 1000.0).is_empty());
        assert_eq!(build_time_axis(1, 1000.0), vec![0.0]);
    }

    #[test]
    fn time_axis_is_monotonic() {
        let axis = build_time_axis(1000, 250.0);
        assert!(axis.windows(2).all(|w| w[1] > w[0]));
        assert_eq!(axis[0], 0.0);
        assert_eq!(axis[999], 1000.0 / 250.0);
    }
}
