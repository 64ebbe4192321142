/// Data layer: loading and the in-memory model.
///
/// Architecture:
/// ```text
///  ecg_filtered.dat / eeg_filtered.dat
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse whitespace rows → DataMatrix
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ DataMatrix  │  rows × channels, column extraction
///   └────────────┘
///        │
///        ▼
///   build_time_axis  sample index → seconds
/// ```
pub mod loader;
pub mod model;
