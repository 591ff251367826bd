use std::path::PathBuf;
use thiserror::Error;

/// Failures that can occur after the arguments have been accepted.
/// None of these are retried; every one ends the run.
#[derive(Error, Debug)]
pub enum PatternError {
    #[error("random source failure: {0}")]
    RandomSource(#[from] rand::Error),
    /// Only produced by `Grid::from_array`.
    #[error("grid must be {expected_columns}x{expected_rows} blocks, got {columns}x{rows}")]
    GridShape {
        columns: usize,
        rows: usize,
        expected_columns: usize,
        expected_rows: usize,
    },
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("failed to write {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
