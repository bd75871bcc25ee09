// error.rs - Errors for pattern loading and grid access

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Crate result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading patterns or addressing the grid
#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed pattern: line {line} has {found} cells, expected {expected}")]
    MalformedPattern {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("pattern is {rows}x{cols} but the grid is only {max_rows}x{max_cols}")]
    PatternTooLarge {
        rows: usize,
        cols: usize,
        max_rows: usize,
        max_cols: usize,
    },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("i/o error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("simulation is no longer accepting input")]
    SimulationClosed,
}
