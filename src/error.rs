/// Error taxonomy shared across the crate
///
/// Everything here is deterministic caller-side misuse or malformed
/// input. There is no partial-failure state and nothing is retryable.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// An element id or cell coordinate outside the structure
    #[error("index {index} out of range for {len} elements")]
    IndexOutOfRange { index: usize, len: usize },

    /// The raster scan finished with fewer than two marker cells
    #[error("grid scan discovered {found} marker cell(s), need 2 (entry and exit)")]
    MissingMarker { found: usize },

    /// A zero-width or zero-height source has no cells to scan
    #[error("grid has zero area ({width}x{height})")]
    EmptyGrid { width: usize, height: usize },

    /// Grid fixture text contained a symbol outside the cell alphabet
    #[error("unrecognized cell symbol {symbol:?} at line {line}, column {column}")]
    UnknownSymbol {
        symbol: char,
        line: usize,
        column: usize,
    },

    /// Grid fixture rows must all have the same width
    #[error("line {line} has {got} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        got: usize,
        expected: usize,
    },
}
