//! Error types.

use thiserror::Error;

use crate::layout::Symbol;

/// Errors raised while constructing or parsing a [`GridLayout`](crate::layout::GridLayout).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The layout has no rows or no columns.
    #[error("layout is empty")]
    Empty,
    /// A row's width differs from the first row's width.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    /// A symbol occupies more than one cell.
    #[error("symbol {symbol} appears at ({first_column}, {first_row}) and ({column}, {row})")]
    DuplicateSymbol {
        symbol: Symbol,
        first_column: usize,
        first_row: usize,
        column: usize,
        row: usize,
    },
    /// A symbol label list does not match the graph it labels.
    #[error("graph has {nodes} nodes but {labels} symbol labels were supplied")]
    LabelCount { nodes: usize, labels: usize },
    /// The same symbol labels two graph nodes.
    #[error("symbol {0} labels more than one node")]
    DuplicateLabel(Symbol),
    /// A graph reported a successor index outside `0..node_count`.
    #[error("edge {from} -> {to} points outside a graph of {nodes} nodes")]
    EdgeOutOfRange { from: usize, to: usize, nodes: usize },
}

/// Errors raised by counting queries.
///
/// Both variants are caller-side contract violations; neither is retryable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CountError {
    #[error("symbol {0} is not in the alphabet")]
    UnknownSymbol(Symbol),
    #[error("sequence length must be at least 1")]
    ZeroLength,
}
