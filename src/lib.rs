//! # hopcount
//!
//! Count the sequences of a given length over a fixed alphabet in which every
//! consecutive pair is one legal hop. The built-in instance is a keypad
//! (`a..o` over `1 2 3`) with chess-knight hops.
//!
//! - [`layout`]: symbols placed on a grid
//! - [`hops`]: the offsets that make one hop
//! - [`transitions`]: the successor lists derived once from a layout and a hop set
//! - [`count`]: memoized `(start, end, length)` path counts
//! - [`total`]: sums over every start and end
//! - [`oracle`]: exponential brute-force enumeration, for cross-checking small lengths
//! - [`sample`]: uniform random sequences, weighted by the counts
//!
//! ```
//! use hopcount::{count_all, PathCounter, TransitionGraph};
//! use num_bigint::BigUint;
//!
//! let graph = TransitionGraph::keypad();
//! let mut counter = PathCounter::new(&graph);
//! assert_eq!(count_all(&mut counter, 10).unwrap(), BigUint::from(1_320_360u32));
//!
//! // Counts are unbounded.
//! let long = count_all(&mut counter, 100).unwrap();
//! assert_eq!(long.to_string().len(), 55);
//! ```

pub mod cli;
pub mod count;
pub mod error;
pub mod graph;
pub mod hops;
pub mod layout;
pub mod memo;
pub mod oracle;
pub mod sample;
pub mod total;
pub mod transitions;

pub use count::PathCounter;
pub use error::{CountError, LayoutError};
pub use graph::{AdjacencyMatrix, Graph, GraphRef};
pub use hops::HopSet;
pub use layout::{GridLayout, Symbol};
pub use memo::{MemoStats, MemoTable};
pub use oracle::{brute_force_count, generate_sequences, SequenceGenerator};
pub use sample::{sample_sequences, sample_walks, SampleConfig};
pub use total::{count_all, count_all_signed, count_by_start};
pub use transitions::TransitionGraph;
