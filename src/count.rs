//! Memoized path counting.
//!
//! `count(f, l, n)` is the number of length-`n` sequences `f = s0, s1, .., s(n-1) = l`
//! where every consecutive pair is an edge:
//!
//! - `n == 1`: `1` if `f == l`, else `0` (never stored)
//! - `n == 2`: `1` if `l` is a successor of `f`, else `0`
//! - `n >= 3`: sum of `count(c, l, n - 1)` over successors `c` of `f`
//!
//! The recurrence for a fixed end `l` only ever looks at entries with the same `l`, so a
//! miss fills the whole `l` column bottom-up, length 2 through `n`, for every start
//! node. No recursion, and every later query on that column up to `n` is a table hit.
//! A miss costs \(O(n E)\) for `E` edges; filling all columns is \(O(n E m)\).

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::{debug, trace};

use crate::error::CountError;
use crate::graph::GraphRef;
use crate::layout::Symbol;
use crate::memo::{MemoStats, MemoTable};
use crate::transitions::TransitionGraph;

pub struct PathCounter<'g, G> {
    graph: &'g G,
    table: MemoTable,
    /// Per end node: the largest length whose column is completely in `table`.
    filled: Vec<usize>,
    stats: MemoStats,
}

impl<'g, G: GraphRef> PathCounter<'g, G> {
    /// A counter with an empty table.
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            table: MemoTable::new(),
            filled: vec![0; graph.node_count()],
            stats: MemoStats::default(),
        }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn table(&self) -> &MemoTable {
        &self.table
    }

    pub fn stats(&self) -> MemoStats {
        self.stats
    }

    /// Number of legal sequences of length `n` from node `f` to node `l`.
    ///
    /// # Panics
    ///
    /// If `f` or `l` is not a node of the graph.
    pub fn count(&mut self, f: usize, l: usize, n: usize) -> Result<BigUint, CountError> {
        match n {
            0 => Err(CountError::ZeroLength),
            1 => {
                self.check_nodes(f, l);
                Ok(BigUint::from(u8::from(f == l)))
            }
            _ => Ok(self.stored(f, l, n).clone()),
        }
    }

    /// Number of legal sequences of length `n` starting at node `f`, any end.
    pub fn count_from(&mut self, f: usize, n: usize) -> Result<BigUint, CountError> {
        match n {
            0 => Err(CountError::ZeroLength),
            1 => {
                self.check_nodes(f, f);
                Ok(BigUint::one())
            }
            _ => {
                let mut total = BigUint::zero();
                for l in 0..self.graph.node_count() {
                    total += self.stored(f, l, n);
                }
                Ok(total)
            }
        }
    }

    /// The table entry for `(f, l, n)`, `n >= 2`, filling the `l` column on a miss.
    ///
    /// Borrowing the entry lets callers sum counts without cloning each one.
    pub(crate) fn stored(&mut self, f: usize, l: usize, n: usize) -> &BigUint {
        self.check_nodes(f, l);
        debug_assert!(n >= 2, "lengths below 2 are not stored");
        if self.table.contains((f, l, n)) {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
            self.fill_column(l, n);
        }
        self.table.filled((f, l, n))
    }

    fn check_nodes(&self, f: usize, l: usize) {
        let nodes = self.graph.node_count();
        assert!(f < nodes && l < nodes, "nodes ({f}, {l}) out of range for {nodes} nodes");
    }

    /// Extend the `l` column of the table up to length `n`.
    fn fill_column(&mut self, l: usize, n: usize) {
        let done = self.filled[l];
        if done >= n {
            return;
        }
        let graph = self.graph;
        debug!(end = l, from = done.max(1) + 1, to = n, "filling memo column");

        for nn in done.max(1) + 1..=n {
            for s in 0..graph.node_count() {
                let succ = graph.successors_ref(s);
                let value = if nn == 2 {
                    BigUint::from(u8::from(succ.contains(&l)))
                } else {
                    let mut sum = BigUint::zero();
                    for &c in succ {
                        sum += self.table.filled((c, l, nn - 1));
                    }
                    sum
                };
                self.table.insert((s, l, nn), value);
                self.stats.computed += 1;
            }
            self.filled[l] = nn;
            trace!(end = l, length = nn, entries = self.table.len(), "memo column extended");
        }
    }
}

impl<'g> PathCounter<'g, TransitionGraph> {
    /// [`count`](Self::count) by symbol.
    pub fn count_paths(&mut self, f: Symbol, l: Symbol, n: usize) -> Result<BigUint, CountError> {
        let f = self.graph.require(f)?;
        let l = self.graph.require(l)?;
        self.count(f, l, n)
    }

    /// [`count_from`](Self::count_from) by symbol.
    pub fn count_paths_from(&mut self, f: Symbol, n: usize) -> Result<BigUint, CountError> {
        let f = self.graph.require(f)?;
        self.count_from(f, n)
    }
}
