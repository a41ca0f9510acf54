//! Transition graph: for every symbol, the symbols reachable in one hop.
//!
//! Built once from a [`GridLayout`] and a [`HopSet`] and immutable afterwards. Nodes are
//! symbol indices in alphabet (reading) order; successor lists hold indices too, so
//! counting never hashes symbols on the hot path.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{CountError, LayoutError};
use crate::graph::{Graph, GraphRef};
use crate::hops::HopSet;
use crate::layout::{GridLayout, Symbol};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionGraph {
    symbols: Vec<Symbol>,
    index: HashMap<Symbol, usize>,
    successors: Vec<Vec<usize>>,
}

impl TransitionGraph {
    /// Apply every hop to every occupied cell; a hop that lands on an occupied in-bounds
    /// cell is an edge.
    pub fn build(layout: &GridLayout, hops: &HopSet) -> Self {
        let symbols = layout.alphabet();
        let index: HashMap<Symbol, usize> =
            symbols.iter().enumerate().map(|(i, &s)| (s, i)).collect();
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); symbols.len()];

        for (node, (x, y, _)) in layout.occupied().enumerate() {
            for &(dx, dy) in hops.offsets() {
                let tx = x as isize + dx;
                let ty = y as isize + dy;
                if let Some(target) = layout.get_signed(tx, ty) {
                    successors[node].push(index[&target]);
                }
            }
        }

        let graph = Self { symbols, index, successors };
        debug!(
            symbols = graph.len(),
            edges = graph.edge_count(),
            hops = hops.len(),
            "built transition graph"
        );
        graph
    }

    /// The knight-move graph over the keypad.
    pub fn keypad() -> Self {
        Self::build(&GridLayout::keypad(), &HopSet::knight())
    }

    /// Label the nodes of an arbitrary graph with symbols (`symbols[i]` labels node `i`).
    ///
    /// Parallel edges collapse to one: a sequence is a list of symbols, so two edges
    /// between the same pair cannot produce two different sequences.
    pub fn from_graph<G: Graph>(graph: &G, symbols: Vec<Symbol>) -> Result<Self, LayoutError> {
        let n = graph.node_count();
        if symbols.len() != n {
            return Err(LayoutError::LabelCount { nodes: n, labels: symbols.len() });
        }
        let mut index = HashMap::with_capacity(n);
        for (i, &s) in symbols.iter().enumerate() {
            if index.insert(s, i).is_some() {
                return Err(LayoutError::DuplicateLabel(s));
            }
        }

        let mut successors = Vec::with_capacity(n);
        for u in 0..n {
            let mut out: Vec<usize> = Vec::new();
            for v in graph.successors(u) {
                if v >= n {
                    return Err(LayoutError::EdgeOutOfRange { from: u, to: v, nodes: n });
                }
                if !out.contains(&v) {
                    out.push(v);
                }
            }
            successors.push(out);
        }

        let graph = Self { symbols, index, successors };
        debug!(symbols = graph.len(), edges = graph.edge_count(), "labelled transition graph");
        Ok(graph)
    }

    /// Alphabet size.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The alphabet, in node-index order.
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn symbol(&self, node: usize) -> Symbol {
        self.symbols[node]
    }

    pub fn index_of(&self, symbol: Symbol) -> Option<usize> {
        self.index.get(&symbol).copied()
    }

    /// [`index_of`](Self::index_of), failing with [`CountError::UnknownSymbol`].
    pub fn require(&self, symbol: Symbol) -> Result<usize, CountError> {
        self.index_of(symbol).ok_or(CountError::UnknownSymbol(symbol))
    }

    /// Successors of `symbol` as symbols, or `None` if it is not in the alphabet.
    pub fn successors_of(&self, symbol: Symbol) -> Option<Vec<Symbol>> {
        let node = self.index_of(symbol)?;
        Some(self.successors[node].iter().map(|&v| self.symbols[v]).collect())
    }

    /// `true` if `to` follows `from` in one hop.
    pub fn contains(&self, from: Symbol, to: Symbol) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(u), Some(v)) => self.successors[u].contains(&v),
            _ => false,
        }
    }

    /// `true` when every edge has its reverse.
    pub fn is_symmetric(&self) -> bool {
        self.successors
            .iter()
            .enumerate()
            .all(|(u, out)| out.iter().all(|&v| self.successors[v].contains(&u)))
    }
}

impl GraphRef for TransitionGraph {
    fn node_count(&self) -> usize {
        self.symbols.len()
    }

    fn successors_ref(&self, node: usize) -> &[usize] {
        self.successors.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl Graph for TransitionGraph {
    fn node_count(&self) -> usize {
        self.symbols.len()
    }

    fn successors(&self, node: usize) -> Vec<usize> {
        self.successors.get(node).cloned().unwrap_or_default()
    }
}
