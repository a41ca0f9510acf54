//! Brute-force sequence enumeration.
//!
//! Breadth-first expansion from every length-1 sequence: pop a candidate, extend it by
//! each successor of its last node if it is still short, yield it once it reaches the
//! target length. Exponential in the length; only meant to cross-check the memoized
//! counter at small lengths.

use std::collections::VecDeque;

use crate::graph::GraphRef;
use crate::layout::Symbol;
use crate::transitions::TransitionGraph;

/// Lazy iterator over every legal sequence of one length, as node indices.
pub struct SequenceGenerator<'g, G> {
    graph: &'g G,
    length: usize,
    queue: VecDeque<Vec<usize>>,
}

impl<'g, G: GraphRef> SequenceGenerator<'g, G> {
    pub fn new(graph: &'g G, length: usize) -> Self {
        let queue = if length == 0 {
            VecDeque::new()
        } else {
            (0..graph.node_count()).map(|u| vec![u]).collect()
        };
        Self { graph, length, queue }
    }
}

impl<'g, G: GraphRef> Iterator for SequenceGenerator<'g, G> {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        while let Some(seq) = self.queue.pop_front() {
            if seq.len() >= self.length {
                return Some(seq);
            }
            let last = seq[seq.len() - 1];
            for &nx in self.graph.successors_ref(last) {
                let mut longer = Vec::with_capacity(seq.len() + 1);
                longer.extend_from_slice(&seq);
                longer.push(nx);
                self.queue.push_back(longer);
            }
        }
        None
    }
}

/// Every legal sequence of `length` symbols.
pub fn generate_sequences(
    graph: &TransitionGraph,
    length: usize,
) -> impl Iterator<Item = Vec<Symbol>> + '_ {
    SequenceGenerator::new(graph, length)
        .map(move |seq| seq.into_iter().map(|u| graph.symbol(u)).collect())
}

/// Number of sequences the enumeration yields for `length`.
pub fn brute_force_count<G: GraphRef>(graph: &G, length: usize) -> u64 {
    SequenceGenerator::new(graph, length).fold(0u64, |acc, _| acc + 1)
}
