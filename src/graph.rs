//! Minimal graph adapter traits.
//!
//! Nodes are dense indices `0..node_count()`. Edges are directed `u -> v`; a symmetric
//! hop rule simply stores both directions.

pub trait Graph {
    fn node_count(&self) -> usize;
    fn successors(&self, node: usize) -> Vec<usize>;
}

/// A graph view that can return **borrowed** successor slices.
///
/// The counter and the brute-force oracle read successors on every step of every fill,
/// so they take this view to avoid allocating a `Vec` per lookup.
pub trait GraphRef {
    fn node_count(&self) -> usize;
    fn successors_ref(&self, node: usize) -> &[usize];
    fn out_degree(&self, node: usize) -> usize {
        self.successors_ref(node).len()
    }

    /// Total number of directed edges.
    fn edge_count(&self) -> usize {
        (0..self.node_count()).map(|u| self.out_degree(u)).sum()
    }
}

/// A 0/1 adjacency matrix: `self.0[u][v]` is `true` when `u -> v` is an edge.
pub struct AdjacencyMatrix<'a>(pub &'a [Vec<bool>]);

impl<'a> Graph for AdjacencyMatrix<'a> {
    fn node_count(&self) -> usize {
        self.0.len()
    }
    fn successors(&self, node: usize) -> Vec<usize> {
        self.0[node].iter().enumerate().filter(|(_, &e)| e).map(|(i, _)| i).collect()
    }
}

#[cfg(feature = "petgraph")]
impl<N, E, Ty, Ix> Graph for petgraph::Graph<N, E, Ty, Ix>
where
    Ty: petgraph::EdgeType,
    Ix: petgraph::graph::IndexType,
{
    fn node_count(&self) -> usize {
        self.node_count()
    }
    fn successors(&self, node: usize) -> Vec<usize> {
        // petgraph yields neighbors newest-edge first; reverse to insertion order.
        let mut out: Vec<usize> =
            self.neighbors(petgraph::graph::NodeIndex::new(node)).map(|idx| idx.index()).collect();
        out.reverse();
        out
    }
}
