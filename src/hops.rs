//! Hop sets: the relative offsets that define one legal move on a grid.

/// A fixed, ordered set of `(dx, dy)` offsets.
///
/// Iteration order is the order successors are appended in; it carries no meaning
/// beyond determinism.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HopSet {
    offsets: Vec<(isize, isize)>,
}

impl HopSet {
    pub fn new(offsets: Vec<(isize, isize)>) -> Self {
        Self { offsets }
    }

    /// The eight chess-knight moves.
    ///
    /// Horizontal deltas run `-2, -1, 1, 2`; each is paired with the two vertical deltas
    /// of complementary magnitude, negative first.
    pub fn knight() -> Self {
        let mut offsets = Vec::with_capacity(8);
        for dx in [-2isize, -1, 1, 2] {
            let dy = 3 - dx.abs();
            offsets.push((dx, -dy));
            offsets.push((dx, dy));
        }
        Self { offsets }
    }

    pub fn offsets(&self) -> &[(isize, isize)] {
        &self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// `true` when every offset's negation is also in the set.
    ///
    /// Graphs built from a symmetric hop set are symmetric: `b` follows `a` iff `a`
    /// follows `b`.
    pub fn is_symmetric(&self) -> bool {
        self.offsets.iter().all(|&(dx, dy)| self.offsets.contains(&(-dx, -dy)))
    }
}
