//! Totals over every `(start, end)` pair.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::count::PathCounter;
use crate::error::CountError;
use crate::graph::GraphRef;

/// Number of legal sequences of length `n`, over all start and end symbols.
///
/// `n == 0` gives `0` and `n == 1` gives the alphabet size. Otherwise this sums
/// `count(f, l, n)` over every ordered pair, which leaves the counter's table filled for
/// every pair and every length up to `n`.
pub fn count_all<G: GraphRef>(
    counter: &mut PathCounter<'_, G>,
    n: usize,
) -> Result<BigUint, CountError> {
    let m = counter.graph().node_count();
    match n {
        0 => return Ok(BigUint::zero()),
        1 => return Ok(BigUint::from(m)),
        _ => {}
    }
    let mut total = BigUint::zero();
    for f in 0..m {
        for l in 0..m {
            total += counter.stored(f, l, n);
        }
    }
    Ok(total)
}

/// [`count_all`] for a signed length: zero or negative lengths count zero sequences.
pub fn count_all_signed<G: GraphRef>(
    counter: &mut PathCounter<'_, G>,
    n: i64,
) -> Result<BigUint, CountError> {
    match usize::try_from(n) {
        Ok(n) => count_all(counter, n),
        Err(_) => Ok(BigUint::zero()),
    }
}

/// Each start node's share of [`count_all`], indexed by node.
pub fn count_by_start<G: GraphRef>(
    counter: &mut PathCounter<'_, G>,
    n: usize,
) -> Result<Vec<BigUint>, CountError> {
    let m = counter.graph().node_count();
    if n == 0 {
        return Ok(vec![BigUint::zero(); m]);
    }
    (0..m).map(|f| counter.count_from(f, n)).collect()
}
