//! Uniform sampling of legal sequences.
//!
//! A sequence of length `n` is drawn uniformly from all legal ones by weighting each
//! choice with the number of completions it leaves: the start `f` with
//! `count_from(f, n)`, then each next symbol `c` with `count_from(c, remaining)`. The
//! weights come from the counter's memo table, so after the first draw every weight is
//! a table hit.

use num_bigint::BigUint;
use num_traits::Zero;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::count::PathCounter;
use crate::error::CountError;
use crate::graph::GraphRef;
use crate::layout::Symbol;
use crate::transitions::TransitionGraph;

#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleConfig {
    pub length: usize,
    pub samples: usize,
    pub seed: u64,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self { length: 10, samples: 10, seed: 42 }
    }
}

/// Draw `config.samples` sequences as node indices.
///
/// Returns no sequences when `config.length == 0` or when no legal sequence of that
/// length exists.
pub fn sample_walks<G: GraphRef>(
    counter: &mut PathCounter<'_, G>,
    config: SampleConfig,
) -> Result<Vec<Vec<usize>>, CountError> {
    if config.length == 0 {
        return Ok(Vec::new());
    }
    let graph = counter.graph();
    let start_weights = (0..graph.node_count())
        .map(|f| counter.count_from(f, config.length))
        .collect::<Result<Vec<BigUint>, _>>()?;
    let Some(total) = nonzero_total(&start_weights) else {
        return Ok(Vec::new());
    };

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut walks = Vec::with_capacity(config.samples);
    let mut weights: Vec<BigUint> = Vec::new();
    for _ in 0..config.samples {
        let mut walk = Vec::with_capacity(config.length);
        let mut curr = pick_weighted(&mut rng, &start_weights, &total);
        walk.push(curr);
        for remaining in (1..config.length).rev() {
            let succ = graph.successors_ref(curr);
            weights.clear();
            for &c in succ {
                weights.push(counter.count_from(c, remaining)?);
            }
            // The current node has completions, so some successor does too.
            let Some(step_total) = nonzero_total(&weights) else {
                break;
            };
            curr = succ[pick_weighted(&mut rng, &weights, &step_total)];
            walk.push(curr);
        }
        walks.push(walk);
    }
    Ok(walks)
}

/// [`sample_walks`] over a transition graph, as symbols.
pub fn sample_sequences(
    counter: &mut PathCounter<'_, TransitionGraph>,
    config: SampleConfig,
) -> Result<Vec<Vec<Symbol>>, CountError> {
    let graph = counter.graph();
    let walks = sample_walks(counter, config)?;
    Ok(walks.into_iter().map(|w| w.into_iter().map(|u| graph.symbol(u)).collect()).collect())
}

/// Sum of `weights`, or `None` when it is zero.
fn nonzero_total(weights: &[BigUint]) -> Option<BigUint> {
    let total: BigUint = weights.iter().sum();
    (!total.is_zero()).then_some(total)
}

/// Index `i` with probability `weights[i] / total`.
fn pick_weighted<R: Rng>(rng: &mut R, weights: &[BigUint], total: &BigUint) -> usize {
    let mut r = random_below(rng, total);
    for (i, w) in weights.iter().enumerate() {
        if r < *w {
            return i;
        }
        r -= w;
    }
    // `total` is the sum of `weights`, so the loop always returns.
    weights.len() - 1
}

/// Uniform draw from `0..bound`: take `bound.bits()` random bits, retry when the value is
/// out of range. Each attempt succeeds with probability above one half.
fn random_below<R: Rng>(rng: &mut R, bound: &BigUint) -> BigUint {
    let bits = bound.bits();
    let mut bytes = vec![0u8; bits.div_ceil(8) as usize];
    let spare = (bytes.len() as u64 * 8 - bits) as u32;
    loop {
        rng.fill(bytes.as_mut_slice());
        if let Some(top) = bytes.last_mut() {
            *top >>= spare;
        }
        let r = BigUint::from_bytes_le(&bytes);
        if r < *bound {
            return r;
        }
    }
}
