use hopcount::{
    brute_force_count, count_all, count_by_start, generate_sequences, sample_walks, GraphRef,
    HopSet, PathCounter, SampleConfig, SequenceGenerator, Symbol, TransitionGraph,
};
use hopcount::{Graph, GridLayout};
use num_bigint::BigUint;
use proptest::prelude::*;

#[derive(Debug, Clone)]
struct AdjListGraph {
    adj: Vec<Vec<usize>>,
}

impl AdjListGraph {
    fn new(mut adj: Vec<Vec<usize>>) -> Self {
        for nbrs in &mut adj {
            nbrs.sort_unstable();
            nbrs.dedup();
        }
        Self { adj }
    }
}

impl Graph for AdjListGraph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }

    fn successors(&self, node: usize) -> Vec<usize> {
        self.adj.get(node).cloned().unwrap_or_default()
    }
}

impl GraphRef for AdjListGraph {
    fn node_count(&self) -> usize {
        self.adj.len()
    }

    fn successors_ref(&self, node: usize) -> &[usize] {
        self.adj.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn assert_walks_follow_edges<G: GraphRef>(g: &G, walks: &[Vec<usize>]) {
    for w in walks {
        for win in w.windows(2) {
            let (u, v) = (win[0], win[1]);
            assert!(g.successors_ref(u).contains(&v), "walk step {u} -> {v} is not an edge");
        }
    }
}

#[test]
fn fast_count_matches_brute_force_up_to_ten() {
    let g = TransitionGraph::keypad();
    let mut pc = PathCounter::new(&g);
    for n in 1..=10 {
        let brute = generate_sequences(&g, n).count();
        assert_eq!(count_all(&mut pc, n).unwrap(), BigUint::from(brute), "length {n}");
    }
}

#[test]
fn canonical_regression_value() {
    let g = TransitionGraph::keypad();
    let mut pc = PathCounter::new(&g);
    assert_eq!(count_all(&mut pc, 10).unwrap(), BigUint::from(1_320_360u32));
    assert_eq!(count_all(&mut pc, 20).unwrap(), BigUint::from(351_855_363_828u64));
    assert_eq!(count_all(&mut pc, 30).unwrap(), BigUint::from(93_754_872_453_481_584u64));
    assert_eq!(
        count_all(&mut pc, 100).unwrap().to_string(),
        "8941268114364389473156211876932278516503335197069791592"
    );
}

#[test]
fn length_two_total_is_edge_count() {
    let g = TransitionGraph::keypad();
    let edges: usize = g.symbols().iter().map(|&s| g.successors_of(s).map_or(0, |v| v.len())).sum();
    let mut pc = PathCounter::new(&g);
    assert_eq!(count_all(&mut pc, 2).unwrap(), BigUint::from(edges));
    assert_eq!(edges, 60);
}

#[test]
fn edge_symbol_contribution_matches_hand_count() {
    // `e` sits in the top-right corner: two hops, to `h` and `n`.
    let g = TransitionGraph::keypad();
    let e = Symbol('e');
    let succ = g.successors_of(e).unwrap();
    assert_eq!(succ, vec![Symbol('h'), Symbol('n')]);

    let mut pc = PathCounter::new(&g);
    let by_start = count_by_start(&mut pc, 3).unwrap();
    let hand: usize = succ.iter().map(|&s| g.successors_of(s).unwrap().len()).sum();
    assert_eq!(by_start[g.index_of(e).unwrap()], BigUint::from(hand));
    assert_eq!(hand, 10);
}

#[test]
fn keypad_layout_from_text_matches_builtin() {
    let text = "abcde\nfghij\nklmno\n.123.\n";
    let layout = GridLayout::parse(text).unwrap();
    let g = TransitionGraph::build(&layout, &HopSet::knight());
    assert_eq!(g, TransitionGraph::keypad());
}

#[test]
fn memo_table_only_grows() {
    let g = TransitionGraph::keypad();
    let mut pc = PathCounter::new(&g);
    let mut last = 0;
    for n in [3, 2, 7, 5, 9, 9, 4] {
        count_all(&mut pc, n).unwrap();
        let len = pc.table().len();
        assert!(len >= last, "table shrank from {last} to {len}");
        last = len;
    }
    assert!(pc.table().keys().all(|(_, _, n)| n >= 2));
}

proptest! {
    // Property: the memoized count equals brute-force enumeration on arbitrary small
    // directed graphs, including ones with self-loops and isolated nodes.
    #[test]
    fn prop_fast_count_matches_brute_force(
        n in 1usize..6,
        adj in prop::collection::vec(prop::collection::vec(0usize..6, 0..4), 1..6),
        length in 1usize..7,
    ) {
        let mut adj2: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (i, nbrs) in adj.into_iter().take(n).enumerate() {
            adj2[i] = nbrs.into_iter().map(|x| x % n).collect();
        }
        let g = AdjListGraph::new(adj2);
        let mut pc = PathCounter::new(&g);
        let brute = BigUint::from(brute_force_count(&g, length));
        prop_assert_eq!(count_all(&mut pc, length).unwrap(), brute);

        for f in 0..n {
            for l in 0..n {
                let brute = SequenceGenerator::new(&g, length)
                    .filter(|w| w[0] == f && w[length - 1] == l)
                    .count();
                prop_assert_eq!(pc.count(f, l, length).unwrap(), BigUint::from(brute));
            }
        }
    }

    // Property: samples have the requested length and follow edges.
    #[test]
    fn prop_samples_follow_edges(
        n in 1usize..8,
        adj in prop::collection::vec(prop::collection::vec(0usize..8, 0..8), 1..8),
        length in 1usize..12,
        seed in any::<u64>(),
    ) {
        let mut adj2: Vec<Vec<usize>> = vec![Vec::new(); n];
        for (i, nbrs) in adj.into_iter().take(n).enumerate() {
            adj2[i] = nbrs.into_iter().map(|x| x % n).collect();
        }
        let g = AdjListGraph::new(adj2);
        let mut pc = PathCounter::new(&g);
        let cfg = SampleConfig { length, samples: 4, seed };
        let walks = sample_walks(&mut pc, cfg).unwrap();
        prop_assert!(walks.is_empty() || walks.len() == 4);
        prop_assert!(walks.iter().all(|w| w.len() == length));
        assert_walks_follow_edges(&g, &walks);
    }

    // Property: hops made of knight offsets give a symmetric graph on any rectangular
    // layout, whatever cells are left empty.
    #[test]
    fn prop_knight_graph_is_symmetric(
        width in 1usize..7,
        height in 1usize..7,
        occupied in prop::collection::vec(any::<bool>(), 36),
    ) {
        let alphabet: Vec<char> = ('A'..='Z').chain('a'..='z').collect();
        let mut text = String::new();
        for row in 0..height {
            for column in 0..width {
                let i = row * width + column;
                text.push(if occupied[i] { alphabet[i] } else { '.' });
            }
            text.push('\n');
        }
        let layout = GridLayout::parse(&text).unwrap();
        prop_assert_eq!((layout.width(), layout.height()), (width, height));
        let g = TransitionGraph::build(&layout, &HopSet::knight());
        prop_assert!(g.is_symmetric());
        for &f in g.symbols() {
            for &l in g.symbols() {
                prop_assert_eq!(g.contains(f, l), g.contains(l, f), "{} -> {}", f, l);
            }
        }
    }

    // Property: querying twice yields the same value and the second query is a hit.
    #[test]
    fn prop_repeat_query_is_cached(f in 0usize..18, l in 0usize..18, length in 2usize..25) {
        let g = TransitionGraph::keypad();
        let mut pc = PathCounter::new(&g);
        let a = pc.count(f, l, length).unwrap();
        let before = pc.stats();
        let b = pc.count(f, l, length).unwrap();
        prop_assert_eq!(a, b);
        prop_assert_eq!(pc.stats().hits, before.hits + 1);
        prop_assert_eq!(pc.stats().computed, before.computed);
    }
}

#[cfg(feature = "petgraph")]
#[test]
fn petgraph_graph_can_be_counted() {
    use petgraph::graph::UnGraph;

    // Path x - y - z.
    let mut pg: UnGraph<(), ()> = UnGraph::new_undirected();
    let x = pg.add_node(());
    let y = pg.add_node(());
    let z = pg.add_node(());
    pg.add_edge(x, y, ());
    pg.add_edge(y, z, ());

    let g = TransitionGraph::from_graph(&pg, vec![Symbol('x'), Symbol('y'), Symbol('z')]).unwrap();
    assert!(g.is_symmetric());
    let mut pc = PathCounter::new(&g);
    // xyx xyz yxy yzy zyx zyz
    assert_eq!(count_all(&mut pc, 3).unwrap(), BigUint::from(6u32));
    assert_eq!(count_all(&mut pc, 3).unwrap(), BigUint::from(brute_force_count(&g, 3)));
}
