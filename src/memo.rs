//! Memo table for path counts.
//!
//! Maps `(start, end, length)` to the number of legal sequences. The table only grows:
//! entries are added, never removed, and rewriting an entry must store the value it
//! already holds.

use std::collections::HashMap;

use num_bigint::BigUint;

/// `(start, end, length)`, with nodes as graph indices.
pub type MemoKey = (usize, usize, usize);

/// Lookup counters, for observing that repeated queries do no work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Queries answered straight from the table.
    pub hits: u64,
    /// Queries that had to fill the table first.
    pub misses: u64,
    /// Entries computed, including rewrites of existing entries.
    pub computed: u64,
}

#[derive(Debug, Clone, Default)]
pub struct MemoTable {
    entries: HashMap<MemoKey, BigUint>,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: MemoKey) -> Option<&BigUint> {
        self.entries.get(&key)
    }

    /// The entry for `key`, which the caller knows is present.
    ///
    /// # Panics
    ///
    /// If `key` is missing: the fill order guarantees it, so a miss means the table is
    /// inconsistent.
    pub fn filled(&self, key: MemoKey) -> &BigUint {
        match self.entries.get(&key) {
            Some(count) => count,
            None => panic!("memo entry {key:?} missing"),
        }
    }

    pub fn contains(&self, key: MemoKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Record a count.
    ///
    /// # Panics
    ///
    /// If `length < 2` (those are answered without the table), or if the key already
    /// holds a different value.
    pub fn insert(&mut self, key: MemoKey, count: BigUint) {
        assert!(key.2 >= 2, "memo entries start at length 2, got {}", key.2);
        if let Some(prev) = self.entries.get(&key) {
            assert_eq!(*prev, count, "memo entry {key:?} changed from {prev} to {count}");
            return;
        }
        self.entries.insert(key, count);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest length with at least one entry, or `None` when empty.
    pub fn max_length(&self) -> Option<usize> {
        self.entries.keys().map(|&(_, _, n)| n).max()
    }

    pub fn keys(&self) -> impl Iterator<Item = MemoKey> + '_ {
        self.entries.keys().copied()
    }
}
