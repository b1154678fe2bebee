// File: src/random.rs
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Source of randomness for word selection. Injected so sessions can be
/// driven deterministically.
pub trait RandomSource {
    /// Returns an index in `0..len`. Only called with `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Picks one element uniformly through `rng`, `None` for an empty slice.
pub fn pick_random<'a, T>(rng: &mut dyn RandomSource, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let idx = rng.next_index(items.len());
    items.get(idx.min(items.len() - 1))
}

/// Production source backed by `StdRng`.
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn from_entropy() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Seeded when a seed is configured, entropy otherwise.
    pub fn from_config(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for StdRandom {
    fn next_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed list of indices (wrapped into range), then repeats the last one.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    queue: VecDeque<usize>,
    last: usize,
}

impl SequenceSource {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { queue: indices.into(), last: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next_index(&mut self, len: usize) -> usize {
        if let Some(next) = self.queue.pop_front() {
            self.last = next;
        }
        self.last % len
    }
}
