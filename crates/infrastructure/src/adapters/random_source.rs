//! Random sources for injection draws

use std::sync::atomic::{AtomicUsize, Ordering};

use application::ports::RandomSourcePort;
use parking_lot::Mutex;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Draws from the thread-local generator
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl RandomSourcePort for ThreadRandomSource {
    fn next_f64(&self) -> f64 {
        rand::rng().random()
    }
}

/// Reproducible draws from a seeded generator
///
/// Two sources created with the same seed yield the same sequence.
#[derive(Debug)]
pub struct SeededRandomSource {
    seed: u64,
    rng: Mutex<StdRng>,
}

impl SeededRandomSource {
    /// Create a source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Seed this source was created with
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSourcePort for SeededRandomSource {
    fn next_f64(&self) -> f64 {
        self.rng.lock().random()
    }
}

/// Replays a fixed list of draws, starting over after the last one
///
/// An empty list always yields `0.0`.
#[derive(Debug)]
pub struct SequenceRandomSource {
    draws: Vec<f64>,
    position: AtomicUsize,
}

impl SequenceRandomSource {
    /// Create a source replaying `draws`
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            position: AtomicUsize::new(0),
        }
    }
}

impl RandomSourcePort for SequenceRandomSource {
    fn next_f64(&self) -> f64 {
        if self.draws.is_empty() {
            return 0.0;
        }
        let index = self.position.fetch_add(1, Ordering::Relaxed) % self.draws.len();
        self.draws[index]
    }
}
