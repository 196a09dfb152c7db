//! # Entropy Sources
//!
//! `RandomSource` implementations backed by `rand`. The core crate owns
//! the trait and stays entropy-free; this module is where randomness
//! actually enters the process. `--seed` selects the seeded variant for
//! reproducible runs.

use qvault_core::{ObjectKind, RandomSource};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

fn kind_from<R: Rng>(rng: &mut R) -> ObjectKind {
    ObjectKind::ALL[rng.random_range(0..ObjectKind::ALL.len())]
}

fn stability_from<R: Rng>(rng: &mut R) -> f64 {
    // Integer steps, 50..=100 inclusive, matching the spawn envelope.
    f64::from(rng.random_range(50u8..=100))
}

/// OS-entropy source for normal interactive runs.
#[derive(Debug, Default)]
pub struct ThreadEntropy(ThreadRng);

impl RandomSource for ThreadEntropy {
    fn pick_kind(&mut self) -> ObjectKind {
        kind_from(&mut self.0)
    }

    fn initial_stability(&mut self) -> f64 {
        stability_from(&mut self.0)
    }
}

/// Seeded source for reproducible runs (`--seed`).
#[derive(Debug)]
pub struct SeededEntropy(StdRng);

impl SeededEntropy {
    /// Build a deterministic source from a 64-bit seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededEntropy {
    fn pick_kind(&mut self) -> ObjectKind {
        kind_from(&mut self.0)
    }

    fn initial_stability(&mut self) -> f64 {
        stability_from(&mut self.0)
    }
}

// =============================================================================
// TESTS
// =============================================================================
