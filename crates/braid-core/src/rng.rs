//! Deterministic RNG wrapper used by the sampler.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Sequential RNG handle shared by every draw the sampler makes.
///
/// The handle is a thin wrapper around `StdRng`. Move selection, index
/// selection and per-move parameters all pull from the same handle in a fixed
/// order, so a given seed reproduces a run exactly. Handles created with
/// [`RngHandle::from_entropy`] remember no seed and are not reproducible.
#[derive(Debug, Clone)]
pub struct RngHandle {
    rng: StdRng,
    seed: Option<u64>,
}

impl RngHandle {
    /// Creates a new RNG handle from a master seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a handle seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Seed the handle was created from, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RngCore for RngHandle {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}
