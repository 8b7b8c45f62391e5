//! Shared random source
//!
//! Every field generator draws from a [`FakeSource`]. The server builds one at
//! startup and hands it to the record assembler; [`FakeSource::shared`] is the
//! process-wide instance, created on first use behind a thread-safe lazy
//! initializer and returned unchanged for the lifetime of the process.
//!
//! Draws go through [`FakeSource::with_rng`], which holds the internal lock for
//! the duration of the closure, so concurrent requests never interleave their
//! draws on the same generator state.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::{Arc, Mutex, PoisonError};

static SHARED: Lazy<Arc<FakeSource>> = Lazy::new(|| Arc::new(FakeSource::from_entropy()));

/// A pseudo-random generator shared between field generators
#[derive(Debug)]
pub struct FakeSource {
    rng: Mutex<StdRng>,
    seed: Option<u64>,
}

impl FakeSource {
    /// Returns the process-wide source, constructing it on the first call
    pub fn shared() -> Arc<Self> {
        Arc::clone(&SHARED)
    }

    /// Creates a source seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
            seed: None,
        }
    }

    /// Creates a deterministic source; equal seeds yield equal draws
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            seed: Some(seed),
        }
    }

    /// Returns the seed this source was built from, if any
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Runs `f` with exclusive access to the underlying generator
    ///
    /// A lock poisoned by a panicking caller is recovered.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut rng)
    }
}

impl Default for FakeSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
