//! # Entropy
//!
//! Random source behind the simulated latency and error draws. The service
//! holds one as `Arc<dyn Entropy>` so tests and demos can pin the values.
//!
//! ## Example
//!
//! ```rust
//! use sample_core::entropy::{Entropy, FixedEntropy, ThreadEntropy};
//!
//! // Anywhere in [0, 100).
//! let jitter = ThreadEntropy.jitter_ms(100);
//! assert!(jitter < 100);
//!
//! // Always 7ms of jitter and a draw of 0.5.
//! let fixed = FixedEntropy::new(7, 0.5);
//! assert_eq!(fixed.jitter_ms(100), 7);
//! assert_eq!(fixed.unit(), 0.5);
//! ```

use std::sync::Mutex;

use rand::{rngs::StdRng, Rng, SeedableRng};

/// Source of the two random draws made per request.
pub trait Entropy: Send + Sync {
    /// Uniform integer in `[0, bound)`. A zero bound yields 0.
    fn jitter_ms(&self, bound: u64) -> u64;

    /// Uniform float in `[0, 1)`.
    fn unit(&self) -> f64;
}

/// Thread-local RNG, seeded from the OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadEntropy;

impl Entropy for ThreadEntropy {
    fn jitter_ms(&self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }

    fn unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Reproducible stream from a fixed seed.
///
/// Draws are serialized through a mutex, so concurrent requests still see
/// one sequence, just in arrival order.
#[derive(Debug)]
pub struct SeededEntropy {
    rng: Mutex<StdRng>,
}

impl SeededEntropy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        // a poisoned lock still holds a usable rng
        let mut guard = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut *guard)
    }
}

impl Entropy for SeededEntropy {
    fn jitter_ms(&self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.with_rng(|rng| rng.gen_range(0..bound))
    }

    fn unit(&self) -> f64 {
        self.with_rng(|rng| rng.gen::<f64>())
    }
}

/// Constant draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedEntropy {
    jitter_ms: u64,
    unit: f64,
}

impl FixedEntropy {
    /// `jitter_ms` is clamped below the requested bound and `unit` into
    /// `[0, 1)` when drawn.
    pub fn new(jitter_ms: u64, unit: f64) -> Self {
        Self { jitter_ms, unit }
    }

    /// No jitter, and a draw that passes every error rate below 1.
    pub fn always_ok() -> Self {
        Self::new(0, 0.999_999)
    }

    /// No jitter, and a draw that fails every error rate above 0.
    pub fn always_fail() -> Self {
        Self::new(0, 0.0)
    }
}

impl Entropy for FixedEntropy {
    fn jitter_ms(&self, bound: u64) -> u64 {
        self.jitter_ms.min(bound.saturating_sub(1))
    }

    fn unit(&self) -> f64 {
        self.unit.clamp(0.0, 0.999_999)
    }
}
