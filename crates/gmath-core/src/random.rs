//! Uniform random values for randomizing containers.
//!
//! Two entry points:
//!
//! - [`Random`] - a caller-owned generator. Seed it with
//!   [`Random::from_seed`] for reproducible sequences (tests, replays).
//! - [`uniform_random`] - a process-wide generator created on first use
//!   and never reseeded.
//!
//! # Shared state
//!
//! The process-wide generator is initialized exactly once through a
//! [`OnceLock`] and every draw takes a [`Mutex`], so concurrent callers are
//! safe but serialized. Hot loops and deterministic code should own a
//! [`Random`] instead.
//!
//! # Example
//!
//! ```rust
//! use gmath_core::Random;
//!
//! let mut a = Random::from_seed(7);
//! let mut b = Random::from_seed(7);
//! assert_eq!(a.uniform(0.0f32, 1.0), b.uniform(0.0f32, 1.0));
//! ```

use crate::scalar::Scalar;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

static GLOBAL: OnceLock<Mutex<Random>> = OnceLock::new();

/// Seedable uniform generator.
#[derive(Debug, Clone)]
pub struct Random {
    rng: StdRng,
    seed: u64,
}

impl Random {
    /// Creates a generator with a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from the OS entropy source XOR the wall
    /// clock (seconds plus microseconds since the Unix epoch).
    pub fn from_entropy() -> Self {
        Self::from_seed(u64::from(entropy_seed()))
    }

    /// Seed this generator was created with.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Raw 32-bit draw.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    /// Uniform value in `[min, max]` (both ends reachable).
    ///
    /// # Formula
    ///
    /// `min + r / (u32::MAX / (max - min))` for a raw draw `r`, evaluated in
    /// `f64` and cast to `T` (truncating for integers, so an integer `max`
    /// is hit only when `r == u32::MAX`).
    pub fn uniform<T: Scalar>(&mut self, min: T, max: T) -> T {
        let r = self.next_u32() as f64;
        let (min, max) = (min.as_f64(), max.as_f64());
        T::from_f64_lossy(min + r / (u32::MAX as f64 / (max - min)))
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::from_entropy()
    }
}

fn entropy_seed() -> u32 {
    let mut device = [0u8; 4];
    if let Err(err) = OsRng.try_fill_bytes(&mut device) {
        warn!(%err, "OS entropy unavailable, seeding from the clock only");
    }
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let clock = (now.as_secs() as u32).wrapping_add(now.as_micros() as u32);
    u32::from_ne_bytes(device) ^ clock
}

/// Uniform value in `[min, max]` from the process-wide generator.
///
/// The generator is seeded with [`Random::from_entropy`] on the first call.
///
/// # Example
///
/// ```rust
/// use gmath_core::uniform_random;
///
/// let v = uniform_random(-1.0f64, 1.0);
/// assert!((-1.0..=1.0).contains(&v));
/// ```
pub fn uniform_random<T: Scalar>(min: T, max: T) -> T {
    let generator = GLOBAL.get_or_init(|| {
        let random = Random::from_entropy();
        debug!(seed = random.seed(), "Seeded process-wide uniform generator");
        Mutex::new(random)
    });
    // The generator holds no invariants a panicking holder could break.
    let mut guard = generator.lock().unwrap_or_else(PoisonError::into_inner);
    guard.uniform(min, max)
}
