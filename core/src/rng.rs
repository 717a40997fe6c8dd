//! Deterministic random number generation.
//!
//! RULE: Nothing in the selection path may call any platform RNG.
//! All randomness flows through one DailyRng instance, constructed
//! fresh per call from the call's reference date. This means:
//!   - Every request made on the same calendar day sees the same stream.
//!   - Concurrent calls never share a generator; each call owns its own.
//!
//! Not security-sensitive — the seed is purely a reproducibility mechanism.

use crate::types::Seed;
use chrono::{Datelike, NaiveDate};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// Derive the day-stable seed: `year*10000 + month*100 + day`.
///
/// Identical date ⇒ identical seed ⇒ identical generator stream. Distinct
/// dates collide only across implausible year ranges, which is acceptable.
pub fn derive_seed(date: NaiveDate) -> Seed {
    let y = date.year() as i64;
    let m = date.month() as i64;
    let d = date.day() as i64;
    (y * 10_000 + m * 100 + d) as Seed
}

/// The single deterministic RNG for one selection call.
pub struct DailyRng {
    inner: Pcg64Mcg,
}

impl DailyRng {
    /// Construct the generator for one call from its reference date.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::from_seed_value(derive_seed(date))
    }

    /// Construct from a raw seed. Used by tests that pin streams directly.
    pub fn from_seed_value(seed: Seed) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Draw a raw u64 (full range).
    pub fn next_u64(&mut self) -> u64 {
        use rand::RngCore;
        self.inner.next_u64()
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        let bits = self.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Roll a uniform index in [0, n).
    pub fn index_below(&mut self, n: usize) -> usize {
        assert!(n > 0, "n must be > 0");
        (self.next_u64() % n as u64) as usize
    }
}
