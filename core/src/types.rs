//! Shared primitive types used across the crate.

/// A named subject category, e.g. "math". Used both to group the input
/// pool and to express per-topic demand.
pub type Topic = String;

/// A date-derived seed for the per-call random generator.
pub type Seed = u64;
