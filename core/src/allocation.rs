//! Allocation planner: requested totals → per-tier integer quotas.
//!
//! RULE: proportions stay fractional (f64) all the way into the floor.
//! Casting a proportion below 1.0 to an integer before multiplying zeroes
//! the quota — a known defect class this module exists to rule out.

use crate::schedule::{DifficultyTier, TierShare};
use crate::types::Topic;
use std::collections::BTreeMap;

/// One tier's integer quota within a topic's allocation.
///
/// Quotas are signed: a hostile or buggy demand value can drive the
/// remainder negative, and the sampler skips negative quotas instead of
/// underflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierQuota {
    pub tier: DifficultyTier,
    pub quota: i64,
}

/// Plan per-topic quotas for one day's schedule.
///
/// For every tier except the last: `quota = floor(total × proportion)`.
/// The last tier takes whatever remains, so quotas always sum exactly to
/// the requested total regardless of rounding. An empty schedule yields
/// no allocation for any topic.
pub fn plan_allocations(
    demand: &BTreeMap<Topic, i64>,
    schedule: &[TierShare],
) -> BTreeMap<Topic, Vec<TierQuota>> {
    let mut allocations = BTreeMap::new();
    if schedule.is_empty() {
        return allocations;
    }

    for (topic, &total) in demand {
        let mut quotas = Vec::with_capacity(schedule.len());
        let mut remaining = total;

        for share in &schedule[..schedule.len() - 1] {
            let quota = (total as f64 * share.proportion).floor() as i64;
            quotas.push(TierQuota {
                tier: share.tier,
                quota,
            });
            remaining -= quota;
        }

        // Last tier absorbs the rounding remainder.
        let last = schedule[schedule.len() - 1];
        quotas.push(TierQuota {
            tier: last.tier,
            quota: remaining,
        });

        allocations.insert(topic.clone(), quotas);
    }

    allocations
}
