//! The selection pass — the heart of the daily quiz service.
//!
//! PROCESSING ORDER (fixed, documented, never reordered):
//!   1. Derive the day's seed and construct the one DailyRng for the call.
//!   2. Plan per-topic quotas from the weekday schedule.
//!   3. Topics in lexicographic order; within a topic, tiers in schedule
//!      order; within a tier, questions in draw order.
//!
//! RULES:
//!   - All draws share the single per-call generator, advanced
//!     sequentially. Reordering topics or tiers changes which values each
//!     draw consumes and silently breaks same-day reproducibility, so
//!     nothing here may be parallelized.
//!   - Scarcity degrades, never fails: a short bucket yields what it has
//!     plus a warning. A negative quota skips that tier only.

use crate::allocation::plan_allocations;
use crate::bucket::group_by_tier;
use crate::pool::QuestionPool;
use crate::project::{project, SampledQuestion};
use crate::rng::DailyRng;
use crate::schedule::schedule_for;
use crate::types::Topic;
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Draw `desired` distinct indices from `[0, len)`, in draw order.
///
/// One capability, two strategies, chosen by draw density so callers are
/// insulated from the trade-off:
///   - sparse (desired ≤ len/2): rejection — draw a uniform index, retry
///     on collision. Expected retries stay low at this density.
///   - dense: partial swap-based Fisher–Yates over a scratch index table,
///     which is linear regardless of density. Rejection retry counts grow
///     superlinearly as desired approaches len.
///
/// Both strategies yield a uniformly random distinct subset; they are not
/// bit-compatible orderings of each other.
pub fn draw_distinct(rng: &mut DailyRng, len: usize, desired: usize) -> Vec<usize> {
    let desired = desired.min(len);
    if desired == 0 {
        return Vec::new();
    }

    if desired <= len / 2 {
        let mut chosen = vec![false; len];
        let mut out = Vec::with_capacity(desired);
        while out.len() < desired {
            let idx = rng.index_below(len);
            if !chosen[idx] {
                chosen[idx] = true;
                out.push(idx);
            }
        }
        out
    } else {
        log::debug!("dense draw ({desired} of {len}), using swap-based strategy");
        let mut indices: Vec<usize> = (0..len).collect();
        for i in 0..desired {
            let j = i + rng.index_below(len - i);
            indices.swap(i, j);
        }
        indices.truncate(desired);
        indices
    }
}

/// Run one full selection pass: (reference date, topic demand, pool) →
/// topic → ordered question list.
///
/// Pure and synchronous; the date must be supplied by the caller, never
/// read from a clock here, so identical inputs always reproduce identical
/// output. Topics demanded but absent from the pool are omitted; pool
/// topics without demand are skipped.
pub fn select_daily(
    pool: &QuestionPool,
    demand: &BTreeMap<Topic, i64>,
    date: NaiveDate,
) -> BTreeMap<Topic, Vec<SampledQuestion>> {
    let mut rng = DailyRng::for_date(date);
    let schedule = schedule_for(date.weekday());
    let allocations = plan_allocations(demand, &schedule);

    let mut selected = BTreeMap::new();

    // BTreeMap iteration gives the lexicographic topic order the shared
    // generator depends on.
    for (topic, questions) in &pool.topics {
        let Some(quotas) = allocations.get(topic) else {
            continue;
        };

        let buckets = group_by_tier(questions, quotas);
        let total: i64 = quotas.iter().map(|q| q.quota.max(0)).sum();
        let mut picks: Vec<SampledQuestion> = Vec::with_capacity(total as usize);

        for tier_quota in quotas {
            if tier_quota.quota < 0 {
                log::warn!(
                    "topic={topic} tier={}: negative quota {}, skipping tier",
                    tier_quota.tier.label(),
                    tier_quota.quota
                );
                continue;
            }
            let quota = tier_quota.quota as usize;

            let bucket = buckets
                .get(&tier_quota.tier)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            if quota > bucket.len() {
                log::warn!(
                    "topic={topic} tier={}: only {} of {quota} requested questions available",
                    tier_quota.tier.label(),
                    bucket.len()
                );
            }

            for idx in draw_distinct(&mut rng, bucket.len(), quota) {
                picks.push(project(bucket[idx], topic, &mut rng));
            }
        }

        selected.insert(topic.clone(), picks);
    }

    selected
}
