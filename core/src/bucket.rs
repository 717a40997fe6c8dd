//! Topic question index: one topic's pool, bucketed by difficulty tier.

use crate::allocation::TierQuota;
use crate::pool::QuestionRecord;
use crate::schedule::DifficultyTier;
use std::collections::HashMap;

/// Group a topic's questions by tier, materializing only tiers with a
/// positive quota. Tiers nobody asked for are never collected, which
/// bounds memory on large pools. Buckets hold references into the pool —
/// the pool itself is never reordered or copied, so it stays safe to
/// share across concurrent calls.
pub fn group_by_tier<'a>(
    questions: &'a [QuestionRecord],
    quotas: &[TierQuota],
) -> HashMap<DifficultyTier, Vec<&'a QuestionRecord>> {
    let wanted: Vec<DifficultyTier> = quotas
        .iter()
        .filter(|q| q.quota > 0)
        .map(|q| q.tier)
        .collect();

    let mut buckets: HashMap<DifficultyTier, Vec<&'a QuestionRecord>> = HashMap::new();
    for question in questions {
        if wanted.contains(&question.difficulty) {
            buckets.entry(question.difficulty).or_default().push(question);
        }
    }
    buckets
}
