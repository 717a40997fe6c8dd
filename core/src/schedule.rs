//! Weekday difficulty schedule.
//!
//! Pure mapping from weekday to an ordered list of (tier, proportion)
//! pairs summing to 1.0. The order is significant: the LAST entry absorbs
//! the rounding remainder in the allocation planner, so reordering a
//! day's list changes which tier gets the slack.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// The fixed difficulty tier set. Serde spelling matches the pool file's
/// difficulty tags, so an unknown tag fails at load time, not mid-selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
}

impl DifficultyTier {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

/// One entry of a weekday's schedule: a tier and its share of the total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierShare {
    pub tier: DifficultyTier,
    pub proportion: f64,
}

impl TierShare {
    const fn new(tier: DifficultyTier, proportion: f64) -> Self {
        Self { tier, proportion }
    }
}

/// The difficulty mix for one weekday.
///
/// Sunday gets the uniform three-way fallback rather than an empty
/// schedule, so every day of the week produces an allocation. The same
/// split would cover any future tier-less day.
pub fn schedule_for(day: Weekday) -> Vec<TierShare> {
    use DifficultyTier::*;
    match day {
        Weekday::Mon => vec![TierShare::new(Easy, 1.0)],
        Weekday::Tue => vec![TierShare::new(Easy, 0.5), TierShare::new(Medium, 0.5)],
        Weekday::Wed => vec![TierShare::new(Medium, 1.0)],
        Weekday::Thu => vec![TierShare::new(Medium, 0.7), TierShare::new(Hard, 0.3)],
        Weekday::Fri => vec![TierShare::new(Medium, 0.5), TierShare::new(Hard, 0.5)],
        Weekday::Sat => vec![TierShare::new(Hard, 1.0)],
        Weekday::Sun => vec![
            TierShare::new(Easy, 0.33),
            TierShare::new(Medium, 0.34),
            TierShare::new(Hard, 0.33),
        ],
    }
}
