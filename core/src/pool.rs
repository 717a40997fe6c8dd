//! Question pool loading and the raw question model.
//!
//! RULE: only this module reads the pool file. A pool that fails to parse
//! — including an unknown difficulty tag on any record — errors here,
//! before selection ever runs. Selection assumes a structurally valid
//! pool and has no error path of its own.

use crate::error::QuizResult;
use crate::schedule::DifficultyTier;
use crate::types::Topic;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// The four answer choices of a record, keyed by letter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChoiceSet {
    #[serde(rename = "A")]
    pub a: String,
    #[serde(rename = "B")]
    pub b: String,
    #[serde(rename = "C")]
    pub c: String,
    #[serde(rename = "D")]
    pub d: String,
}

impl ChoiceSet {
    /// The choices in fixed A,B,C,D order — the order letter indices
    /// refer to, before any shuffling.
    pub fn to_vec(&self) -> Vec<String> {
        vec![self.a.clone(), self.b.clone(), self.c.clone(), self.d.clone()]
    }
}

/// Optional visual payload attached to a question (figures, graphs).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Visuals {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub svg_content: String,
}

/// The text body of a raw question record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBody {
    pub choices: ChoiceSet,
    pub question: String,
    #[serde(default)]
    pub paragraph: String,
    #[serde(default)]
    pub explanation: String,
    pub correct_answer: String,
}

/// One immutable question as stored in the pool file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub id: String,
    pub domain: String,
    #[serde(default)]
    pub visuals: Visuals,
    pub question: QuestionBody,
    pub difficulty: DifficultyTier,
}

/// The full question pool: topic → ordered question list.
///
/// Loaded once by the caller and passed by reference into every selection
/// call; no component mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionPool {
    pub topics: BTreeMap<Topic, Vec<QuestionRecord>>,
}

impl QuestionPool {
    pub fn load(path: impl AsRef<Path>) -> QuizResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> QuizResult<Self> {
        let pool = serde_json::from_str(raw)?;
        Ok(pool)
    }

    pub fn question_count(&self) -> usize {
        self.topics.values().map(Vec::len).sum()
    }

    /// Per-topic, per-tier counts for the stats report.
    pub fn stats(&self) -> PoolStats {
        let mut per_topic = BTreeMap::new();
        for (topic, questions) in &self.topics {
            let mut counts = TierCounts::default();
            for q in questions {
                match q.difficulty {
                    DifficultyTier::Easy => counts.easy += 1,
                    DifficultyTier::Medium => counts.medium += 1,
                    DifficultyTier::Hard => counts.hard += 1,
                }
            }
            per_topic.insert(topic.clone(), counts);
        }
        PoolStats { per_topic }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub easy: usize,
    pub medium: usize,
    pub hard: usize,
}

impl TierCounts {
    pub fn total(&self) -> usize {
        self.easy + self.medium + self.hard
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    pub per_topic: BTreeMap<Topic, TierCounts>,
}
