//! Projection of raw question records into the public output schema.

use crate::pool::{QuestionRecord, Visuals};
use crate::rng::DailyRng;
use crate::schedule::DifficultyTier;
use crate::shuffle::shuffle_choices;
use crate::types::Topic;
use serde::{Deserialize, Serialize};

/// The text body of a served question: choices as an ordered list,
/// correct answer as a zero-based index into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledBody {
    pub choices: Vec<String>,
    pub question: String,
    pub paragraph: String,
    pub explanation: String,
    pub correct_answer: usize,
}

/// The caller-facing question representation, distinct from the stored
/// one. `topic` is the label the allocation ran under, which may differ
/// from the record's own `domain` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampledQuestion {
    pub id: String,
    pub domain: String,
    pub visuals: Visuals,
    pub question: SampledBody,
    pub difficulty: DifficultyTier,
    pub topic: Topic,
}

/// Resolve a correct-answer letter to its zero-based choice index.
/// Case-insensitive A–D; anything else (empty, out of range, more than
/// one character) is unresolvable.
pub fn letter_to_index(letter: &str) -> Option<usize> {
    match letter.to_ascii_uppercase().as_str() {
        "A" => Some(0),
        "B" => Some(1),
        "C" => Some(2),
        "D" => Some(3),
        _ => None,
    }
}

/// Project one record into the output schema, shuffling its choices.
///
/// POLICY: an unresolvable correct-answer letter defaults to index 0
/// (choice A) with a warning naming the record, so a single bad record
/// never poisons a response. This is the only place the policy applies;
/// [`letter_to_index`] itself reports the raw mapping.
pub fn project(record: &QuestionRecord, topic: &str, rng: &mut DailyRng) -> SampledQuestion {
    let correct = match letter_to_index(&record.question.correct_answer) {
        Some(idx) => idx,
        None => {
            log::warn!(
                "question {}: unresolvable correct answer {:?}, defaulting to choice A",
                record.id,
                record.question.correct_answer
            );
            0
        }
    };

    let mut choices = record.question.choices.to_vec();
    let correct = shuffle_choices(&mut choices, correct, rng);

    SampledQuestion {
        id: record.id.clone(),
        domain: record.domain.clone(),
        visuals: record.visuals.clone(),
        question: SampledBody {
            choices,
            question: record.question.question.clone(),
            paragraph: record.question.paragraph.clone(),
            explanation: record.question.explanation.clone(),
            correct_answer: correct,
        },
        difficulty: record.difficulty,
        topic: topic.to_string(),
    }
}
