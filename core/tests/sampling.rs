//! Subset sampler tests: distinct draws, scarcity degradation, and the
//! day-schedule scenarios.

use chrono::NaiveDate;
use dailyquiz_core::pool::{ChoiceSet, QuestionBody, QuestionPool, QuestionRecord, Visuals};
use dailyquiz_core::rng::DailyRng;
use dailyquiz_core::sampler::draw_distinct;
use dailyquiz_core::schedule::DifficultyTier;
use dailyquiz_core::select_daily;
use std::collections::{BTreeMap, HashSet};

fn question(id: &str, difficulty: DifficultyTier) -> QuestionRecord {
    QuestionRecord {
        id: id.to_string(),
        domain: "Algebra".to_string(),
        visuals: Visuals::default(),
        question: QuestionBody {
            choices: ChoiceSet {
                a: "alpha".into(),
                b: "bravo".into(),
                c: "charlie".into(),
                d: "delta".into(),
            },
            question: format!("What is {id}?"),
            paragraph: String::new(),
            explanation: String::new(),
            correct_answer: "A".to_string(),
        },
        difficulty,
    }
}

fn pool_of(topic: &str, questions: Vec<QuestionRecord>) -> QuestionPool {
    let mut topics = BTreeMap::new();
    topics.insert(topic.to_string(), questions);
    QuestionPool { topics }
}

fn demand_of(topic: &str, total: i64) -> BTreeMap<String, i64> {
    let mut demand = BTreeMap::new();
    demand.insert(topic.to_string(), total);
    demand
}

/// Monday (Easy 1.0), demand 5, pool of 10 Easy questions: exactly 5
/// results, all Easy, all distinct.
#[test]
fn monday_draws_five_easy_from_ten() {
    let questions = (0..10)
        .map(|i| question(&format!("q{i}"), DifficultyTier::Easy))
        .collect();
    let pool = pool_of("math", questions);
    let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();

    let selected = select_daily(&pool, &demand_of("math", 5), monday);

    let picks = &selected["math"];
    assert_eq!(picks.len(), 5);
    assert!(picks.iter().all(|q| q.difficulty == DifficultyTier::Easy));
    let ids: HashSet<&str> = picks.iter().map(|q| q.id.as_str()).collect();
    assert_eq!(ids.len(), 5, "drew a duplicate question");
}

/// Wednesday (Medium 1.0), demand 4 but only 2 Medium questions in the
/// pool: the call degrades to 2 results and completes without error.
#[test]
fn short_bucket_degrades_instead_of_failing() {
    let questions = vec![
        question("m1", DifficultyTier::Medium),
        question("m2", DifficultyTier::Medium),
    ];
    let pool = pool_of("math", questions);
    let wednesday = NaiveDate::from_ymd_opt(2024, 3, 6).unwrap();

    let selected = select_daily(&pool, &demand_of("math", 4), wednesday);

    assert_eq!(selected["math"].len(), 2, "should return all available questions");
}

/// Thursday splits 70/30 Medium/Hard, and tiers come out in schedule
/// order: the 7 Medium picks before the 3 Hard picks.
#[test]
fn tiers_emit_in_schedule_order() {
    let mut questions = Vec::new();
    for i in 0..10 {
        questions.push(question(&format!("med-{i}"), DifficultyTier::Medium));
        questions.push(question(&format!("hard-{i}"), DifficultyTier::Hard));
    }
    let pool = pool_of("math", questions);
    let thursday = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

    let selected = select_daily(&pool, &demand_of("math", 10), thursday);

    let picks = &selected["math"];
    assert_eq!(picks.len(), 10);
    assert!(picks[..7].iter().all(|q| q.difficulty == DifficultyTier::Medium));
    assert!(picks[7..].iter().all(|q| q.difficulty == DifficultyTier::Hard));
}

/// Pool topics without demand are skipped; demanded topics missing from
/// the pool are omitted from the output rather than erroring.
#[test]
fn only_demanded_pool_topics_appear() {
    let mut topics = BTreeMap::new();
    topics.insert(
        "math".to_string(),
        vec![question("m1", DifficultyTier::Easy)],
    );
    topics.insert(
        "english".to_string(),
        vec![question("e1", DifficultyTier::Easy)],
    );
    let pool = QuestionPool { topics };

    let mut demand = BTreeMap::new();
    demand.insert("math".to_string(), 1);
    demand.insert("history".to_string(), 3); // not in the pool
    let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();

    let selected = select_daily(&pool, &demand, monday);

    assert!(selected.contains_key("math"));
    assert!(!selected.contains_key("english"), "undemanded topic leaked");
    assert!(!selected.contains_key("history"), "missing topic fabricated");
}

/// Sparse draws (rejection strategy): distinct, in range, right count.
#[test]
fn sparse_draw_is_distinct_and_in_range() {
    let mut rng = DailyRng::from_seed_value(20_240_304);
    let drawn = draw_distinct(&mut rng, 100, 10);

    assert_eq!(drawn.len(), 10);
    assert!(drawn.iter().all(|&i| i < 100));
    let unique: HashSet<usize> = drawn.iter().copied().collect();
    assert_eq!(unique.len(), 10, "sparse draw repeated an index");
}

/// Dense draws (swap strategy): same guarantees when desired is close to
/// the bucket size.
#[test]
fn dense_draw_is_distinct_and_in_range() {
    let mut rng = DailyRng::from_seed_value(20_240_304);
    let drawn = draw_distinct(&mut rng, 10, 9);

    assert_eq!(drawn.len(), 9);
    let unique: HashSet<usize> = drawn.iter().copied().collect();
    assert_eq!(unique.len(), 9, "dense draw repeated an index");
}

/// Drawing everything returns each index exactly once.
#[test]
fn full_draw_covers_the_whole_bucket() {
    let mut rng = DailyRng::from_seed_value(7);
    let drawn = draw_distinct(&mut rng, 8, 8);

    let unique: HashSet<usize> = drawn.iter().copied().collect();
    assert_eq!(unique, (0..8).collect::<HashSet<usize>>());
}

/// Degenerate draws: nothing wanted, or nothing to draw from. The desired
/// count is clamped to the bucket size.
#[test]
fn degenerate_draws_are_empty_or_clamped() {
    let mut rng = DailyRng::from_seed_value(7);
    assert!(draw_distinct(&mut rng, 10, 0).is_empty());
    assert!(draw_distinct(&mut rng, 0, 5).is_empty());
    assert_eq!(draw_distinct(&mut rng, 3, 50).len(), 3);
}
