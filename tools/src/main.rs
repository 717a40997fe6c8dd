//! quiz-runner: headless daily selection runner.
//!
//! Usage:
//!   quiz-runner --pool OpenSAT.json --date 2024-03-15
//!   quiz-runner --pool OpenSAT.json --topic math=5 --topic english=5 --pretty
//!   quiz-runner --pool OpenSAT.json --stats
//!
//! Prints the selection (or pool stats) as JSON on stdout; everything
//! else goes through the logger. This is the only place the wall clock
//! is read — the core takes the date as an argument.

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use dailyquiz_core::{config::DemandConfig, pool::QuestionPool, select_daily};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let pool_path = str_arg(&args, "--pool", "OpenSAT.json");
    let config_path = args.windows(2).find(|w| w[0] == "--config").map(|w| w[1].clone());
    let stats_mode = args.iter().any(|a| a == "--stats");
    let pretty = args.iter().any(|a| a == "--pretty");

    let date = match args.windows(2).find(|w| w[0] == "--date") {
        Some(w) => NaiveDate::parse_from_str(&w[1], "%Y-%m-%d")
            .context("--date must be YYYY-MM-DD")?,
        None => Local::now().date_naive(),
    };

    let pool = QuestionPool::load(pool_path)
        .with_context(|| format!("loading question pool from {pool_path}"))?;
    log::info!(
        "pool loaded: {} topics, {} questions",
        pool.topics.len(),
        pool.question_count()
    );

    if stats_mode {
        print_stats(&pool);
        return Ok(());
    }

    let mut demand = match &config_path {
        Some(path) => DemandConfig::load(path)
            .with_context(|| format!("loading demand config from {path}"))?,
        None => DemandConfig::default(),
    };
    for (topic, count) in topic_overrides(&args)? {
        demand.topics.insert(topic, count);
    }

    log::info!("date {date} ({:?}), demand {:?}", date.weekday(), demand.topics);

    let selected = select_daily(&pool, &demand.topics, date);
    let payload = if pretty {
        serde_json::to_string_pretty(&selected)?
    } else {
        serde_json::to_string(&selected)?
    };
    println!("{payload}");

    Ok(())
}

fn str_arg<'a>(args: &'a [String], flag: &str, default: &'a str) -> &'a str {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
        .unwrap_or(default)
}

/// Collect `--topic name=count` overrides.
fn topic_overrides(args: &[String]) -> Result<Vec<(String, i64)>> {
    let mut overrides = Vec::new();
    for pair in args.windows(2).filter(|w| w[0] == "--topic") {
        let Some((name, count)) = pair[1].split_once('=') else {
            bail!("--topic expects name=count, got {:?}", pair[1]);
        };
        let count: i64 = count
            .parse()
            .with_context(|| format!("--topic {name}: count must be an integer"))?;
        overrides.push((name.to_string(), count));
    }
    Ok(overrides)
}

fn print_stats(pool: &QuestionPool) {
    let stats = pool.stats();
    println!("{:<16} {:>6} {:>8} {:>6} {:>7}", "topic", "easy", "medium", "hard", "total");
    for (topic, counts) in &stats.per_topic {
        println!(
            "{:<16} {:>6} {:>8} {:>6} {:>7}",
            topic,
            counts.easy,
            counts.medium,
            counts.hard,
            counts.total()
        );
    }
}
