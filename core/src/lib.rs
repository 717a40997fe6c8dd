//! Deterministic daily quiz selection.
//!
//! The whole crate is a pure function of (reference date, topic demand,
//! question pool) to (topic → ordered question list). The transport layer —
//! HTTP handler, cloud function, CLI — lives outside this crate and only
//! serializes what [`sampler::select_daily`] returns.

pub mod allocation;
pub mod bucket;
pub mod config;
pub mod error;
pub mod pool;
pub mod project;
pub mod rng;
pub mod sampler;
pub mod schedule;
pub mod shuffle;
pub mod types;

pub use sampler::select_daily;
