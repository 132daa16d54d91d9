// src/lib.rs
// Difficulty recommendation engine for adaptive quiz sessions: callers keep
// per-tier attempt/correct counters and ask which tier to serve next.
pub mod advisor;
pub mod constants;
pub mod models;

pub use advisor::{next_difficulty, Assessment};
pub use models::{
    Difficulty, InvalidRecordError, ParseDifficultyError, PerformanceRecord, TierStats,
};
