// src/models.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// --- Difficulty Tiers ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError {
                label: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty label {label:?}")]
pub struct ParseDifficultyError {
    pub label: String,
}

// --- Performance Counters ---

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierStats {
    #[serde(default)]
    pub attempted: u32,
    #[serde(default)]
    pub correct: u32,
}

impl TierStats {
    pub fn new(attempted: u32, correct: u32) -> Self {
        TierStats { attempted, correct }
    }

    /// Fraction of attempts answered correctly; 0.0 when nothing was attempted.
    pub fn ratio(&self) -> f64 {
        if self.attempted > 0 {
            self.correct as f64 / self.attempted as f64
        } else {
            0.0
        }
    }
}

// Tiers missing from the serialized form read as all-zero stats, so a bare
// `{}` is a valid record for a brand-new learner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceRecord {
    pub easy: TierStats,
    pub medium: TierStats,
    pub hard: TierStats,
}

impl PerformanceRecord {
    pub fn new() -> Self {
        PerformanceRecord::default()
    }

    pub fn tier(&self, tier: Difficulty) -> TierStats {
        match tier {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    pub fn tier_mut(&mut self, tier: Difficulty) -> &mut TierStats {
        match tier {
            Difficulty::Easy => &mut self.easy,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }

    /// Checks that no tier claims more correct answers than attempts. The
    /// advisor accepts such records as-is; callers that want them rejected
    /// run this first.
    pub fn validate(&self) -> Result<(), InvalidRecordError> {
        for tier in Difficulty::ALL {
            let stats = self.tier(tier);
            if stats.correct > stats.attempted {
                return Err(InvalidRecordError {
                    tier,
                    attempted: stats.attempted,
                    correct: stats.correct,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("more correct answers than attempts on the {tier} tier ({correct} > {attempted})")]
pub struct InvalidRecordError {
    pub tier: Difficulty,
    pub attempted: u32,
    pub correct: u32,
}
