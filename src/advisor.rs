// src/advisor.rs

use crate::constants::*;
use crate::models::{Difficulty, PerformanceRecord};
use log::{debug, info};

// --- Public Interface ---

/// Recommends the next question difficulty from the learner's aggregate
/// counters. Total over every record: unknown learners and thin samples fall
/// back to easy. The record is only read, never modified.
pub fn next_difficulty(performance: &PerformanceRecord) -> Difficulty {
    let assessment = Assessment::from_record(performance);

    debug!(
        "[Advisor Input] Ratios: easy {:.2} ({}/{}), medium {:.2} ({}/{}), hard {:.2} ({}/{})",
        assessment.easy_ratio,
        performance.easy.correct,
        performance.easy.attempted,
        assessment.medium_ratio,
        performance.medium.correct,
        performance.medium.attempted,
        assessment.hard_ratio,
        performance.hard.correct,
        performance.hard.attempted,
    );
    debug!(
        "[Advisor Flags] ExcellingEasy: {}, ExcellingMedium: {}, StrugglingMedium: {}, StrugglingHard: {}, MediumEstablished: {}",
        assessment.excelling_easy,
        assessment.excelling_medium,
        assessment.struggling_medium,
        assessment.struggling_hard,
        assessment.medium_established,
    );

    let next = match matched_rule(&assessment) {
        Some(rule) => {
            debug!("[Advisor Logic] Rule: {}", rule.name);
            rule.next
        }
        None => {
            debug!("[Advisor Logic] No rule matched, defaulting to easy");
            DEFAULT_TIER
        }
    };

    info!("[Advisor Result] Next difficulty: {}", next);
    next
}

/// The derived view the advisor decides on: per-tier success ratios plus the
/// threshold flags, each flag gated on MIN_ATTEMPTS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assessment {
    pub easy_ratio: f64,
    pub medium_ratio: f64,
    pub hard_ratio: f64,
    pub excelling_easy: bool,
    pub excelling_medium: bool,
    pub struggling_medium: bool,
    pub struggling_hard: bool,
    pub medium_established: bool,
}

impl Assessment {
    pub fn from_record(performance: &PerformanceRecord) -> Self {
        let easy = performance.easy;
        let medium = performance.medium;
        let hard = performance.hard;

        let easy_ratio = easy.ratio();
        let medium_ratio = medium.ratio();
        let hard_ratio = hard.ratio();

        Assessment {
            easy_ratio,
            medium_ratio,
            hard_ratio,
            excelling_easy: easy.attempted >= MIN_ATTEMPTS && easy_ratio > EXCELLING_THRESHOLD,
            excelling_medium: medium.attempted >= MIN_ATTEMPTS
                && medium_ratio > EXCELLING_THRESHOLD,
            struggling_medium: medium.attempted >= MIN_ATTEMPTS
                && medium_ratio < STRUGGLING_THRESHOLD,
            struggling_hard: hard.attempted >= MIN_ATTEMPTS && hard_ratio < STRUGGLING_THRESHOLD,
            medium_established: medium.attempted >= MIN_ATTEMPTS,
        }
    }

    /// Same decision as [`next_difficulty`], without the log lines.
    pub fn recommendation(&self) -> Difficulty {
        matched_rule(self).map_or(DEFAULT_TIER, |rule| rule.next)
    }
}

// --- Internal Algorithm Logic ---

// Fallback for new learners and records with too little data.
const DEFAULT_TIER: Difficulty = Difficulty::Easy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    ExcellingEasy,
    ExcellingMedium,
    StrugglingMedium,
    StrugglingHard,
    MediumEstablished,
}

impl Assessment {
    fn signal(&self, signal: Signal) -> bool {
        match signal {
            Signal::ExcellingEasy => self.excelling_easy,
            Signal::ExcellingMedium => self.excelling_medium,
            Signal::StrugglingMedium => self.struggling_medium,
            Signal::StrugglingHard => self.struggling_hard,
            Signal::MediumEstablished => self.medium_established,
        }
    }
}

// A promotion/demotion step. The table is ordered; the first rule whose
// signals hold decides the recommendation, so overlapping rules resolve by
// position.
struct AdaptationRule {
    name: &'static str,
    requires: Signal,
    unless: Option<Signal>,
    next: Difficulty,
}

impl AdaptationRule {
    fn applies(&self, assessment: &Assessment) -> bool {
        assessment.signal(self.requires)
            && self.unless.map_or(true, |blocker| !assessment.signal(blocker))
    }
}

static ADAPTATION_RULES: [AdaptationRule; 5] = [
    AdaptationRule {
        name: "advance to medium",
        requires: Signal::ExcellingEasy,
        unless: Some(Signal::StrugglingMedium),
        next: Difficulty::Medium,
    },
    AdaptationRule {
        name: "advance to hard",
        requires: Signal::ExcellingMedium,
        unless: Some(Signal::StrugglingHard),
        next: Difficulty::Hard,
    },
    AdaptationRule {
        name: "drop back to easy",
        requires: Signal::StrugglingMedium,
        unless: None,
        next: Difficulty::Easy,
    },
    AdaptationRule {
        name: "drop back to medium",
        requires: Signal::StrugglingHard,
        unless: None,
        next: Difficulty::Medium,
    },
    AdaptationRule {
        name: "hold at medium",
        requires: Signal::MediumEstablished,
        unless: None,
        next: Difficulty::Medium,
    },
];

fn matched_rule(assessment: &Assessment) -> Option<&'static AdaptationRule> {
    ADAPTATION_RULES.iter().find(|rule| rule.applies(assessment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TierStats;

    fn record(easy: (u32, u32), medium: (u32, u32), hard: (u32, u32)) -> PerformanceRecord {
        PerformanceRecord {
            easy: TierStats::new(easy.0, easy.1),
            medium: TierStats::new(medium.0, medium.1),
            hard: TierStats::new(hard.0, hard.1),
        }
    }

    #[test]
    fn empty_record_defaults_to_easy() {
        assert_eq!(next_difficulty(&PerformanceRecord::new()), Difficulty::Easy);
    }

    #[test]
    fn excelling_on_easy_advances_to_medium() {
        let r = record((3, 3), (0, 0), (0, 0));
        assert_eq!(next_difficulty(&r), Difficulty::Medium);
    }

    #[test]
    fn medium_struggle_blocks_the_advance_from_easy() {
        let r = record((10, 10), (5, 1), (0, 0));
        assert_eq!(next_difficulty(&r), Difficulty::Easy);
    }

    #[test]
    fn excelling_on_medium_advances_to_hard() {
        let r = record((0, 0), (4, 4), (0, 0));
        assert_eq!(next_difficulty(&r), Difficulty::Hard);
    }

    #[test]
    fn hard_struggle_blocks_the_advance_from_medium() {
        let r = record((0, 0), (4, 4), (3, 0));
        assert_eq!(next_difficulty(&r), Difficulty::Medium);
    }

    #[test]
    fn struggling_on_hard_drops_back_to_medium() {
        let r = record((0, 0), (0, 0), (4, 1));
        assert_eq!(next_difficulty(&r), Difficulty::Medium);
    }

    #[test]
    fn steady_medium_ratio_stays_on_medium() {
        // Ratio exactly 0.6 is neither struggling nor excelling.
        let r = record((0, 0), (5, 3), (0, 0));
        assert_eq!(next_difficulty(&r), Difficulty::Medium);
    }

    #[test]
    fn ratio_at_the_excelling_threshold_does_not_advance() {
        // 9/10 is exactly 0.9; excelling requires strictly above.
        let r = record((10, 9), (0, 0), (0, 0));
        assert_eq!(next_difficulty(&r), Difficulty::Easy);
    }

    #[test]
    fn thin_samples_set_no_flags() {
        // Perfect scores on fewer than MIN_ATTEMPTS attempts prove nothing.
        let r = record((2, 2), (2, 0), (2, 0));
        let a = Assessment::from_record(&r);
        assert!(!a.excelling_easy);
        assert!(!a.struggling_medium);
        assert!(!a.struggling_hard);
        assert_eq!(next_difficulty(&r), Difficulty::Easy);
    }

    #[test]
    fn easy_advance_outranks_medium_advance() {
        // Excelling on both lower tiers recommends medium, not hard.
        let r = record((5, 5), (5, 5), (0, 0));
        assert_eq!(next_difficulty(&r), Difficulty::Medium);
    }

    #[test]
    fn medium_struggle_outranks_hard_struggle() {
        let r = record((0, 0), (4, 1), (4, 1));
        assert_eq!(next_difficulty(&r), Difficulty::Easy);
    }

    #[test]
    fn hard_success_without_medium_history_falls_back_to_easy() {
        let r = record((0, 0), (0, 0), (5, 5));
        assert_eq!(next_difficulty(&r), Difficulty::Easy);
    }

    #[test]
    fn overreported_correct_counts_read_as_excelling() {
        // correct > attempted pushes the ratio past 1.0; the advisor takes the
        // counters at face value. PerformanceRecord::validate is the opt-out.
        let r = record((0, 0), (3, 30), (0, 0));
        assert_eq!(next_difficulty(&r), Difficulty::Hard);
    }

    #[test]
    fn same_record_gives_the_same_answer() {
        let r = record((10, 10), (5, 1), (0, 0));
        let snapshot = r.clone();

        let first = next_difficulty(&r);
        let second = next_difficulty(&r);
        assert_eq!(first, second);
        assert_eq!(r, snapshot);
    }

    #[test]
    fn assessment_exposes_ratios_and_flags() {
        let a = Assessment::from_record(&record((4, 4), (10, 5), (3, 2)));

        assert_eq!(a.easy_ratio, 1.0);
        assert_eq!(a.medium_ratio, 0.5);
        assert!(a.excelling_easy);
        assert!(a.struggling_medium);
        assert!(!a.excelling_medium);
        assert!(!a.struggling_hard);
        assert!(a.medium_established);
    }

    #[test]
    fn assessment_recommendation_matches_the_advisor() {
        let records = [
            record((0, 0), (0, 0), (0, 0)),
            record((3, 3), (0, 0), (0, 0)),
            record((0, 0), (4, 4), (0, 0)),
            record((10, 10), (5, 1), (0, 0)),
            record((0, 0), (0, 0), (4, 1)),
            record((0, 0), (5, 3), (0, 0)),
        ];
        for r in records {
            assert_eq!(
                Assessment::from_record(&r).recommendation(),
                next_difficulty(&r)
            );
        }
    }
}
