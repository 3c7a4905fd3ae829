use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{
    impl_pipeline_entity, EntityKind, GameRejectionReason, Ruleset, Score, ScoringType,
};
use crate::state_machine::{ProcessingStatus, VerificationStatus};

/// One played beatmap within a match, owning its scores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub ruleset: Ruleset,
    pub scoring_type: ScoringType,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub verification_status: VerificationStatus,
    pub processing_status: ProcessingStatus,
    pub rejection_reason: GameRejectionReason,
    pub last_processing_date: Option<DateTime<Utc>>,
    pub scores: Vec<Score>,
}

impl Game {
    pub fn new(id: i64, ruleset: Ruleset, scoring_type: ScoringType) -> Self {
        Self {
            id,
            ruleset,
            scoring_type,
            start_time: None,
            end_time: None,
            verification_status: VerificationStatus::None,
            processing_status: ProcessingStatus::NeedsAutomationChecks,
            rejection_reason: GameRejectionReason::empty(),
            last_processing_date: None,
            scores: Vec::new(),
        }
    }

    /// OR a failure into the rejection set. Flags only grow.
    pub fn flag(&mut self, reason: GameRejectionReason) {
        self.rejection_reason |= reason;
    }

    /// Scores whose status counts as valid for aggregate checks.
    pub fn valid_score_count(&self) -> usize {
        self.scores
            .iter()
            .filter(|s| s.verification_status.is_verified_like())
            .count()
    }
}

impl_pipeline_entity!(Game, EntityKind::Game);
