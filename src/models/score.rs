use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{impl_pipeline_entity, EntityKind, Mods, Ruleset, ScoreRejectionReason};
use crate::state_machine::{ProcessingStatus, VerificationStatus};

/// One player's result in a game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub id: i64,
    pub player_id: i64,
    pub score: i64,
    pub mods: Mods,
    pub ruleset: Ruleset,
    pub verification_status: VerificationStatus,
    pub processing_status: ProcessingStatus,
    pub rejection_reason: ScoreRejectionReason,
    pub last_processing_date: Option<DateTime<Utc>>,
}

impl Score {
    /// Scores carry their raw data from creation, so they enter the pipeline
    /// ready for automation checks.
    pub fn new(id: i64, player_id: i64, score: i64, mods: Mods, ruleset: Ruleset) -> Self {
        Self {
            id,
            player_id,
            score,
            mods,
            ruleset,
            verification_status: VerificationStatus::None,
            processing_status: ProcessingStatus::NeedsAutomationChecks,
            rejection_reason: ScoreRejectionReason::empty(),
            last_processing_date: None,
        }
    }

    /// OR a failure into the rejection set. Flags only grow.
    pub fn flag(&mut self, reason: ScoreRejectionReason) {
        self.rejection_reason |= reason;
    }
}

impl_pipeline_entity!(Score, EntityKind::Score);
