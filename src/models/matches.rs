use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{impl_pipeline_entity, EntityKind, Game, MatchRejectionReason, Ruleset};
use crate::state_machine::{ProcessingStatus, VerificationStatus};

/// One competitive session (lobby) within a tournament, owning its games.
///
/// The ruleset is inherited contextually from the tournament for comparison
/// checks; the field here records what the raw data reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    pub id: i64,
    pub name: String,
    pub ruleset: Ruleset,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub verification_status: VerificationStatus,
    pub processing_status: ProcessingStatus,
    pub rejection_reason: MatchRejectionReason,
    pub last_processing_date: Option<DateTime<Utc>>,
    pub games: Vec<Game>,
}

impl Match {
    /// A match is created as a bare reference to an external lobby; its raw
    /// data arrives later through the data source, so it starts in
    /// `NeedsData`.
    pub fn new(id: i64, ruleset: Ruleset) -> Self {
        Self {
            id,
            name: String::new(),
            ruleset,
            start_time: None,
            end_time: None,
            verification_status: VerificationStatus::None,
            processing_status: ProcessingStatus::NeedsData,
            rejection_reason: MatchRejectionReason::empty(),
            last_processing_date: None,
            games: Vec::new(),
        }
    }

    /// OR a failure into the rejection set. Flags only grow.
    pub fn flag(&mut self, reason: MatchRejectionReason) {
        self.rejection_reason |= reason;
    }

    /// Games whose status counts as valid for aggregate checks.
    pub fn valid_game_count(&self) -> usize {
        self.games
            .iter()
            .filter(|g| g.verification_status.is_verified_like())
            .count()
    }
}

impl_pipeline_entity!(Match, EntityKind::Match);
