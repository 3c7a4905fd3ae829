use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{impl_pipeline_entity, EntityKind, Match, Ruleset, TournamentRejectionReason};
use crate::state_machine::{ProcessingStatus, VerificationStatus};

/// Top-level competitive event, owning its matches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
    /// Short form used as the expected lobby-title prefix (`"{ABBR}:"`).
    pub abbreviation: String,
    pub ruleset: Ruleset,
    pub verification_status: VerificationStatus,
    pub processing_status: ProcessingStatus,
    pub rejection_reason: TournamentRejectionReason,
    pub last_processing_date: Option<DateTime<Utc>>,
    pub matches: Vec<Match>,
}

impl Tournament {
    /// Tournaments are created from a submission that already carries their
    /// own data; only their aggregate verdict is pending.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        abbreviation: impl Into<String>,
        ruleset: Ruleset,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            abbreviation: abbreviation.into(),
            ruleset,
            verification_status: VerificationStatus::None,
            processing_status: ProcessingStatus::NeedsAutomationChecks,
            rejection_reason: TournamentRejectionReason::empty(),
            last_processing_date: None,
            matches: Vec::new(),
        }
    }

    /// OR a failure into the rejection set. Flags only grow.
    pub fn flag(&mut self, reason: TournamentRejectionReason) {
        self.rejection_reason |= reason;
    }

    /// Matches whose status counts as valid for the aggregate check.
    pub fn valid_match_count(&self) -> usize {
        self.matches
            .iter()
            .filter(|m| m.verification_status.is_verified_like())
            .count()
    }

    /// Confirm every provisional verdict in the subtree to its terminal
    /// counterpart. This is the reviewer/administrative action; the
    /// automation pipeline never calls it.
    pub fn confirm_pending(&mut self) {
        self.verification_status = self.verification_status.confirm();
        for m in &mut self.matches {
            m.verification_status = m.verification_status.confirm();
            for game in &mut m.games {
                game.verification_status = game.verification_status.confirm();
                for score in &mut game.scores {
                    score.verification_status = score.verification_status.confirm();
                }
            }
        }
    }
}

impl_pipeline_entity!(Tournament, EntityKind::Tournament);
