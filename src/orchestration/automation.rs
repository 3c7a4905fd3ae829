//! Automation-check processors, one per entity level.
//!
//! Precondition: the entity is in `NeedsAutomationChecks`. The processor
//! runs the level's ordered checks, assigns the provisional verdict
//! (`PreVerified` on all-pass, `PreRejected` otherwise), advances the
//! processing status, and stamps the last-processed timestamp. Anything not
//! in the precondition status is skipped without mutation — the common
//! "nothing to do" path, not a failure.

use chrono::Utc;

use crate::checks::{self, AutomationCheck, CheckContext};
use crate::models::{Game, Match, PipelineEntity, Score, Tournament};
use crate::state_machine::{ProcessingStatus, VerificationStatus};

/// Holds the ordered check families for all four levels.
pub struct AutomationChecksProcessor {
    score_checks: Vec<Box<dyn AutomationCheck<Score>>>,
    game_checks: Vec<Box<dyn AutomationCheck<Game>>>,
    match_checks: Vec<Box<dyn AutomationCheck<Match>>>,
    tournament_checks: Vec<Box<dyn AutomationCheck<Tournament>>>,
}

impl AutomationChecksProcessor {
    pub fn new() -> Self {
        Self {
            score_checks: checks::score_checks(),
            game_checks: checks::game_checks(),
            match_checks: checks::match_checks(),
            tournament_checks: checks::tournament_checks(),
        }
    }

    /// Returns true if the entity was processed (precondition held).
    pub fn process_score(&self, score: &mut Score, ctx: &CheckContext) -> bool {
        apply(score, &self.score_checks, ctx)
    }

    pub fn process_game(&self, game: &mut Game, ctx: &CheckContext) -> bool {
        apply(game, &self.game_checks, ctx)
    }

    pub fn process_match(&self, osu_match: &mut Match, ctx: &CheckContext) -> bool {
        apply(osu_match, &self.match_checks, ctx)
    }

    pub fn process_tournament(&self, tournament: &mut Tournament, ctx: &CheckContext) -> bool {
        apply(tournament, &self.tournament_checks, ctx)
    }
}

impl Default for AutomationChecksProcessor {
    fn default() -> Self {
        Self::new()
    }
}

fn apply<E: PipelineEntity>(
    entity: &mut E,
    checks: &[Box<dyn AutomationCheck<E>>],
    ctx: &CheckContext,
) -> bool {
    if entity.processing_status() != ProcessingStatus::NeedsAutomationChecks {
        tracing::debug!(
            kind = %entity.kind(),
            id = entity.id(),
            status = %entity.processing_status(),
            "entity not awaiting automation checks; nothing to do"
        );
        return false;
    }

    let passed = checks::run_checks(entity, checks, ctx);
    entity.set_verification_status(if passed {
        VerificationStatus::PreVerified
    } else {
        VerificationStatus::PreRejected
    });
    entity.set_processing_status(entity.processing_status().advance());
    entity.touch(Utc::now());

    tracing::debug!(
        kind = %entity.kind(),
        id = entity.id(),
        verdict = %entity.verification_status(),
        "automation checks complete"
    );
    true
}
