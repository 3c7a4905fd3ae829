//! Game-level automation checks.
//!
//! The score-count check is an aggregate: it reads child score statuses, so
//! the orchestrator runs game checks only after the game's scores finished
//! their own pass.

use crate::checks::{AutomationCheck, CheckContext};
use crate::models::{Game, GameRejectionReason, ScoringType};

/// A head-to-head game needs at least two scores in a valid status to mean
/// anything; an empty game is flagged separately from a depleted one.
pub struct GameScoreCountCheck;

impl AutomationCheck<Game> for GameScoreCountCheck {
    fn name(&self) -> &'static str {
        "game_score_count"
    }

    fn order(&self) -> i32 {
        0
    }

    fn check(&self, game: &Game, _ctx: &CheckContext) -> bool {
        !game.scores.is_empty() && game.valid_score_count() >= 2
    }

    fn on_fail(&self, game: &mut Game, _ctx: &CheckContext) {
        if game.scores.is_empty() {
            game.flag(GameRejectionReason::NO_SCORES);
        } else {
            game.flag(GameRejectionReason::TOO_FEW_VALID_SCORES);
        }
    }
}

/// Tournament lobbies are expected to run ScoreV2.
pub struct GameScoringTypeCheck;

impl AutomationCheck<Game> for GameScoringTypeCheck {
    fn name(&self) -> &'static str {
        "game_scoring_type"
    }

    fn order(&self) -> i32 {
        1
    }

    fn check(&self, game: &Game, _ctx: &CheckContext) -> bool {
        game.scoring_type == ScoringType::ScoreV2
    }

    fn on_fail(&self, game: &mut Game, _ctx: &CheckContext) {
        game.flag(GameRejectionReason::INVALID_SCORING_TYPE);
    }
}

/// Fails games played under a different ruleset than the tournament's.
pub struct GameRulesetCheck;

impl AutomationCheck<Game> for GameRulesetCheck {
    fn name(&self) -> &'static str {
        "game_ruleset"
    }

    fn order(&self) -> i32 {
        2
    }

    fn check(&self, game: &Game, ctx: &CheckContext) -> bool {
        game.ruleset == ctx.tournament_ruleset
    }

    fn on_fail(&self, game: &mut Game, _ctx: &CheckContext) {
        game.flag(GameRejectionReason::RULESET_MISMATCH);
    }
}

/// A missing end time means the game was aborted mid-map.
pub struct GameEndTimeCheck;

impl AutomationCheck<Game> for GameEndTimeCheck {
    fn name(&self) -> &'static str {
        "game_end_time"
    }

    fn order(&self) -> i32 {
        3
    }

    fn check(&self, game: &Game, _ctx: &CheckContext) -> bool {
        game.end_time.is_some()
    }

    fn on_fail(&self, game: &mut Game, _ctx: &CheckContext) {
        game.flag(GameRejectionReason::NO_END_TIME);
    }
}
