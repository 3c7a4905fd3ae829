//! Score-level automation checks.

use crate::checks::{AutomationCheck, CheckContext};
use crate::models::{Score, ScoreRejectionReason};

/// Fails scores at or below the configured minimum (default 1000), the
/// signature of warmup throwaways and disconnects.
pub struct ScoreMinimumCheck;

impl AutomationCheck<Score> for ScoreMinimumCheck {
    fn name(&self) -> &'static str {
        "score_minimum"
    }

    fn order(&self) -> i32 {
        0
    }

    fn check(&self, score: &Score, ctx: &CheckContext) -> bool {
        score.score > ctx.score_minimum
    }

    fn on_fail(&self, score: &mut Score, _ctx: &CheckContext) {
        score.flag(ScoreRejectionReason::SCORE_BELOW_MINIMUM);
    }
}

/// Fails scores whose mod set intersects the invalid-mods mask.
pub struct ScoreModsCheck;

impl AutomationCheck<Score> for ScoreModsCheck {
    fn name(&self) -> &'static str {
        "score_mods"
    }

    fn order(&self) -> i32 {
        1
    }

    fn check(&self, score: &Score, ctx: &CheckContext) -> bool {
        !score.mods.intersects(ctx.invalid_mods)
    }

    fn on_fail(&self, score: &mut Score, _ctx: &CheckContext) {
        score.flag(ScoreRejectionReason::INVALID_MODS);
    }
}

/// Fails scores played under a different ruleset than the tournament's.
pub struct ScoreRulesetCheck;

impl AutomationCheck<Score> for ScoreRulesetCheck {
    fn name(&self) -> &'static str {
        "score_ruleset"
    }

    fn order(&self) -> i32 {
        2
    }

    fn check(&self, score: &Score, ctx: &CheckContext) -> bool {
        score.ruleset == ctx.tournament_ruleset
    }

    fn on_fail(&self, score: &mut Score, _ctx: &CheckContext) {
        score.flag(ScoreRejectionReason::RULESET_MISMATCH);
    }
}
