//! # Automation Check Framework
//!
//! A library of small, independent, ordered predicates, one family per
//! entity level. Each check observes one falsifiable concern: `check`
//! answers "does this entity pass", and `on_fail` ORs the matching rejection
//! bits into the entity's flag set. A false result is a normal, expected
//! outcome recorded as data, never an error.
//!
//! Checks at one level are logically independent and safe to run in any
//! order; the explicit run order (lower first) is a precedence concern so
//! cheap structural checks settle before comparisons that read their
//! outcome. Registries hand back each level's checks already sorted.

pub mod game_checks;
pub mod match_checks;
pub mod score_checks;
pub mod tournament_checks;

pub use game_checks::{GameEndTimeCheck, GameRulesetCheck, GameScoreCountCheck, GameScoringTypeCheck};
pub use match_checks::{MatchEndTimeCheck, MatchGameCountCheck, MatchNamePrefixCheck};
pub use score_checks::{ScoreMinimumCheck, ScoreModsCheck, ScoreRulesetCheck};
pub use tournament_checks::TournamentMatchCountCheck;

use crate::config::PipelineConfig;
use crate::models::{Game, Match, Mods, Ruleset, Score, Tournament};

/// Parent context and tunables a check may need beyond the entity itself.
///
/// The hierarchy carries no back-pointers, so the tournament-level fields
/// checks compare against travel here.
#[derive(Debug, Clone)]
pub struct CheckContext {
    pub tournament_ruleset: Ruleset,
    pub tournament_abbreviation: String,
    pub score_minimum: i64,
    pub invalid_mods: Mods,
    pub verified_match_threshold: f64,
}

impl CheckContext {
    pub fn for_tournament(tournament: &Tournament, config: &PipelineConfig) -> Self {
        Self {
            tournament_ruleset: tournament.ruleset,
            tournament_abbreviation: tournament.abbreviation.clone(),
            score_minimum: config.score_minimum,
            invalid_mods: config.invalid_mods(),
            verified_match_threshold: config.verified_match_threshold,
        }
    }
}

/// One falsifiable rule against one entity instance.
pub trait AutomationCheck<E>: Send + Sync {
    /// Stable name for logs and summaries.
    fn name(&self) -> &'static str;

    /// Run order within the level; lower runs first.
    fn order(&self) -> i32 {
        0
    }

    /// Pure predicate: does the entity pass this rule?
    fn check(&self, entity: &E, ctx: &CheckContext) -> bool;

    /// OR the matching rejection bits into the entity's flag set.
    fn on_fail(&self, entity: &mut E, ctx: &CheckContext);
}

/// Run a level's checks in order. Every check runs even after a failure so
/// all applicable rejection reasons accumulate in one pass.
pub fn run_checks<E>(
    entity: &mut E,
    checks: &[Box<dyn AutomationCheck<E>>],
    ctx: &CheckContext,
) -> bool {
    let mut passed = true;
    for check in checks {
        if check.check(entity, ctx) {
            continue;
        }
        tracing::debug!(check = check.name(), "automation check failed");
        check.on_fail(entity, ctx);
        passed = false;
    }
    passed
}

fn sorted<E>(mut checks: Vec<Box<dyn AutomationCheck<E>>>) -> Vec<Box<dyn AutomationCheck<E>>> {
    checks.sort_by_key(|c| c.order());
    checks
}

/// The ordered score-level check family.
pub fn score_checks() -> Vec<Box<dyn AutomationCheck<Score>>> {
    sorted(vec![
        Box::new(ScoreMinimumCheck),
        Box::new(ScoreModsCheck),
        Box::new(ScoreRulesetCheck),
    ])
}

/// The ordered game-level check family.
pub fn game_checks() -> Vec<Box<dyn AutomationCheck<Game>>> {
    sorted(vec![
        Box::new(GameScoreCountCheck),
        Box::new(GameScoringTypeCheck),
        Box::new(GameRulesetCheck),
        Box::new(GameEndTimeCheck),
    ])
}

/// The ordered match-level check family.
pub fn match_checks() -> Vec<Box<dyn AutomationCheck<Match>>> {
    sorted(vec![
        Box::new(MatchNamePrefixCheck),
        Box::new(MatchEndTimeCheck),
        Box::new(MatchGameCountCheck),
    ])
}

/// The ordered tournament-level check family.
pub fn tournament_checks() -> Vec<Box<dyn AutomationCheck<Tournament>>> {
    sorted(vec![Box::new(TournamentMatchCountCheck)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mods, ScoreRejectionReason};

    fn ctx() -> CheckContext {
        CheckContext::for_tournament(
            &Tournament::new(1, "Test Cup", "TC", Ruleset::Osu),
            &PipelineConfig::default(),
        )
    }

    #[test]
    fn test_registries_are_ordered() {
        for window in score_checks().windows(2) {
            assert!(window[0].order() <= window[1].order());
        }
        for window in game_checks().windows(2) {
            assert!(window[0].order() <= window[1].order());
        }
        for window in match_checks().windows(2) {
            assert!(window[0].order() <= window[1].order());
        }
    }

    #[test]
    fn test_run_checks_accumulates_all_failures_in_one_pass() {
        let ctx = ctx();
        // Fails minimum, mods, and ruleset at once.
        let mut score = Score::new(1, 7, 500, Mods::RELAX, Ruleset::Mania);
        let passed = run_checks(&mut score, &score_checks(), &ctx);
        assert!(!passed);
        assert_eq!(
            score.rejection_reason,
            ScoreRejectionReason::SCORE_BELOW_MINIMUM
                | ScoreRejectionReason::INVALID_MODS
                | ScoreRejectionReason::RULESET_MISMATCH
        );
    }

    #[test]
    fn test_run_checks_passes_clean_entity_without_flags() {
        let ctx = ctx();
        let mut score = Score::new(1, 7, 812_331, Mods::HIDDEN, Ruleset::Osu);
        assert!(run_checks(&mut score, &score_checks(), &ctx));
        assert!(score.rejection_reason.is_empty());
    }
}
