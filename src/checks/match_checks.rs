//! Match-level automation checks.

use crate::checks::{AutomationCheck, CheckContext};
use crate::models::{Match, MatchRejectionReason};

/// Tournament lobbies are titled `"{ABBR}: (Team A) vs (Team B)"`; a lobby
/// whose title does not carry the tournament's prefix was most likely
/// submitted under the wrong event. Comparison is case-insensitive.
pub struct MatchNamePrefixCheck;

impl AutomationCheck<Match> for MatchNamePrefixCheck {
    fn name(&self) -> &'static str {
        "match_name_prefix"
    }

    fn order(&self) -> i32 {
        0
    }

    fn check(&self, osu_match: &Match, ctx: &CheckContext) -> bool {
        let prefix = format!("{}:", ctx.tournament_abbreviation.to_lowercase());
        osu_match.name.to_lowercase().starts_with(&prefix)
    }

    fn on_fail(&self, osu_match: &mut Match, _ctx: &CheckContext) {
        osu_match.flag(MatchRejectionReason::NAME_PREFIX_MISMATCH);
    }
}

/// A missing end time means the lobby was abandoned rather than played out.
pub struct MatchEndTimeCheck;

impl AutomationCheck<Match> for MatchEndTimeCheck {
    fn name(&self) -> &'static str {
        "match_end_time"
    }

    fn order(&self) -> i32 {
        1
    }

    fn check(&self, osu_match: &Match, _ctx: &CheckContext) -> bool {
        osu_match.end_time.is_some()
    }

    fn on_fail(&self, osu_match: &mut Match, _ctx: &CheckContext) {
        osu_match.flag(MatchRejectionReason::NO_END_TIME);
    }
}

/// Aggregate check: a match with no games (or none in a valid status) has
/// nothing trustworthy to contribute. Runs after the games' own passes.
pub struct MatchGameCountCheck;

impl AutomationCheck<Match> for MatchGameCountCheck {
    fn name(&self) -> &'static str {
        "match_game_count"
    }

    fn order(&self) -> i32 {
        2
    }

    fn check(&self, osu_match: &Match, _ctx: &CheckContext) -> bool {
        !osu_match.games.is_empty() && osu_match.valid_game_count() > 0
    }

    fn on_fail(&self, osu_match: &mut Match, _ctx: &CheckContext) {
        if osu_match.games.is_empty() {
            osu_match.flag(MatchRejectionReason::NO_GAMES);
        } else {
            osu_match.flag(MatchRejectionReason::NO_VALID_GAMES);
        }
    }
}
