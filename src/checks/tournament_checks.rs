//! Tournament-level automation checks.

use crate::checks::{AutomationCheck, CheckContext};
use crate::models::{Tournament, TournamentRejectionReason};

/// Aggregate check over the tournament's matches.
///
/// Zero matches in a pre-verified/verified status is its own failure
/// (`NO_VERIFIED_MATCHES`) and short-circuits before the ratio is ever
/// evaluated. Otherwise the tournament passes iff the valid-match ratio
/// meets the configured threshold, inclusive (8 of 10 passes at 0.8).
///
/// Must only run after match-level statuses have stabilized; the
/// orchestrator enforces that barrier.
pub struct TournamentMatchCountCheck;

impl AutomationCheck<Tournament> for TournamentMatchCountCheck {
    fn name(&self) -> &'static str {
        "tournament_match_count"
    }

    fn order(&self) -> i32 {
        0
    }

    fn check(&self, tournament: &Tournament, ctx: &CheckContext) -> bool {
        let valid = tournament.valid_match_count();
        if valid == 0 {
            return false;
        }
        let ratio = valid as f64 / tournament.matches.len() as f64;
        ratio >= ctx.verified_match_threshold
    }

    fn on_fail(&self, tournament: &mut Tournament, _ctx: &CheckContext) {
        if tournament.valid_match_count() == 0 {
            tournament.flag(TournamentRejectionReason::NO_VERIFIED_MATCHES);
        } else {
            tournament.flag(TournamentRejectionReason::NOT_ENOUGH_VERIFIED_MATCHES);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PipelineConfig;
    use crate::models::{Match, Ruleset};
    use crate::state_machine::VerificationStatus;

    fn tournament_with(total: usize, valid: usize) -> Tournament {
        let mut tournament = Tournament::new(1, "Test Cup", "TC", Ruleset::Osu);
        for i in 0..total {
            let mut m = Match::new(i as i64, Ruleset::Osu);
            m.verification_status = if i < valid {
                VerificationStatus::Verified
            } else {
                VerificationStatus::PreRejected
            };
            tournament.matches.push(m);
        }
        tournament
    }

    fn ctx() -> CheckContext {
        CheckContext::for_tournament(
            &Tournament::new(1, "Test Cup", "TC", Ruleset::Osu),
            &PipelineConfig::default(),
        )
    }

    #[test]
    fn test_zero_valid_matches_short_circuits() {
        let ctx = ctx();
        let check = TournamentMatchCountCheck;
        let mut tournament = tournament_with(1, 0);
        assert!(!check.check(&tournament, &ctx));
        check.on_fail(&mut tournament, &ctx);
        // Exactly the short-circuit flag; the threshold flag must not appear.
        assert_eq!(
            tournament.rejection_reason,
            TournamentRejectionReason::NO_VERIFIED_MATCHES
        );
    }

    #[test]
    fn test_threshold_boundary_cases() {
        let check = TournamentMatchCountCheck;
        let ctx = ctx();
        let cases = [
            (10, 8, true),
            (10, 7, false),
            (20, 17, true),
            (20, 15, false),
            (1, 0, false),
            (10, 10, true),
        ];
        for (total, valid, expected) in cases {
            let tournament = tournament_with(total, valid);
            assert_eq!(
                check.check(&tournament, &ctx),
                expected,
                "{valid}/{total} against 0.8"
            );
        }
    }

    #[test]
    fn test_below_threshold_flags_not_enough() {
        let ctx = ctx();
        let check = TournamentMatchCountCheck;
        let mut tournament = tournament_with(10, 7);
        assert!(!check.check(&tournament, &ctx));
        check.on_fail(&mut tournament, &ctx);
        assert_eq!(
            tournament.rejection_reason,
            TournamentRejectionReason::NOT_ENOUGH_VERIFIED_MATCHES
        );
    }

    #[test]
    fn test_pre_verified_counts_as_valid() {
        let ctx = ctx();
        let mut tournament = tournament_with(10, 0);
        for m in tournament.matches.iter_mut().take(8) {
            m.verification_status = VerificationStatus::PreVerified;
        }
        assert!(TournamentMatchCountCheck.check(&tournament, &ctx));
    }
}
