//! # Tournament Orchestrator
//!
//! Drives one tournament subtree through a full pipeline pass: scores, then
//! games, then matches, then the tournament's own aggregate check — a strict
//! bottom-up phase barrier, because the aggregate checks read child
//! statuses. Sibling entities are independent; the pass over one in-memory
//! object graph is sequential.
//!
//! `process` is idempotent. A tournament already in `Done` is detected and
//! short-circuited, and every per-level processor skips entities outside its
//! precondition status, so re-invocation causes no duplicate work and no
//! duplicate flag accumulation.

use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;

use crate::checks::CheckContext;
use crate::config::PipelineConfig;
use crate::models::Tournament;
use crate::orchestration::{automation::AutomationChecksProcessor, verification};
use crate::state_machine::{ProcessingStatus, VerificationStatus};
use crate::stats::calculate_match_costs;

/// Match costs produced when a match reached its verified terminal state.
#[derive(Debug, Clone, Serialize)]
pub struct MatchCostResult {
    pub match_id: i64,
    pub costs: HashMap<i64, f64>,
}

/// Observability record for one tournament pass.
#[derive(Debug, Default, Serialize)]
pub struct ProcessingSummary {
    pub tournament_id: i64,
    pub scores_processed: usize,
    pub games_processed: usize,
    pub matches_processed: usize,
    pub matches_awaiting_data: usize,
    /// The tournament was already `Done`; the pass was a no-op.
    pub skipped_done: bool,
    pub match_costs: Vec<MatchCostResult>,
    pub elapsed_ms: u64,
}

/// Runs the ordered processor sequence for a tournament subtree.
pub struct TournamentProcessor {
    config: PipelineConfig,
    checks: AutomationChecksProcessor,
}

impl TournamentProcessor {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            checks: AutomationChecksProcessor::new(),
        }
    }

    /// Run one full pipeline pass over the tournament subtree.
    pub fn process(&self, tournament: &mut Tournament) -> ProcessingSummary {
        let started = Instant::now();
        let mut summary = ProcessingSummary {
            tournament_id: tournament.id,
            ..ProcessingSummary::default()
        };

        if tournament.processing_status.is_done() {
            tracing::debug!(
                tournament_id = tournament.id,
                "tournament already done; skipping pass"
            );
            summary.skipped_done = true;
            summary.elapsed_ms = started.elapsed().as_millis() as u64;
            return summary;
        }

        let ctx = CheckContext::for_tournament(tournament, &self.config);

        for osu_match in &mut tournament.matches {
            if osu_match.processing_status.is_done() {
                continue;
            }
            if osu_match.processing_status == ProcessingStatus::NeedsData {
                // Raw data not fetched yet; the worker retries on a later
                // sweep. Not an error.
                summary.matches_awaiting_data += 1;
                continue;
            }

            for game in &mut osu_match.games {
                for score in &mut game.scores {
                    if self.checks.process_score(score, &ctx) {
                        summary.scores_processed += 1;
                    }
                    verification::process(score);
                }
                if self.checks.process_game(game, &ctx) {
                    summary.games_processed += 1;
                }
                verification::process(game);
            }

            if self.checks.process_match(osu_match, &ctx) {
                summary.matches_processed += 1;
            }
            let advanced = verification::process(osu_match);

            // Costs are computed exactly on the transition into Done, which
            // the forward-only state machine makes a once-per-match event.
            if advanced && osu_match.verification_status == VerificationStatus::Verified {
                let costs = calculate_match_costs(osu_match);
                if !costs.is_empty() {
                    summary.match_costs.push(MatchCostResult {
                        match_id: osu_match.id,
                        costs,
                    });
                }
            }
        }

        self.process_tournament_level(tournament, &ctx);

        summary.elapsed_ms = started.elapsed().as_millis() as u64;
        tracing::info!(
            tournament_id = tournament.id,
            scores = summary.scores_processed,
            games = summary.games_processed,
            matches = summary.matches_processed,
            awaiting_data = summary.matches_awaiting_data,
            costs = summary.match_costs.len(),
            elapsed_ms = summary.elapsed_ms,
            "tournament pipeline pass complete"
        );
        summary
    }

    /// Aggregate barrier: the tournament-level check reads match statuses,
    /// so it is deferred until every match has at least settled its own
    /// automated verdict.
    fn process_tournament_level(&self, tournament: &mut Tournament, ctx: &CheckContext) {
        if tournament.processing_status == ProcessingStatus::NeedsAutomationChecks {
            let settled = tournament
                .matches
                .iter()
                .all(|m| m.processing_status.has_settled());
            if settled {
                self.checks.process_tournament(tournament, ctx);
            } else {
                tracing::debug!(
                    tournament_id = tournament.id,
                    "match statuses not settled; deferring aggregate check"
                );
            }
        }
        verification::process(tournament);
    }
}
