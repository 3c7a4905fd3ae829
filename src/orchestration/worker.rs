//! # Pipeline Worker
//!
//! The sweep loop a scheduling host runs: periodically claim a batch of due
//! tournaments, process each subtree, and persist the outcome. Tournaments
//! within a batch are independent and processed concurrently; shutdown is
//! cooperative and observed between sweeps, never mid-entity, so no entity
//! is left with a half-applied flag set.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Notify;

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::models::{Game, Match, Score};
use crate::orchestration::orchestrator::{ProcessingSummary, TournamentProcessor};
use crate::services::{DataSource, HierarchyStore, RatingSink, RawMatchData};
use crate::state_machine::ProcessingStatus;

/// Periodic sweep worker over the collaborator boundary.
pub struct PipelineWorker {
    store: Arc<dyn HierarchyStore>,
    data_source: Arc<dyn DataSource>,
    rating_sink: Arc<dyn RatingSink>,
    processor: TournamentProcessor,
    config: PipelineConfig,
    shutdown: Arc<Notify>,
}

impl PipelineWorker {
    pub fn new(
        store: Arc<dyn HierarchyStore>,
        data_source: Arc<dyn DataSource>,
        rating_sink: Arc<dyn RatingSink>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            store,
            data_source,
            rating_sink,
            processor: TournamentProcessor::new(config.clone()),
            config,
            shutdown: Arc::new(Notify::new()),
        }
    }

    /// Handle for requesting cooperative shutdown (`notify_one`). The worker
    /// finishes its current sweep before exiting.
    pub fn shutdown_handle(&self) -> Arc<Notify> {
        Arc::clone(&self.shutdown)
    }

    /// Run sweeps until shutdown is requested.
    pub async fn run(&self) {
        let mut interval =
            tokio::time::interval(Duration::from_millis(self.config.sweep_interval_ms));
        tracing::info!(
            batch_size = self.config.batch_size,
            sweep_interval_ms = self.config.sweep_interval_ms,
            "pipeline worker started"
        );
        loop {
            tokio::select! {
                _ = self.shutdown.notified() => {
                    tracing::info!("shutdown requested; pipeline worker stopping");
                    break;
                }
                _ = interval.tick() => {
                    if let Err(error) = self.sweep().await {
                        // Batch-level collaborator failure; the next tick retries.
                        tracing::warn!(%error, "sweep failed");
                    }
                }
            }
        }
    }

    /// Process one batch of due tournaments. Failures are local to their
    /// tournament and never abort the batch; retrying a whole sweep is safe
    /// because processing is idempotent.
    pub async fn sweep(&self) -> Result<usize> {
        let ids = self
            .store
            .due_tournaments(self.config.batch_size)
            .await
            .map_err(PipelineError::Persistence)?;
        if ids.is_empty() {
            return Ok(0);
        }

        let passes = ids.iter().map(|&id| self.process_tournament(id));
        let mut processed = 0;
        for (id, outcome) in ids.iter().zip(futures::future::join_all(passes).await) {
            match outcome {
                Ok(_) => processed += 1,
                Err(error) => {
                    tracing::warn!(tournament_id = id, %error, "tournament pass failed");
                }
            }
        }
        Ok(processed)
    }

    /// One full pass over a single tournament: fetch missing raw match data,
    /// run the pipeline, publish freshly computed match costs, save.
    pub async fn process_tournament(&self, tournament_id: i64) -> Result<ProcessingSummary> {
        let mut tournament = self
            .store
            .load_hierarchy(tournament_id)
            .await
            .map_err(|source| PipelineError::HierarchyUnavailable {
                tournament_id,
                source,
            })?;

        for osu_match in tournament
            .matches
            .iter_mut()
            .filter(|m| m.processing_status == ProcessingStatus::NeedsData)
        {
            match self.data_source.fetch_raw_match(osu_match.id).await {
                Ok(Some(raw)) => ingest_raw_match(osu_match, raw),
                Ok(None) => {
                    tracing::debug!(match_id = osu_match.id, "raw match data not available yet");
                }
                Err(error) => {
                    // Transient fetch failure: the match stays in NeedsData
                    // and a later sweep retries.
                    tracing::warn!(match_id = osu_match.id, %error, "raw match fetch failed");
                }
            }
        }

        let summary = self.processor.process(&mut tournament);

        // Publish before save: if the save fails, the next sweep recomputes
        // and redelivers, so the sink sees at-least-once delivery keyed by
        // match id.
        for result in &summary.match_costs {
            self.rating_sink
                .publish(result.match_id, &result.costs)
                .await
                .map_err(|source| PipelineError::RatingDelivery {
                    match_id: result.match_id,
                    source,
                })?;
        }

        self.store
            .save(&tournament)
            .await
            .map_err(PipelineError::Persistence)?;

        Ok(summary)
    }
}

/// Materialize a match's subtree from fetched raw data and move it into
/// `NeedsAutomationChecks`. A match outside `NeedsData` is left untouched.
pub fn ingest_raw_match(osu_match: &mut Match, raw: RawMatchData) {
    if osu_match.processing_status != ProcessingStatus::NeedsData {
        tracing::debug!(
            match_id = osu_match.id,
            status = %osu_match.processing_status,
            "match not awaiting data; ignoring raw payload"
        );
        return;
    }

    osu_match.name = raw.name;
    osu_match.start_time = raw.start_time;
    osu_match.end_time = raw.end_time;
    osu_match.games = raw
        .games
        .into_iter()
        .map(|raw_game| {
            let mut game = Game::new(raw_game.id, raw_game.ruleset, raw_game.scoring_type);
            game.start_time = raw_game.start_time;
            game.end_time = raw_game.end_time;
            game.scores = raw_game
                .scores
                .into_iter()
                .map(|s| Score::new(s.id, s.player_id, s.score, s.mods, s.ruleset))
                .collect();
            game
        })
        .collect();
    osu_match.processing_status = osu_match.processing_status.advance();
}
