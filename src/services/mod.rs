//! # Collaborator Boundary
//!
//! The pipeline is a library; everything I/O-bound lives behind these
//! traits. The osu! API client, the database, and the rating engine are
//! external systems — the core only requires fetch, load/save, and publish
//! capabilities. Boundary failures surface as `anyhow::Error` and are mapped
//! into [`crate::error::PipelineError`] by the worker, which leaves entity
//! state untouched so a later sweep can retry.

pub mod memory;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Mods, Ruleset, ScoringType, Tournament};

pub use memory::{InMemoryStore, RecordingSink, StaticDataSource};

/// Raw lobby data as parsed by the (out-of-scope) game-data API client.
/// Deliberately minimal: just what ingestion needs to materialize the
/// Game/Score subtree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawMatchData {
    pub name: String,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub games: Vec<RawGame>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGame {
    pub id: i64,
    pub ruleset: Ruleset,
    pub scoring_type: ScoringType,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub scores: Vec<RawScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawScore {
    pub id: i64,
    pub player_id: i64,
    pub score: i64,
    pub mods: Mods,
    pub ruleset: Ruleset,
}

/// Fetch capability for raw lobby data. `Ok(None)` means the data is not
/// available yet — the match stays in `NeedsData`, which is not an error.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_raw_match(&self, match_id: i64) -> anyhow::Result<Option<RawMatchData>>;
}

/// Load/save of fully materialized tournament hierarchies. The store owns
/// the locking/transaction discipline guaranteeing at most one active
/// pipeline pass per entity; saves must not partially persist a flag set.
#[async_trait]
pub trait HierarchyStore: Send + Sync {
    /// Tournament ids due for processing, bounded by `limit`.
    async fn due_tournaments(&self, limit: usize) -> anyhow::Result<Vec<i64>>;

    /// Load one tournament with matches, games, and scores materialized.
    async fn load_hierarchy(&self, tournament_id: i64) -> anyhow::Result<Tournament>;

    async fn save(&self, tournament: &Tournament) -> anyhow::Result<()>;
}

/// Receives `(match_id, {player_id: cost})` once a match's cost is computed.
/// Delivery is at-least-once across sweeps; implementations should treat
/// `match_id` as an idempotency key.
#[async_trait]
pub trait RatingSink: Send + Sync {
    async fn publish(&self, match_id: i64, costs: &HashMap<i64, f64>) -> anyhow::Result<()>;
}
