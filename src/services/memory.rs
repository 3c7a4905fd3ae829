//! In-memory collaborator implementations, used by the worker tests and as
//! a reference for hosts wiring up real adapters.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};

use crate::models::Tournament;
use crate::services::{DataSource, HierarchyStore, RatingSink, RawMatchData};

/// Hash-map-backed [`HierarchyStore`]. "Due" means the tournament has not
/// reached `Done`.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tournaments: RwLock<HashMap<i64, Tournament>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, tournament: Tournament) {
        self.tournaments.write().insert(tournament.id, tournament);
    }

    pub fn get(&self, tournament_id: i64) -> Option<Tournament> {
        self.tournaments.read().get(&tournament_id).cloned()
    }

    /// Apply a mutation outside the pipeline, e.g. a reviewer confirming
    /// provisional verdicts between sweeps.
    pub fn update<F: FnOnce(&mut Tournament)>(&self, tournament_id: i64, f: F) {
        if let Some(tournament) = self.tournaments.write().get_mut(&tournament_id) {
            f(tournament);
        }
    }
}

#[async_trait]
impl HierarchyStore for InMemoryStore {
    async fn due_tournaments(&self, limit: usize) -> anyhow::Result<Vec<i64>> {
        let mut ids: Vec<i64> = self
            .tournaments
            .read()
            .values()
            .filter(|t| !t.processing_status.is_done())
            .map(|t| t.id)
            .collect();
        ids.sort_unstable();
        ids.truncate(limit);
        Ok(ids)
    }

    async fn load_hierarchy(&self, tournament_id: i64) -> anyhow::Result<Tournament> {
        self.tournaments
            .read()
            .get(&tournament_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("tournament {tournament_id} not found"))
    }

    async fn save(&self, tournament: &Tournament) -> anyhow::Result<()> {
        self.tournaments
            .write()
            .insert(tournament.id, tournament.clone());
        Ok(())
    }
}

/// Map of pre-seeded raw lobby payloads; anything absent stays `NeedsData`.
#[derive(Debug, Default)]
pub struct StaticDataSource {
    raw: RwLock<HashMap<i64, RawMatchData>>,
}

impl StaticDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, match_id: i64, raw: RawMatchData) {
        self.raw.write().insert(match_id, raw);
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch_raw_match(&self, match_id: i64) -> anyhow::Result<Option<RawMatchData>> {
        Ok(self.raw.read().get(&match_id).cloned())
    }
}

/// Records every published cost payload for assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    published: Mutex<Vec<(i64, HashMap<i64, f64>)>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<(i64, HashMap<i64, f64>)> {
        self.published.lock().clone()
    }
}

#[async_trait]
impl RatingSink for RecordingSink {
    async fn publish(&self, match_id: i64, costs: &HashMap<i64, f64>) -> anyhow::Result<()> {
        self.published.lock().push((match_id, costs.clone()));
        Ok(())
    }
}
