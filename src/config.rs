//! # Pipeline Configuration
//!
//! Explicit, validated configuration for the verification pipeline. Defaults
//! mirror the tournament-acceptance rules the checks enforce; every value can
//! be overridden through `OTR_`-prefixed environment variables (for example
//! `OTR_BATCH_SIZE=50`).

use config::{Config, Environment};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Mods;

/// Tunable thresholds and worker settings for the verification pipeline.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Scores at or below this value are rejected.
    pub score_minimum: i64,

    /// Inclusive minimum ratio of pre-verified/verified matches a tournament
    /// needs to pass its aggregate check.
    pub verified_match_threshold: f64,

    /// Bitmask of mods that disqualify a score (raw osu! mod bits).
    pub invalid_mods: u32,

    /// Maximum number of tournaments claimed per sweep.
    pub batch_size: usize,

    /// Delay between sweep ticks of the pipeline worker.
    pub sweep_interval_ms: u64,
}

impl PipelineConfig {
    /// Load configuration from defaults layered with `OTR_`-prefixed
    /// environment variables.
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            .set_default("score_minimum", 1000_i64)?
            .set_default("verified_match_threshold", 0.8_f64)?
            .set_default("invalid_mods", i64::from(Mods::INVALID_FOR_TOURNAMENT.bits()))?
            .set_default("batch_size", 25_i64)?
            .set_default("sweep_interval_ms", 30_000_i64)?
            .add_source(Environment::with_prefix("OTR").try_parsing(true))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// The invalid-mods mask as a typed flag set. Unknown bits from
    /// configuration are dropped rather than guessed at.
    pub fn invalid_mods(&self) -> Mods {
        Mods::from_bits_truncate(self.invalid_mods)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            score_minimum: 1000,
            verified_match_threshold: 0.8,
            invalid_mods: Mods::INVALID_FOR_TOURNAMENT.bits(),
            batch_size: 25,
            sweep_interval_ms: 30_000,
        }
    }
}
