//! # otr-core
//!
//! Automation-check and verification pipeline core for competitive osu!
//! tournament data.
//!
//! ## Overview
//!
//! Tournament data arrives as a four-level hierarchy (Tournament → Match →
//! Game → Score). Before any of it may feed the downstream rating
//! calculation, every record has to earn trust: ordered automation checks run
//! per entity level, rejection reasons accumulate as bit flags, and a
//! verification/processing state machine tracks each entity from "needs data"
//! to a terminal, human-reviewable verdict. Once a match is verified, a pure
//! statistical function produces a per-player performance scalar (the "match
//! cost") from its verified games.
//!
//! ## Module Organization
//!
//! - [`models`] - Entity hierarchy, mods, and rejection-reason flag sets
//! - [`state_machine`] - Verification and processing status transitions
//! - [`checks`] - Automation check framework and per-level check families
//! - [`orchestration`] - Per-level processors, tournament orchestrator, sweep worker
//! - [`stats`] - Match cost calculator
//! - [`services`] - Collaborator traits (persistence, data source, rating sink)
//! - [`config`] - Pipeline configuration
//! - [`error`] - Structured error handling
//!
//! ## Boundaries
//!
//! This crate is a library invoked by a scheduling host. The web API layer,
//! the osu! API client, the database, and the rating engine are external
//! collaborators reached through the traits in [`services`]; all check and
//! calculator logic is synchronous, in-memory, and CPU-only.

pub mod checks;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod orchestration;
pub mod services;
pub mod state_machine;
pub mod stats;

pub use config::PipelineConfig;
pub use error::{PipelineError, Result};
pub use models::{Game, Match, Score, Tournament};
pub use orchestration::{PipelineWorker, ProcessingSummary, TournamentProcessor};
pub use state_machine::{ProcessingStatus, VerificationStatus};
pub use stats::calculate_match_costs;
