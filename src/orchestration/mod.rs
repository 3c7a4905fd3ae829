//! # Pipeline Orchestration
//!
//! Runs the correct set of ordered processing steps per entity and level,
//! bottom-up (Score → Game → Match → Tournament), without embedding business
//! logic itself — the rules live in [`crate::checks`]. Processing is
//! idempotent: a `Done` entity is detected and short-circuited, and a
//! processor that finds an entity outside its expected precondition status
//! performs no mutation and returns normally.

pub mod automation;
pub mod orchestrator;
pub mod verification;
pub mod worker;

pub use automation::AutomationChecksProcessor;
pub use orchestrator::{MatchCostResult, ProcessingSummary, TournamentProcessor};
pub use worker::{ingest_raw_match, PipelineWorker};
