//! Structured error handling for the verification pipeline.
//!
//! A failing automation check is never an error: it is recorded as a
//! rejection flag and is a normal pipeline outcome. The variants here cover
//! the remaining taxonomy: programmer/config mistakes that must fail fast,
//! and transient collaborator failures that leave the entity untouched so a
//! later sweep can retry.

/// Errors surfaced by the pipeline orchestrator and its collaborators.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// An entity-kind name outside the known set. Programmer or configuration
    /// error; never swallowed.
    #[error("unsupported entity type: {0}")]
    UnsupportedEntity(String),

    #[error("configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    /// Transient persistence failure; the entity's status is left unchanged.
    #[error("persistence failure: {0}")]
    Persistence(#[source] anyhow::Error),

    /// Transient data-source failure; the entity remains in `NeedsData`.
    #[error("data source failure: {0}")]
    DataSource(#[source] anyhow::Error),

    #[error("rating delivery failure for match {match_id}: {source}")]
    RatingDelivery {
        match_id: i64,
        #[source]
        source: anyhow::Error,
    },

    /// The hierarchy for one tournament could not be loaded. Aborts that
    /// tournament's pass only, never the batch.
    #[error("failed to load hierarchy for tournament {tournament_id}: {source}")]
    HierarchyUnavailable {
        tournament_id: i64,
        #[source]
        source: anyhow::Error,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
