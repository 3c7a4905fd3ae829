//! Verification-confirmation processor.
//!
//! An entity in `NeedsVerification` whose verdict was confirmed terminal by
//! an external reviewer advances to `Done`. One still carrying a provisional
//! verdict stays where it is — logged, not retried eagerly; a later sweep
//! picks it up after confirmation.

use chrono::Utc;

use crate::models::PipelineEntity;
use crate::state_machine::ProcessingStatus;

/// Returns true if the entity advanced to `Done`.
pub fn process<E: PipelineEntity>(entity: &mut E) -> bool {
    if entity.processing_status() != ProcessingStatus::NeedsVerification {
        return false;
    }

    if !entity.verification_status().is_terminal() {
        tracing::debug!(
            kind = %entity.kind(),
            id = entity.id(),
            status = %entity.verification_status(),
            "verdict still provisional; awaiting confirmation"
        );
        return false;
    }

    entity.set_processing_status(entity.processing_status().advance());
    entity.touch(Utc::now());
    tracing::debug!(
        kind = %entity.kind(),
        id = entity.id(),
        verdict = %entity.verification_status(),
        "verification confirmed; processing complete"
    );
    true
}
