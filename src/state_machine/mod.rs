// State machine module for the verification pipeline
//
// Two independent status tracks per entity: `VerificationStatus` is the
// correctness judgment, `ProcessingStatus` is pipeline progress. The
// automation pipeline only ever assigns the provisional ("pre") verification
// statuses; confirmation to a terminal status is an external reviewer action.

pub mod states;

pub use states::{ProcessingStatus, VerificationStatus};
