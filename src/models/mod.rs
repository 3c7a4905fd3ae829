//! # Entity Hierarchy Model
//!
//! In-memory representation of Tournament → Match → Game → Score. The tree is
//! fully materialized before the pipeline touches it: children are owned by
//! value, there are no back-pointers and no lazy loading inside check logic.
//! Parent context a check needs (the tournament's ruleset and abbreviation)
//! travels separately in [`crate::checks::CheckContext`].

pub mod enums;
pub mod game;
pub mod matches;
pub mod rejection;
pub mod score;
pub mod tournament;

use chrono::{DateTime, Utc};

pub use enums::{EntityKind, Mods, Ruleset, ScoringType};
pub use game::Game;
pub use matches::Match;
pub use rejection::{
    GameRejectionReason, MatchRejectionReason, ScoreRejectionReason, TournamentRejectionReason,
};
pub use score::Score;
pub use tournament::Tournament;

use crate::state_machine::{ProcessingStatus, VerificationStatus};

/// Status bookkeeping shared by every level of the hierarchy, letting the
/// generic processors advance any entity without knowing its shape.
pub trait PipelineEntity {
    fn kind(&self) -> EntityKind;
    fn id(&self) -> i64;
    fn verification_status(&self) -> VerificationStatus;
    fn set_verification_status(&mut self, status: VerificationStatus);
    fn processing_status(&self) -> ProcessingStatus;
    fn set_processing_status(&mut self, status: ProcessingStatus);
    /// Record a successful processing pass. Timestamps only move forward.
    fn touch(&mut self, now: DateTime<Utc>);
}

/// Serialize a flag set as its raw integer bits, the representation the
/// persistence collaborator stores. Unknown bits are dropped on read.
macro_rules! impl_bits_serde {
    ($flags:ty, $repr:ty) => {
        impl serde::Serialize for $flags {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> Result<S::Ok, S::Error> {
                serde::Serialize::serialize(&self.bits(), serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $flags {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> Result<Self, D::Error> {
                let bits = <$repr as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from_bits_truncate(bits))
            }
        }
    };
}

pub(crate) use impl_bits_serde;

macro_rules! impl_pipeline_entity {
    ($entity:ty, $kind:expr) => {
        impl crate::models::PipelineEntity for $entity {
            fn kind(&self) -> crate::models::EntityKind {
                $kind
            }

            fn id(&self) -> i64 {
                self.id
            }

            fn verification_status(&self) -> crate::state_machine::VerificationStatus {
                self.verification_status
            }

            fn set_verification_status(
                &mut self,
                status: crate::state_machine::VerificationStatus,
            ) {
                self.verification_status = status;
            }

            fn processing_status(&self) -> crate::state_machine::ProcessingStatus {
                self.processing_status
            }

            fn set_processing_status(&mut self, status: crate::state_machine::ProcessingStatus) {
                self.processing_status = status;
            }

            fn touch(&mut self, now: chrono::DateTime<chrono::Utc>) {
                match self.last_processing_date {
                    Some(prev) if prev > now => {}
                    _ => self.last_processing_date = Some(now),
                }
            }
        }
    };
}

pub(crate) use impl_pipeline_entity;
