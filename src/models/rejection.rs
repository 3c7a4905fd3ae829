//! # Rejection Reason Registry
//!
//! Per-level bit-flag sets naming every independent reason a record failed
//! validation. Flags are additive: checks OR new failures in through the
//! entities' `flag(...)` methods and nothing in this core ever clears a bit,
//! so re-running the pipeline can only grow a flag set (monotonic
//! accumulation).

use crate::models::impl_bits_serde;
use crate::models::EntityKind;

bitflags::bitflags! {
    /// Reasons a score failed its automation checks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ScoreRejectionReason: u32 {
        const SCORE_BELOW_MINIMUM = 1;
        const INVALID_MODS = 1 << 1;
        const RULESET_MISMATCH = 1 << 2;
    }
}

bitflags::bitflags! {
    /// Reasons a game failed its automation checks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct GameRejectionReason: u32 {
        const NO_SCORES = 1;
        const TOO_FEW_VALID_SCORES = 1 << 1;
        const RULESET_MISMATCH = 1 << 2;
        const INVALID_SCORING_TYPE = 1 << 3;
        const NO_END_TIME = 1 << 4;
    }
}

bitflags::bitflags! {
    /// Reasons a match failed its automation checks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MatchRejectionReason: u32 {
        const NO_GAMES = 1;
        const NO_VALID_GAMES = 1 << 1;
        const NAME_PREFIX_MISMATCH = 1 << 2;
        const NO_END_TIME = 1 << 3;
    }
}

bitflags::bitflags! {
    /// Reasons a tournament failed its aggregate checks.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TournamentRejectionReason: u32 {
        const NO_VERIFIED_MATCHES = 1;
        const NOT_ENOUGH_VERIFIED_MATCHES = 1 << 1;
    }
}

impl_bits_serde!(ScoreRejectionReason, u32);
impl_bits_serde!(GameRejectionReason, u32);
impl_bits_serde!(MatchRejectionReason, u32);
impl_bits_serde!(TournamentRejectionReason, u32);

macro_rules! impl_flag_names {
    ($($flags:ty),+) => {
        $(
            impl $flags {
                /// Names of the set flags, for structured log fields.
                pub fn names(&self) -> Vec<&'static str> {
                    self.iter_names().map(|(name, _)| name).collect()
                }
            }
        )+
    };
}

impl_flag_names!(
    ScoreRejectionReason,
    GameRejectionReason,
    MatchRejectionReason,
    TournamentRejectionReason
);

/// Every flag name defined for one entity level, for audit listings.
pub fn flag_names_for(kind: EntityKind) -> Vec<&'static str> {
    match kind {
        EntityKind::Tournament => TournamentRejectionReason::all().names(),
        EntityKind::Match => MatchRejectionReason::all().names(),
        EntityKind::Game => GameRejectionReason::all().names(),
        EntityKind::Score => ScoreRejectionReason::all().names(),
    }
}
