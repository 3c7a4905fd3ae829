//! Game-domain enums shared across the hierarchy.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PipelineError;
use crate::models::impl_bits_serde;

/// osu! ruleset (game mode) an entity was played under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ruleset {
    #[default]
    Osu,
    Taiko,
    Catch,
    Mania,
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Osu => write!(f, "osu"),
            Self::Taiko => write!(f, "taiko"),
            Self::Catch => write!(f, "catch"),
            Self::Mania => write!(f, "mania"),
        }
    }
}

/// Win condition a game was scored with. Tournament lobbies are expected to
/// run ScoreV2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringType {
    Score,
    Accuracy,
    Combo,
    #[default]
    ScoreV2,
}

bitflags::bitflags! {
    /// osu! mod flags, using the client's raw bit values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Mods: u32 {
        const NO_FAIL = 1;
        const EASY = 1 << 1;
        const TOUCH_DEVICE = 1 << 2;
        const HIDDEN = 1 << 3;
        const HARD_ROCK = 1 << 4;
        const SUDDEN_DEATH = 1 << 5;
        const DOUBLE_TIME = 1 << 6;
        const RELAX = 1 << 7;
        const HALF_TIME = 1 << 8;
        const NIGHTCORE = 1 << 9;
        const FLASHLIGHT = 1 << 10;
        const AUTOPLAY = 1 << 11;
        const SPUN_OUT = 1 << 12;
        const AUTOPILOT = 1 << 13;
        const PERFECT = 1 << 14;
        const SCORE_V2 = 1 << 29;

        /// Mods that disqualify a score from tournament verification.
        const INVALID_FOR_TOURNAMENT = Self::SUDDEN_DEATH.bits()
            | Self::PERFECT.bits()
            | Self::RELAX.bits()
            | Self::AUTOPILOT.bits()
            | Self::AUTOPLAY.bits();
    }
}

impl_bits_serde!(Mods, u32);

/// The four levels of the entity hierarchy, used for logging and for
/// routing level-keyed requests (audit listings, check registries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Tournament,
    Match,
    Game,
    Score,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tournament => write!(f, "tournament"),
            Self::Match => write!(f, "match"),
            Self::Game => write!(f, "game"),
            Self::Score => write!(f, "score"),
        }
    }
}

impl std::str::FromStr for EntityKind {
    type Err = PipelineError;

    /// An unknown entity kind is a programmer or configuration error, so it
    /// fails fast instead of being silently swallowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tournament" => Ok(Self::Tournament),
            "match" => Ok(Self::Match),
            "game" => Ok(Self::Game),
            "score" => Ok(Self::Score),
            other => Err(PipelineError::UnsupportedEntity(other.to_string())),
        }
    }
}
