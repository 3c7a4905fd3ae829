use serde::{Deserialize, Serialize};
use std::fmt;

/// Correctness judgment for an entity at any level of the hierarchy.
///
/// `None` is the only legal creation state. The automation pipeline assigns
/// only the provisional variants; an external reviewer confirms a
/// provisional status to its terminal counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    /// No automated verdict yet
    #[default]
    None,
    /// Automation checks failed; awaiting human confirmation
    PreRejected,
    /// Automation checks passed; awaiting human confirmation
    PreVerified,
    /// Terminal: record is untrusted
    Rejected,
    /// Terminal: record is trusted
    Verified,
}

impl VerificationStatus {
    /// Check if this is a terminal state (no further transitions allowed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Verified)
    }

    /// Check if this is a machine-computed provisional outcome
    pub fn is_pre_status(&self) -> bool {
        matches!(self, Self::PreRejected | Self::PreVerified)
    }

    /// Check if this status counts as trusted-or-trending-trusted, the set
    /// aggregate checks treat as "valid" children
    pub fn is_verified_like(&self) -> bool {
        matches!(self, Self::PreVerified | Self::Verified)
    }

    /// Map a provisional status to its terminal counterpart. Terminal and
    /// `None` statuses are returned unchanged; confirmation never runs
    /// backwards.
    pub fn confirm(self) -> Self {
        match self {
            Self::PreRejected => Self::Rejected,
            Self::PreVerified => Self::Verified,
            other => other,
        }
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::PreRejected => write!(f, "pre_rejected"),
            Self::PreVerified => write!(f, "pre_verified"),
            Self::Rejected => write!(f, "rejected"),
            Self::Verified => write!(f, "verified"),
        }
    }
}

impl std::str::FromStr for VerificationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "pre_rejected" => Ok(Self::PreRejected),
            "pre_verified" => Ok(Self::PreVerified),
            "rejected" => Ok(Self::Rejected),
            "verified" => Ok(Self::Verified),
            _ => Err(format!("Invalid verification status: {s}")),
        }
    }
}

/// Pipeline-progress state, independent of the correctness judgment.
///
/// Only ever advances forward; re-opening a `Done` entity is an external
/// administrative action, not something this core performs.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ProcessingStatus {
    /// Raw external data not yet fetched or parsed
    #[default]
    NeedsData,
    /// Data present; automation checks have not yet produced a verdict
    NeedsAutomationChecks,
    /// Checks ran; awaiting confirmation of the provisional verdict
    NeedsVerification,
    /// Terminal; no further processing unless explicitly reset
    Done,
}

impl ProcessingStatus {
    /// The next state in the forward-only progression. `Done` is absorbing.
    pub fn advance(self) -> Self {
        match self {
            Self::NeedsData => Self::NeedsAutomationChecks,
            Self::NeedsAutomationChecks => Self::NeedsVerification,
            Self::NeedsVerification => Self::Done,
            Self::Done => Self::Done,
        }
    }

    /// Check if this is the terminal state
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if child-level statuses can be considered stable for aggregate
    /// checks (the entity has at least received its automated verdict)
    pub fn has_settled(&self) -> bool {
        *self >= Self::NeedsVerification
    }
}

impl fmt::Display for ProcessingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NeedsData => write!(f, "needs_data"),
            Self::NeedsAutomationChecks => write!(f, "needs_automation_checks"),
            Self::NeedsVerification => write!(f, "needs_verification"),
            Self::Done => write!(f, "done"),
        }
    }
}

impl std::str::FromStr for ProcessingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "needs_data" => Ok(Self::NeedsData),
            "needs_automation_checks" => Ok(Self::NeedsAutomationChecks),
            "needs_verification" => Ok(Self::NeedsVerification),
            "done" => Ok(Self::Done),
            _ => Err(format!("Invalid processing status: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_status_terminal_check() {
        assert!(VerificationStatus::Rejected.is_terminal());
        assert!(VerificationStatus::Verified.is_terminal());
        assert!(!VerificationStatus::None.is_terminal());
        assert!(!VerificationStatus::PreRejected.is_terminal());
        assert!(!VerificationStatus::PreVerified.is_terminal());
    }

    #[test]
    fn test_confirm_maps_provisional_to_terminal() {
        assert_eq!(
            VerificationStatus::PreVerified.confirm(),
            VerificationStatus::Verified
        );
        assert_eq!(
            VerificationStatus::PreRejected.confirm(),
            VerificationStatus::Rejected
        );
        // Terminal and unprocessed statuses are untouched
        assert_eq!(
            VerificationStatus::Verified.confirm(),
            VerificationStatus::Verified
        );
        assert_eq!(VerificationStatus::None.confirm(), VerificationStatus::None);
    }

    #[test]
    fn test_processing_status_forward_only() {
        let mut status = ProcessingStatus::NeedsData;
        let mut seen = vec![status];
        loop {
            let next = status.advance();
            if next == status {
                break;
            }
            assert!(next > status, "advance must move forward");
            status = next;
            seen.push(status);
        }
        assert_eq!(
            seen,
            vec![
                ProcessingStatus::NeedsData,
                ProcessingStatus::NeedsAutomationChecks,
                ProcessingStatus::NeedsVerification,
                ProcessingStatus::Done,
            ]
        );
        assert_eq!(ProcessingStatus::Done.advance(), ProcessingStatus::Done);
    }

    #[test]
    fn test_settled_statuses() {
        assert!(!ProcessingStatus::NeedsData.has_settled());
        assert!(!ProcessingStatus::NeedsAutomationChecks.has_settled());
        assert!(ProcessingStatus::NeedsVerification.has_settled());
        assert!(ProcessingStatus::Done.has_settled());
    }

    #[test]
    fn test_state_serde() {
        let status = VerificationStatus::PreVerified;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"pre_verified\"");
        let parsed: VerificationStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, status);

        assert_eq!(
            "needs_automation_checks".parse::<ProcessingStatus>().unwrap(),
            ProcessingStatus::NeedsAutomationChecks
        );
        assert_eq!(ProcessingStatus::Done.to_string(), "done");
    }
}
