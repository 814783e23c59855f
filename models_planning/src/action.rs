use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Outcome state of a write action, rendered by the UI as-is.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, EnumString, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ActionStatus {
    /// Nothing has happened yet.
    Idle,
    /// The write went through.
    Success,
    /// The write failed; the message says why.
    Error,
}

/// Result envelope planner write actions hand to the presentation layer.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ActionResult {
    /// Outcome state.
    pub status: ActionStatus,
    /// Human-readable message to show next to the control.
    pub message: String,
}

impl ActionResult {
    /// The initial, nothing-happened state.
    pub fn idle() -> Self {
        Self {
            status: ActionStatus::Idle,
            message: String::new(),
        }
    }

    /// A successful write with its confirmation message.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: ActionStatus::Success,
            message: message.into(),
        }
    }

    /// A failed write with the reason to show.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ActionStatus::Error,
            message: message.into(),
        }
    }
}
