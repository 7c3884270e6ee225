//! Status enumeration for quests.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of quest statuses.
///
/// `Active` is the only non-terminal state. Completed and failed quests live
/// in the history list and are never transitioned again.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestStatus {
    /// Quest is on today's list and may be timed or completed
    #[default]
    Active,

    /// Quest was finished by the user
    Completed,

    /// Quest was given up, cleared, or expired
    Failed,
}

impl FromStr for QuestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(QuestStatus::Active),
            "completed" => Ok(QuestStatus::Completed),
            "failed" => Ok(QuestStatus::Failed),
            _ => Err(format!("Invalid quest status: {s}")),
        }
    }
}

impl QuestStatus {
    /// Persisted string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestStatus::Active => "ACTIVE",
            QuestStatus::Completed => "COMPLETED",
            QuestStatus::Failed => "FAILED",
        }
    }

    /// Whether the status is terminal (the quest belongs in history).
    pub fn is_terminal(&self) -> bool {
        !matches!(self, QuestStatus::Active)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quest_core::models::QuestStatus;
    ///
    /// assert_eq!(QuestStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(QuestStatus::Failed.with_icon(), "✗ Failed");
    /// assert_eq!(QuestStatus::Active.with_icon(), "○ Active");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            QuestStatus::Active => "○ Active",
            QuestStatus::Completed => "✓ Completed",
            QuestStatus::Failed => "✗ Failed",
        }
    }
}
