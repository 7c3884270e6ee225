//! Feedback messages for actions that may or may not change anything.

use std::fmt;

/// Outcome line printed after a tracker action.
///
/// Tracker actions on unknown or finished quests are silent no-ops, so the
/// CLI uses this to tell the user what (if anything) happened.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
        }
    }

    /// Status for an action on `id` that found nothing to act on.
    pub fn no_active_quest(id: u64) -> Self {
        Self::failure(format!("No active quest with ID {id}"))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", if self.success { "Success:" } else { "Error:" }, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Quest completed");
        assert_eq!(success.to_string(), "Success: Quest completed\n");

        let failure = OperationStatus::no_active_quest(7);
        assert_eq!(failure.to_string(), "Error: No active quest with ID 7\n");
    }
}
