//! Display implementations for domain models.
//!
//! All output is markdown so the CLI renderer can style it.

use std::fmt;

use super::datetime::{Elapsed, LocalDateTime};
use crate::models::{Quest, QuestStatus, Settings};

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Quest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        let running = if self.is_ticking() { " (running)" } else { "" };
        writeln!(f, "- Elapsed: {}{running}", Elapsed(self.elapsed_millis))?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed_at))?;
        }
        if let Some(failed_at) = &self.failed_at {
            writeln!(f, "- Failed: {}", LocalDateTime(failed_at))?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Settings")?;
        writeln!(f)?;
        writeln!(
            f,
            "- Auto-fail after 24h: {}",
            if self.auto_fail_after_24h { "on" } else { "off" }
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn quest() -> Quest {
        Quest::new(42, "Buy milk", Timestamp::from_second(1_735_689_600).unwrap())
    }

    #[test]
    fn test_active_quest_display() {
        let mut quest = quest();
        quest.elapsed_millis = 65_000;
        quest.is_running = true;
        let output = quest.to_string();

        assert!(output.starts_with("### 42. Buy milk (○ Active)"));
        assert!(output.contains("- Elapsed: 00:01:05 (running)"));
        assert!(output.contains("- Created: "));
        assert!(!output.contains("- Completed:"));
        assert!(!output.contains("- Failed:"));
    }

    #[test]
    fn test_finished_quest_display() {
        let now = Timestamp::from_second(1_735_693_200).unwrap();

        let completed = quest().into_completed(now).to_string();
        assert!(completed.contains("(✓ Completed)"));
        assert!(completed.contains("- Completed: "));
        assert!(!completed.contains("(running)"));

        let failed = quest().into_failed(now).to_string();
        assert!(failed.contains("(✗ Failed)"));
        assert!(failed.contains("- Failed: "));
    }

    #[test]
    fn test_settings_display() {
        let output = Settings {
            auto_fail_after_24h: false,
        }
        .to_string();
        assert!(output.contains("Auto-fail after 24h: off"));
        assert_eq!(QuestStatus::Failed.to_string(), "FAILED");
    }
}
