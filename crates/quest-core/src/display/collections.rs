//! Collection wrapper types for displaying quest lists.
//!
//! Both wrappers hold the shared snapshot handed out by the tracker, so
//! formatting never borrows the tracker itself.

use std::{collections::BTreeMap, fmt, sync::Arc};

use super::datetime::{Elapsed, LocalDate};
use crate::models::{Quest, QuestStatus};

/// Today's active quests, newest first.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
///
/// use jiff::Timestamp;
/// use quest_core::{display::ActiveQuests, models::Quest};
///
/// let quests = ActiveQuests(Arc::new(vec![Quest::new(1, "Stretch", Timestamp::now())]));
/// assert!(quests.to_string().contains("Stretch"));
/// assert_eq!(ActiveQuests(Arc::new(vec![])).to_string(), "No active quests.\n");
/// ```
pub struct ActiveQuests(pub Arc<Vec<Quest>>);

impl fmt::Display for ActiveQuests {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No active quests.")
        } else {
            for quest in self.0.iter() {
                write!(f, "{quest}")?;
            }
            Ok(())
        }
    }
}

/// The history list, split into completed and failed sections and grouped by
/// the local date each quest finished, most recent date first.
pub struct QuestHistory(pub Arc<Vec<Quest>>);

impl QuestHistory {
    /// Groups quests of one status by finish date, keeping list order within
    /// a date.
    fn group_by_date(&self, status: QuestStatus) -> BTreeMap<String, Vec<&Quest>> {
        let mut groups: BTreeMap<String, Vec<&Quest>> = BTreeMap::new();
        for quest in self.0.iter().filter(|q| q.status == status) {
            let at = quest.finished_at().unwrap_or(quest.created_at);
            groups
                .entry(LocalDate(&at).to_string())
                .or_default()
                .push(quest);
        }
        groups
    }

    fn fmt_section(
        &self,
        f: &mut fmt::Formatter<'_>,
        heading: &str,
        status: QuestStatus,
    ) -> fmt::Result {
        let groups = self.group_by_date(status);
        if groups.is_empty() {
            return Ok(());
        }

        writeln!(f, "## {heading}")?;
        writeln!(f)?;
        for (date, quests) in groups.iter().rev() {
            writeln!(f, "### {date}")?;
            writeln!(f)?;
            for quest in quests {
                match quest.status {
                    QuestStatus::Failed => {
                        writeln!(f, "- {}. {} (Failed)", quest.id, quest.title)?
                    }
                    _ => writeln!(
                        f,
                        "- {}. {} ({})",
                        quest.id,
                        quest.title,
                        Elapsed(quest.elapsed_millis)
                    )?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for QuestHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No history yet.");
        }
        self.fmt_section(f, "Completed Quests", QuestStatus::Completed)?;
        self.fmt_section(f, "Failed Quests", QuestStatus::Failed)
    }
}
