//! Versioned, copy-on-write quest list.

use std::sync::Arc;

use crate::models::Quest;

/// An ordered list of quests owned by the tracker.
///
/// Readers take cheap [`snapshot`](QuestList::snapshot)s. A mutation while a
/// snapshot is alive clones the backing vector first, so a snapshot never
/// changes under its holder. Every mutation bumps [`version`](QuestList::version).
#[derive(Debug, Clone, Default)]
pub struct QuestList {
    items: Arc<Vec<Quest>>,
    version: u64,
}

impl QuestList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn as_slice(&self) -> &[Quest] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Quest> {
        self.items.iter()
    }

    pub fn get(&self, id: u64) -> Option<&Quest> {
        self.items.iter().find(|q| q.id == id)
    }

    /// Shares the current contents without copying them.
    pub fn snapshot(&self) -> Arc<Vec<Quest>> {
        Arc::clone(&self.items)
    }

    fn items_mut(&mut self) -> &mut Vec<Quest> {
        self.version += 1;
        Arc::make_mut(&mut self.items)
    }

    pub(crate) fn push_front(&mut self, quest: Quest) {
        self.items_mut().insert(0, quest);
    }

    /// Inserts `quests` at the front, keeping their relative order.
    pub(crate) fn prepend(&mut self, quests: Vec<Quest>) {
        if quests.is_empty() {
            return;
        }
        self.items_mut().splice(0..0, quests);
    }

    pub(crate) fn remove(&mut self, id: u64) -> Option<Quest> {
        let index = self.items.iter().position(|q| q.id == id)?;
        Some(self.items_mut().remove(index))
    }

    /// Applies `f` to the quest with `id` and returns the updated record.
    pub(crate) fn update<F>(&mut self, id: u64, f: F) -> Option<&Quest>
    where
        F: FnOnce(&mut Quest),
    {
        let index = self.items.iter().position(|q| q.id == id)?;
        let quest = &mut self.items_mut()[index];
        f(&mut *quest);
        Some(quest)
    }

    /// Applies `f` to every quest matching `pred`, returning how many matched.
    ///
    /// Leaves the list (and its version) untouched when nothing matches.
    pub(crate) fn update_where<P, F>(&mut self, pred: P, mut f: F) -> usize
    where
        P: Fn(&Quest) -> bool,
        F: FnMut(&mut Quest),
    {
        if !self.items.iter().any(&pred) {
            return 0;
        }
        let mut count = 0;
        for quest in self.items_mut().iter_mut().filter(|q| pred(q)) {
            f(quest);
            count += 1;
        }
        count
    }

    /// Removes every quest matching `pred`, in list order.
    pub(crate) fn extract_where<P>(&mut self, pred: P) -> Vec<Quest>
    where
        P: Fn(&Quest) -> bool,
    {
        if !self.items.iter().any(&pred) {
            return Vec::new();
        }
        let (taken, kept): (Vec<Quest>, Vec<Quest>) =
            self.items_mut().drain(..).partition(|q| pred(q));
        *self.items_mut() = kept;
        taken
    }
}

impl From<Vec<Quest>> for QuestList {
    fn from(items: Vec<Quest>) -> Self {
        Self {
            items: Arc::new(items),
            version: 0,
        }
    }
}

impl<'a> IntoIterator for &'a QuestList {
    type Item = &'a Quest;
    type IntoIter = std::slice::Iter<'a, Quest>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn quest(id: u64) -> Quest {
        Quest::new(id, format!("Quest {id}"), Timestamp::UNIX_EPOCH)
    }

    fn ids(list: &QuestList) -> Vec<u64> {
        list.iter().map(|q| q.id).collect()
    }

    #[test]
    fn test_push_front_and_prepend_order() {
        let mut list = QuestList::new();
        list.push_front(quest(1));
        list.push_front(quest(2));
        list.prepend(vec![quest(5), quest(4)]);

        assert_eq!(ids(&list), vec![5, 4, 2, 1]);
    }

    #[test]
    fn test_snapshot_is_isolated_from_later_mutation() {
        let mut list = QuestList::from(vec![quest(1), quest(2)]);
        let before = list.snapshot();

        list.update(1, |q| q.elapsed_millis = 1_000);
        list.remove(2);

        assert_eq!(before.len(), 2);
        assert_eq!(before[0].elapsed_millis, 0);
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(1).map(|q| q.elapsed_millis), Some(1_000));
    }

    #[test]
    fn test_version_bumps_only_on_change() {
        let mut list = QuestList::from(vec![quest(1)]);
        assert_eq!(list.version(), 0);

        assert!(list.remove(99).is_none());
        assert!(list.update(99, |q| q.is_running = true).is_none());
        assert_eq!(list.update_where(|q| q.is_running, |_| {}), 0);
        assert!(list.extract_where(|q| q.id == 99).is_empty());
        list.prepend(Vec::new());
        assert_eq!(list.version(), 0);

        list.update(1, |q| q.is_running = true);
        assert!(list.version() > 0);
    }

    #[test]
    fn test_extract_where_keeps_relative_order() {
        let mut list = QuestList::from(vec![quest(4), quest(3), quest(2), quest(1)]);
        let taken = list.extract_where(|q| q.id % 2 == 0);

        assert_eq!(taken.iter().map(|q| q.id).collect::<Vec<_>>(), vec![4, 2]);
        assert_eq!(ids(&list), vec![3, 1]);
    }
}
