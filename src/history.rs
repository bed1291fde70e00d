// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::scheduling::MAX_HISTORY;
use crate::types::entry::Entry;

/// The looked-up words, most recent first, capped at [`MAX_HISTORY`].
#[derive(Clone, PartialEq, Debug, Default)]
pub struct History {
    entries: Vec<Entry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already ordered list of entries, dropping any beyond the cap.
    pub fn from_entries(mut entries: Vec<Entry>) -> Self {
        entries.truncate(MAX_HISTORY);
        Self { entries }
    }

    /// Inserts an entry at the front. An entry for the same word (ignoring
    /// case) is removed first, and the oldest entries are evicted past the
    /// cap.
    pub fn add(&mut self, entry: Entry) {
        self.entries.retain(|existing| !existing.same_word(&entry));
        self.entries.insert(0, entry);
        if self.entries.len() > MAX_HISTORY {
            for evicted in self.entries.drain(MAX_HISTORY..) {
                log::debug!("Evicting {} from history.", evicted.id());
            }
        }
    }

    /// Removes the entry with the given ID, returning it.
    pub fn remove(&mut self, id: &str) -> Option<Entry> {
        let index = self.entries.iter().position(|entry| entry.id() == id)?;
        Some(self.entries.remove(index))
    }

    /// Replaces the entry with the same ID, keeping its position. Returns
    /// false if no such entry exists.
    pub fn replace(&mut self, entry: Entry) -> bool {
        match self.entries.iter_mut().find(|e| e.id() == entry.id()) {
            Some(slot) => {
                *slot = entry;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A copy of the whole collection.
    pub fn snapshot(&self) -> Vec<Entry> {
        self.entries.clone()
    }

    /// Replaces the whole collection with a snapshot.
    pub fn restore(&mut self, snapshot: Vec<Entry>) {
        self.entries = snapshot;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::sample_entry;
    use crate::types::timestamp::Timestamp;

    fn words(history: &History) -> Vec<&str> {
        history.entries().iter().map(|e| e.word()).collect()
    }

    #[test]
    fn test_add_prepends() {
        let mut history = History::new();
        history.add(sample_entry("apple", Timestamp::from_millis(1)));
        history.add(sample_entry("pear", Timestamp::from_millis(2)));
        assert_eq!(words(&history), vec!["pear", "apple"]);
    }

    #[test]
    fn test_add_dedupes_case_insensitively() {
        let mut history = History::new();
        history.add(sample_entry("Apple", Timestamp::from_millis(1)));
        history.add(sample_entry("pear", Timestamp::from_millis(2)));
        history.add(sample_entry("APPLE", Timestamp::from_millis(3)));
        assert_eq!(words(&history), vec!["APPLE", "pear"]);
        assert_eq!(history.entries()[0].created_at(), Timestamp::from_millis(3));
    }

    #[test]
    fn test_add_evicts_oldest() {
        let mut history = History::new();
        for i in 0..MAX_HISTORY {
            history.add(sample_entry(&format!("word{i}"), Timestamp::from_millis(i as i64)));
        }
        assert_eq!(history.len(), MAX_HISTORY);
        history.add(sample_entry("newest", Timestamp::from_millis(100)));
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.entries()[0].word(), "newest");
        assert!(history.entries().iter().all(|e| e.word() != "word0"));
        assert_eq!(history.entries()[MAX_HISTORY - 1].word(), "word1");
    }

    #[test]
    fn test_readd_at_capacity_does_not_evict() {
        let mut history = History::new();
        for i in 0..MAX_HISTORY {
            history.add(sample_entry(&format!("word{i}"), Timestamp::from_millis(i as i64)));
        }
        history.add(sample_entry("word0", Timestamp::from_millis(100)));
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.entries()[0].word(), "word0");
        assert_eq!(history.entries()[MAX_HISTORY - 1].word(), "word1");
    }

    #[test]
    fn test_remove() {
        let mut history = History::new();
        let apple = sample_entry("apple", Timestamp::from_millis(1));
        let id = apple.id().to_string();
        history.add(apple);
        history.add(sample_entry("pear", Timestamp::from_millis(2)));
        assert!(history.remove(&id).is_some());
        assert!(history.remove(&id).is_none());
        assert_eq!(words(&history), vec!["pear"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut history = History::new();
        let apple = sample_entry("apple", Timestamp::from_millis(1));
        history.add(apple.clone());
        history.add(sample_entry("pear", Timestamp::from_millis(2)));
        let mut updated = apple.clone();
        updated.reps = Some(3);
        assert!(history.replace(updated));
        assert_eq!(history.entries()[1].reps, Some(3));
        assert!(!history.replace(sample_entry("plum", Timestamp::from_millis(3))));
    }

    #[test]
    fn test_from_entries_truncates() {
        let entries: Vec<Entry> = (0..MAX_HISTORY + 5)
            .map(|i| sample_entry(&format!("w{i}"), Timestamp::from_millis(i as i64)))
            .collect();
        let history = History::from_entries(entries);
        assert_eq!(history.len(), MAX_HISTORY);
        assert_eq!(history.entries()[0].word(), "w0");
    }
}
