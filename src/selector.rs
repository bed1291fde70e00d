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

use crate::scheduling::ensure_scheduling;
use crate::types::entry::Entry;
use crate::types::timestamp::Timestamp;

/// The entries due at `now`, most overdue first. Entries with the same due
/// time keep their history order.
pub fn due_entries(entries: &[Entry], now: Timestamp) -> Vec<Entry> {
    let mut due: Vec<Entry> = entries
        .iter()
        .cloned()
        .map(ensure_scheduling)
        .filter(|entry| entry.scheduling().is_due(now))
        .collect();
    due.sort_by_key(|entry| entry.scheduling().next_due);
    due
}

/// The next card to present, or `None` if nothing is due.
pub fn select_next(entries: &[Entry], now: Timestamp) -> Option<Entry> {
    due_entries(entries, now).into_iter().next()
}

/// The number of entries due at `now`.
pub fn due_count(entries: &[Entry], now: Timestamp) -> usize {
    entries
        .iter()
        .filter(|entry| entry.scheduling().is_due(now))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::grade_entry;
    use crate::helper::entry_due_at;
    use crate::types::grade::Grade;

    #[test]
    fn test_empty_collection() {
        assert_eq!(select_next(&[], Timestamp::EPOCH), None);
        assert_eq!(due_count(&[], Timestamp::EPOCH), 0);
    }

    #[test]
    fn test_nothing_due() {
        let entries = vec![entry_due_at("a", 200), entry_due_at("b", 300)];
        let now = Timestamp::from_millis(100);
        assert_eq!(select_next(&entries, now), None);
        assert_eq!(due_count(&entries, now), 0);
    }

    #[test]
    fn test_most_overdue_first() {
        let entries = vec![
            entry_due_at("later", 50),
            entry_due_at("future", 500),
            entry_due_at("earliest", 10),
        ];
        let now = Timestamp::from_millis(100);
        let next = select_next(&entries, now).map(|e| e.word().to_string());
        assert_eq!(next, Some("earliest".to_string()));
        let due: Vec<String> = due_entries(&entries, now)
            .iter()
            .map(|e| e.word().to_string())
            .collect();
        assert_eq!(due, vec!["earliest", "later"]);
    }

    #[test]
    fn test_due_boundary_is_inclusive() {
        let entries = vec![entry_due_at("a", 100)];
        assert_eq!(due_count(&entries, Timestamp::from_millis(99)), 0);
        assert_eq!(due_count(&entries, Timestamp::from_millis(100)), 1);
    }

    #[test]
    fn test_ties_keep_history_order() {
        let entries = vec![entry_due_at("first", 10), entry_due_at("second", 10)];
        let next = select_next(&entries, Timestamp::from_millis(10));
        assert_eq!(next.map(|e| e.word().to_string()), Some("first".to_string()));
    }

    #[test]
    fn test_legacy_entries_are_due() {
        let mut legacy = entry_due_at("legacy", 0);
        legacy.next_due = None;
        legacy.ease = None;
        let entries = vec![entry_due_at("future", 1_000), legacy];
        let next = select_next(&entries, Timestamp::from_millis(1)).unwrap();
        assert_eq!(next.word(), "legacy");
        assert!(next.has_scheduling());
    }

    #[test]
    fn test_due_count_follows_grading() {
        let now = Timestamp::from_millis(100);
        let mut entries = vec![entry_due_at("a", 10), entry_due_at("b", 20)];
        assert_eq!(due_count(&entries, now), 2);
        entries[0] = grade_entry(entries[0].clone(), Grade::Good, now);
        assert_eq!(due_count(&entries, now), 1);
        entries[1] = grade_entry(entries[1].clone(), Grade::Again, now);
        assert_eq!(due_count(&entries, now), 0);
        assert_eq!(due_count(&entries, now.plus_millis(1_000)), 1);
    }
}
