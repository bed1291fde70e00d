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

use crate::types::entry::Entry;
use crate::types::timestamp::Timestamp;

/// The ease of a card that has never been graded.
pub const DEFAULT_EASE: f64 = 2.5;

/// Ease is never allowed to drop below this.
pub const MIN_EASE: f64 = 1.3;

/// The interval after an `Again` grade, in milliseconds.
pub const AGAIN_INTERVAL: u64 = 1_000;

/// The smallest interval a `Hard` or matured `Good` grade can produce (3
/// minutes).
pub const HARD_MIN_INTERVAL: u64 = 180_000;

/// The interval a new card graduates to on its first `Good` grade (30
/// minutes).
pub const GOOD_NEW_INTERVAL: u64 = 1_800_000;

/// The maximum number of entries kept in history.
pub const MAX_HISTORY: usize = 42;

/// The review state of an entry, with every field present.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Scheduling {
    /// Multiplier applied to the interval on a successful review.
    pub ease: f64,
    /// The last scheduled gap in milliseconds. Zero means the card is new.
    pub interval: u64,
    /// The entry is eligible for review at or after this time.
    pub next_due: Timestamp,
    /// Consecutive `Good` grades.
    pub reps: u32,
}

impl Scheduling {
    /// The state of a brand new card, due at `now`.
    pub fn new(now: Timestamp) -> Self {
        Self {
            ease: DEFAULT_EASE,
            interval: 0,
            next_due: now,
            reps: 0,
        }
    }

    pub fn is_new(&self) -> bool {
        self.interval == 0
    }

    pub fn is_due(&self, now: Timestamp) -> bool {
        self.next_due <= now
    }
}

impl Entry {
    /// Reads the review state, substituting defaults for missing fields. A
    /// missing due time means the entry is due immediately.
    pub fn scheduling(&self) -> Scheduling {
        Scheduling {
            ease: self.ease.unwrap_or(DEFAULT_EASE),
            interval: self.interval.unwrap_or(0),
            next_due: self.next_due.unwrap_or(Timestamp::EPOCH),
            reps: self.reps.unwrap_or(0),
        }
    }

    pub fn set_scheduling(&mut self, scheduling: Scheduling) {
        self.ease = Some(scheduling.ease);
        self.interval = Some(scheduling.interval);
        self.next_due = Some(scheduling.next_due);
        self.reps = Some(scheduling.reps);
    }

    /// Whether every scheduling field is present.
    pub fn has_scheduling(&self) -> bool {
        self.ease.is_some() && self.interval.is_some() && self.next_due.is_some() && self.reps.is_some()
    }
}

/// Fills in any missing scheduling field with its default, leaving present
/// fields untouched. Idempotent.
pub fn ensure_scheduling(mut entry: Entry) -> Entry {
    if !entry.has_scheduling() {
        let scheduling = entry.scheduling();
        entry.set_scheduling(scheduling);
    }
    entry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::sample_entry;

    fn legacy_entry() -> Entry {
        let mut entry = sample_entry("apple", Timestamp::from_millis(5_000));
        entry.next_due = None;
        entry.interval = None;
        entry.ease = None;
        entry.reps = None;
        entry
    }

    #[test]
    fn test_new_entry_is_fully_scheduled() {
        let now = Timestamp::from_millis(5_000);
        let entry = sample_entry("apple", now);
        assert!(entry.has_scheduling());
        assert_eq!(entry.scheduling(), Scheduling::new(now));
        assert!(entry.scheduling().is_new());
    }

    #[test]
    fn test_ensure_scheduling_fills_defaults() {
        let entry = ensure_scheduling(legacy_entry());
        assert!(entry.has_scheduling());
        assert_eq!(entry.ease, Some(DEFAULT_EASE));
        assert_eq!(entry.interval, Some(0));
        assert_eq!(entry.next_due, Some(Timestamp::EPOCH));
        assert_eq!(entry.reps, Some(0));
    }

    #[test]
    fn test_ensure_scheduling_keeps_present_fields() {
        let mut entry = legacy_entry();
        entry.ease = Some(1.9);
        entry.reps = Some(4);
        let entry = ensure_scheduling(entry);
        assert_eq!(entry.ease, Some(1.9));
        assert_eq!(entry.reps, Some(4));
        assert_eq!(entry.interval, Some(0));
        assert_eq!(entry.next_due, Some(Timestamp::EPOCH));
    }

    #[test]
    fn test_ensure_scheduling_is_idempotent() {
        let mut partial = legacy_entry();
        partial.interval = Some(60_000);
        for entry in [legacy_entry(), partial, sample_entry("pear", Timestamp::from_millis(9))] {
            let once = ensure_scheduling(entry);
            let twice = ensure_scheduling(once.clone());
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_missing_due_time_is_due() {
        let entry = legacy_entry();
        assert!(entry.scheduling().is_due(Timestamp::EPOCH));
    }
}
