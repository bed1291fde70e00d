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

use crate::scheduling::AGAIN_INTERVAL;
use crate::scheduling::GOOD_NEW_INTERVAL;
use crate::scheduling::HARD_MIN_INTERVAL;
use crate::scheduling::MIN_EASE;
use crate::scheduling::Scheduling;
use crate::scheduling::ensure_scheduling;
use crate::types::entry::Entry;
use crate::types::grade::Grade;
use crate::types::timestamp::Timestamp;

/// How much ease an `Again` grade costs.
const AGAIN_EASE_PENALTY: f64 = 0.2;

/// How much ease a `Hard` grade costs.
const HARD_EASE_PENALTY: f64 = 0.15;

/// How much a `Hard` grade stretches the interval.
const HARD_INTERVAL_FACTOR: f64 = 1.2;

/// The card was forgotten: start over, due again in a second.
pub fn again(s: Scheduling, now: Timestamp) -> Scheduling {
    Scheduling {
        ease: penalize(s.ease, AGAIN_EASE_PENALTY),
        interval: AGAIN_INTERVAL,
        next_due: now.plus_millis(AGAIN_INTERVAL),
        reps: 0,
    }
}

/// The card was recalled with difficulty. The streak is kept.
pub fn hard(s: Scheduling, now: Timestamp) -> Scheduling {
    let interval = scale(s.interval, HARD_INTERVAL_FACTOR).max(HARD_MIN_INTERVAL);
    Scheduling {
        ease: penalize(s.ease, HARD_EASE_PENALTY),
        interval,
        next_due: now.plus_millis(interval),
        reps: s.reps,
    }
}

/// The card was recalled. New cards graduate to a fixed interval, matured
/// cards grow by their ease.
pub fn good(s: Scheduling, now: Timestamp) -> Scheduling {
    let interval = if s.is_new() {
        GOOD_NEW_INTERVAL
    } else {
        scale(s.interval, s.ease).max(HARD_MIN_INTERVAL)
    };
    Scheduling {
        ease: s.ease,
        interval,
        next_due: now.plus_millis(interval),
        reps: s.reps.saturating_add(1),
    }
}

pub fn update(s: Scheduling, grade: Grade, now: Timestamp) -> Scheduling {
    match grade {
        Grade::Again => again(s, now),
        Grade::Hard => hard(s, now),
        Grade::Good => good(s, now),
    }
}

/// Grades an entry, normalizing legacy scheduling state first.
pub fn grade_entry(entry: Entry, grade: Grade, now: Timestamp) -> Entry {
    let mut entry = ensure_scheduling(entry);
    let before = entry.scheduling();
    let after = update(before, grade, now);
    log::debug!(
        "{} {} ease={:.2} interval={}ms due={}",
        entry.id(),
        grade,
        after.ease,
        after.interval,
        after.next_due
    );
    entry.set_scheduling(after);
    entry
}

fn penalize(ease: f64, penalty: f64) -> f64 {
    (ease - penalty).max(MIN_EASE)
}

/// Multiplies an interval, rounding to the nearest millisecond.
fn scale(interval: u64, factor: f64) -> u64 {
    (interval as f64 * factor).round() as u64
}
