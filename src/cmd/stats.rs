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

use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::history::History;
use crate::scheduling::MAX_HISTORY;
use crate::selector::due_count;
use crate::types::timestamp::Timestamp;

#[derive(Serialize, PartialEq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    history_count: usize,
    history_capacity: usize,
    due_count: usize,
    /// Entries that have never been graded.
    new_count: usize,
}

pub fn print_stats(directory: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let stats = compute_stats(&coll.history, Timestamp::now());
    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}

fn compute_stats(history: &History, now: Timestamp) -> Stats {
    Stats {
        history_count: history.len(),
        history_capacity: MAX_HISTORY,
        due_count: due_count(history.entries(), now),
        new_count: history
            .entries()
            .iter()
            .filter(|entry| entry.scheduling().is_new())
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::grading::grade_entry;
    use crate::helper::entry_due_at;
    use crate::types::grade::Grade;

    #[test]
    fn test_stats() -> Fallible<()> {
        let now = Timestamp::from_millis(10_000);
        let graded = grade_entry(entry_due_at("a", 0), Grade::Good, now);
        let history = History::from_entries(vec![
            graded,
            entry_due_at("b", 5_000),
            entry_due_at("c", 20_000),
        ]);
        let stats = compute_stats(&history, now);
        assert_eq!(
            serde_json::to_value(&stats)?,
            json!({"historyCount": 3, "historyCapacity": 42, "dueCount": 1, "newCount": 2})
        );
        Ok(())
    }
}
