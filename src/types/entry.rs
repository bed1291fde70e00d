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

use serde::Deserialize;
use serde::Serialize;

use crate::scheduling::Scheduling;
use crate::types::dictionary::DictionaryData;
use crate::types::language::Language;
use crate::types::timestamp::Timestamp;

/// A looked-up word: its dictionary data plus its review state.
///
/// The scheduling fields are optional because history written by older
/// versions has none of them. Use [`crate::scheduling::ensure_scheduling`] or
/// [`Entry::scheduling`] before relying on them.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    id: String,
    #[serde(rename = "timestamp")]
    created_at: Timestamp,
    query: String,
    data: DictionaryData,
    #[serde(default, rename = "nextReview", skip_serializing_if = "Option::is_none")]
    pub(crate) next_due: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) interval: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) ease: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) reps: Option<u32>,
}

impl Entry {
    /// Creates a new entry from a successful lookup. The entry is due
    /// immediately.
    pub fn new(query: &str, data: DictionaryData, now: Timestamp) -> Self {
        let query = query.trim().to_string();
        let id = format!("{}_{}", query.to_lowercase(), now.as_millis());
        let mut entry = Self {
            id,
            created_at: now,
            query,
            data,
            next_due: None,
            interval: None,
            ease: None,
            reps: None,
        };
        entry.set_scheduling(Scheduling::new(now));
        entry
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The canonical word, as corrected by the lookup service.
    pub fn word(&self) -> &str {
        &self.data.target_word
    }

    pub fn language(&self) -> Language {
        self.data.detected_language
    }

    pub fn data(&self) -> &DictionaryData {
        &self.data
    }

    /// Case-insensitive comparison of the canonical words.
    pub fn same_word(&self, other: &Entry) -> bool {
        self.word().to_lowercase() == other.word().to_lowercase()
    }
}
