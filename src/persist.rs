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

//! Reading and writing the history.
//!
//! The history is stored as a versioned envelope:
//!
//! ```json
//! {"version": 2, "entries": [...]}
//! ```
//!
//! Version 1 is the older format: a bare array of entries with no scheduling
//! fields. Each record is validated on its own, and only the records that
//! fail validation are dropped.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

use crate::error::Fallible;
use crate::history::History;
use crate::scheduling::MIN_EASE;
use crate::scheduling::ensure_scheduling;
use crate::store::HISTORY_KEY;
use crate::store::KeyValueStore;
use crate::types::entry::Entry;

pub const SCHEMA_VERSION: u32 = 2;

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    entries: &'a [Entry],
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    entries: Vec<Value>,
}

/// Loads the history. A missing or unreadable history is treated as empty;
/// only failures of the store itself are errors.
pub fn load_history(store: &impl KeyValueStore) -> Fallible<History> {
    let history = match store.load(HISTORY_KEY)? {
        Some(raw) => decode_history(&raw),
        None => History::new(),
    };
    log::debug!("Loaded {} history entries.", history.len());
    Ok(history)
}

pub fn save_history(store: &mut impl KeyValueStore, history: &History) -> Fallible<()> {
    let envelope = EnvelopeRef {
        version: SCHEMA_VERSION,
        entries: history.entries(),
    };
    let raw = serde_json::to_string(&envelope)?;
    store.save(HISTORY_KEY, &raw)
}

/// Parses a stored history of any known version.
pub fn decode_history(raw: &str) -> History {
    let value: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Discarding unreadable history: {e}");
            return History::new();
        }
    };
    let records = match upgrade(value) {
        Some(records) => records,
        None => {
            log::warn!("Discarding history with unrecognized layout.");
            return History::new();
        }
    };
    let total = records.len();
    let entries: Vec<Entry> = records.into_iter().filter_map(validate_record).collect();
    if entries.len() < total {
        log::warn!(
            "Discarded {} invalid history entries.",
            total - entries.len()
        );
    }
    History::from_entries(entries)
}

/// Brings the stored value to the current layout, returning the raw records.
fn upgrade(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(records) => {
            log::debug!("Upgrading history from version 1.");
            Some(records)
        }
        Value::Object(_) => {
            let envelope: Envelope = serde_json::from_value(value).ok()?;
            if envelope.version > SCHEMA_VERSION {
                log::warn!(
                    "History was written by a newer version ({}); reading what we can.",
                    envelope.version
                );
            }
            Some(envelope.entries)
        }
        _ => None,
    }
}

/// Parses one record, or `None` if it lacks what an entry needs (notably the
/// translations into all three languages) or carries an ease below the floor.
fn validate_record(record: Value) -> Option<Entry> {
    let entry = match serde_json::from_value::<Entry>(record) {
        Ok(entry) => entry,
        Err(e) => {
            log::debug!("Invalid history entry: {e}");
            return None;
        }
    };
    if let Some(ease) = entry.ease {
        if !ease.is_finite() || ease < MIN_EASE {
            log::debug!("Invalid history entry {}: ease {ease}", entry.id());
            return None;
        }
    }
    Some(ensure_scheduling(entry))
}
