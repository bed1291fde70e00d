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

use std::fmt::Write;

use serde::Serialize;

use crate::cmd::render::describe_due;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::scheduling::MAX_HISTORY;
use crate::types::entry::Entry;
use crate::types::timestamp::Timestamp;

pub fn list_history(directory: Option<String>, json: bool) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let now = Timestamp::now();
    if json {
        let rows: Vec<HistoryRow> = coll
            .history
            .entries()
            .iter()
            .map(|entry| HistoryRow::new(entry, now))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if coll.history.is_empty() {
        println!("No words looked up yet.");
    } else {
        print!("{}", render_history(coll.history.entries(), now));
    }
    Ok(())
}

pub fn remove_entry(directory: Option<String>, id: String) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    match coll.history.remove(&id) {
        Some(entry) => {
            coll.save()?;
            println!("Removed {}.", entry.word());
            Ok(())
        }
        None => fail(format!("no entry with ID {id:?}.")),
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HistoryRow<'a> {
    id: &'a str,
    query: &'a str,
    word: &'a str,
    language: &'a str,
    created_at: Timestamp,
    next_review: Timestamp,
    interval: u64,
    ease: f64,
    reps: u32,
    due: bool,
}

impl<'a> HistoryRow<'a> {
    fn new(entry: &'a Entry, now: Timestamp) -> Self {
        let s = entry.scheduling();
        Self {
            id: entry.id(),
            query: entry.query(),
            word: entry.word(),
            language: entry.language().as_str(),
            created_at: entry.created_at(),
            next_review: s.next_due,
            interval: s.interval,
            ease: s.ease,
            reps: s.reps,
            due: s.is_due(now),
        }
    }
}

fn render_history(entries: &[Entry], now: Timestamp) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "History: {} / {MAX_HISTORY}", entries.len());
    for entry in entries {
        let _ = writeln!(
            out,
            "  {} [{}] {} ({})",
            entry.word(),
            entry.language(),
            describe_due(&entry.scheduling(), now),
            entry.id()
        );
    }
    out
}
