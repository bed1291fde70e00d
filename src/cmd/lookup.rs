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

use crate::cmd::render::render_entry;
use crate::collection::Collection;
use crate::collection::ModelSlot;
use crate::error::Fallible;
use crate::error::fail;
use crate::history::History;
use crate::llm::Dictionary;
use crate::llm::LlmClient;
use crate::types::entry::Entry;
use crate::types::language::PreferredLanguage;
use crate::types::timestamp::Timestamp;

pub async fn lookup_word(
    directory: Option<String>,
    query: String,
    lang: PreferredLanguage,
    model: Option<String>,
) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    let model = coll.model_or(ModelSlot::Search, model)?;
    let client = LlmClient::new(&coll.config);
    let entry = record_lookup(&client, &mut coll.history, &query, lang, &model, Timestamp::now())
        .await
        .inspect_err(|e| log::error!("Lookup of {query:?} failed: {}", e.message()))?;
    coll.save()?;
    print!("{}", render_entry(&entry));
    Ok(())
}

/// Looks a word up and puts the result at the front of the history. On
/// failure the history is left as it was.
pub async fn record_lookup(
    dictionary: &impl Dictionary,
    history: &mut History,
    query: &str,
    lang: PreferredLanguage,
    model: &str,
    now: Timestamp,
) -> Fallible<Entry> {
    let query = query.trim();
    if query.is_empty() {
        return fail("No query provided.");
    }
    let data = dictionary.lookup(query, lang, model).await?;
    let entry = Entry::new(query, data, now);
    history.add(entry.clone());
    Ok(entry)
}
