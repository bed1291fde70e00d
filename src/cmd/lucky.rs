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

use crate::cmd::render::render_sentence;
use crate::collection::Collection;
use crate::collection::ModelSlot;
use crate::error::Fallible;
use crate::llm::LlmClient;
use crate::llm::SentenceGenerator;
use crate::lucky::pick_words;

/// Writes a sentence in all three languages out of a few words from history.
pub async fn feeling_lucky(directory: Option<String>, model: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let model = coll.model_or(ModelSlot::Lucky, model)?;
    let words = pick_words(coll.history.entries(), &mut rand::rng())?;
    log::debug!("Generating a sentence from {} words.", words.len());
    let client = LlmClient::new(&coll.config);
    let sentence = client
        .generate(&words, &model)
        .await
        .inspect_err(|e| log::error!("Sentence generation failed: {e}"))?;
    print!("{}", render_sentence(&sentence));
    Ok(())
}
