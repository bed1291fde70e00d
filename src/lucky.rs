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

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::Fallible;
use crate::error::fail;
use crate::types::dictionary::WordContext;
use crate::types::entry::Entry;

const MIN_WORDS: usize = 2;
const MAX_WORDS: usize = 4;

/// Picks between two and four random words from history to build a sentence
/// out of.
pub fn pick_words<R: Rng + ?Sized>(entries: &[Entry], rng: &mut R) -> Fallible<Vec<WordContext>> {
    if entries.len() < MIN_WORDS {
        return fail("Search for at least 2 words to use 'I'm feeling lucky'!");
    }
    let mut shuffled: Vec<&Entry> = entries.iter().collect();
    shuffled.shuffle(rng);
    let count = entries.len().clamp(MIN_WORDS, MAX_WORDS);
    let words = shuffled
        .into_iter()
        .take(count)
        .map(|entry| WordContext {
            word: entry.word().to_string(),
            lang: entry.language(),
        })
        .collect();
    Ok(words)
}
