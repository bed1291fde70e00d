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

//! Fixtures shared by the unit tests.

use crate::types::dictionary::DictionaryData;
use crate::types::dictionary::Translation;
use crate::types::dictionary::Trilingual;
use crate::types::entry::Entry;
use crate::types::language::Language;
use crate::types::timestamp::Timestamp;

pub fn sample_data(word: &str, lang: Language) -> DictionaryData {
    let translation = |word: &str| Translation {
        word: word.to_string(),
        pronunciation: format!("/{word}/"),
    };
    DictionaryData {
        target_word: word.to_string(),
        detected_language: lang,
        origin: None,
        definitions: Trilingual {
            zh: format!("{word} (zh)"),
            en: format!("{word} (en)"),
            ja: format!("{word} (ja)"),
        },
        translations: Trilingual {
            zh: translation(word),
            en: translation(word),
            ja: translation(word),
        },
        synonyms: Some(Vec::new()),
        antonyms: Some(Vec::new()),
        example_sentence: None,
    }
}

/// A fresh English entry created at `now`.
pub fn sample_entry(word: &str, now: Timestamp) -> Entry {
    Entry::new(word, sample_data(word, Language::En), now)
}

/// An entry due at `due`, created at the epoch.
pub fn entry_due_at(word: &str, due: i64) -> Entry {
    let mut entry = sample_entry(word, Timestamp::EPOCH);
    entry.next_due = Some(Timestamp::from_millis(due));
    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_due_at() {
        let entry = entry_due_at("apple", 42);
        assert_eq!(entry.next_due, Some(Timestamp::from_millis(42)));
        assert_eq!(entry.id(), "apple_0");
    }
}
