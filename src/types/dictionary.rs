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

use crate::types::language::Language;

/// The dictionary content returned by the lookup service. Scheduling never
/// looks inside it, except for the detected language when playing audio.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryData {
    pub target_word: String,
    pub detected_language: Language,
    /// The source word of a loanword, e.g. "Television" for "テレビ".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    pub definitions: Trilingual<String>,
    pub translations: Trilingual<Translation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonyms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antonyms: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example_sentence: Option<ExampleSentence>,
}

/// One value per supported language.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Trilingual<T> {
    pub zh: T,
    pub en: T,
    pub ja: T,
}

impl<T> Trilingual<T> {
    /// The values paired with their language, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Language, &T)> {
        [
            (Language::En, &self.en),
            (Language::Zh, &self.zh),
            (Language::Ja, &self.ja),
        ]
        .into_iter()
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Translation {
    pub word: String,
    pub pronunciation: String,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ExampleSentence {
    pub text: String,
    pub translation: String,
}

/// A word handed to the sentence generator.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct WordContext {
    pub word: String,
    pub lang: Language,
}

/// The generator's answer: one sentence per language, built from some of the
/// words it was given.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LuckySentence {
    pub used_words: Vec<String>,
    pub content: Trilingual<SentenceText>,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SentenceText {
    pub text: String,
    pub pronunciation: String,
}
