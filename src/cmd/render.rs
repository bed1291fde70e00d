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

//! Plain-text rendering for the terminal.

use std::fmt::Write;

use crate::scheduling::Scheduling;
use crate::types::dictionary::LuckySentence;
use crate::types::entry::Entry;
use crate::types::timestamp::Timestamp;

pub fn render_entry(entry: &Entry) -> String {
    let data = entry.data();
    let mut out = String::new();
    let _ = writeln!(out, "{} [{}]", data.target_word, data.detected_language);
    if let Some(origin) = &data.origin {
        let _ = writeln!(out, "  origin: {origin}");
    }
    for (lang, translation) in data.translations.iter() {
        let _ = writeln!(
            out,
            "  {lang}: {} {}",
            translation.word, translation.pronunciation
        );
    }
    for (lang, definition) in data.definitions.iter() {
        let _ = writeln!(out, "  {lang} definition: {definition}");
    }
    if let Some(synonyms) = data.synonyms.as_ref().filter(|s| !s.is_empty()) {
        let _ = writeln!(out, "  synonyms: {}", synonyms.join(", "));
    }
    if let Some(antonyms) = data.antonyms.as_ref().filter(|a| !a.is_empty()) {
        let _ = writeln!(out, "  antonyms: {}", antonyms.join(", "));
    }
    if let Some(example) = &data.example_sentence {
        let _ = writeln!(out, "  e.g. {} ({})", example.text, example.translation);
    }
    out
}

pub fn render_sentence(sentence: &LuckySentence) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Using: {}", sentence.used_words.join(", "));
    for (lang, text) in sentence.content.iter() {
        let _ = writeln!(out, "  {lang}: {}", text.text);
        let _ = writeln!(out, "      {}", text.pronunciation);
    }
    out
}

/// A short human description of when an entry is due.
pub fn describe_due(s: &Scheduling, now: Timestamp) -> String {
    if s.is_due(now) {
        return "due now".to_string();
    }
    let secs = now.millis_until(s.next_due).div_ceil(1_000);
    let (amount, unit) = if secs < 60 {
        (secs, "s")
    } else if secs < 3_600 {
        (secs.div_ceil(60), "m")
    } else if secs < 86_400 {
        (secs.div_ceil(3_600), "h")
    } else {
        (secs.div_ceil(86_400), "d")
    };
    format!("due in {amount}{unit}")
}
