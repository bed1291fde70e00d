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

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;

/// The language a word was detected in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    Zh,
    En,
    Ja,
    Unknown,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
            Language::Ja => "ja",
            Language::Unknown => "unknown",
        }
    }

    /// The BCP 47 tag handed to the speech synthesizer. Anything we don't
    /// recognize is read out as English.
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Language::Zh => "zh-CN",
            Language::Ja => "ja-JP",
            Language::En | Language::Unknown => "en-US",
        }
    }
}

impl From<String> for Language {
    fn from(value: String) -> Self {
        match value.as_str() {
            "zh" => Language::Zh,
            "en" => Language::En,
            "ja" => Language::Ja,
            _ => Language::Unknown,
        }
    }
}

impl From<Language> for String {
    fn from(value: Language) -> Self {
        value.as_str().to_string()
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The language the user wants a query to be interpreted in.
#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredLanguage {
    /// Let the service detect the language.
    #[default]
    Auto,
    /// Chinese.
    Zh,
    /// English.
    En,
    /// Japanese.
    Ja,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speech_tag() {
        assert_eq!(Language::Zh.speech_tag(), "zh-CN");
        assert_eq!(Language::En.speech_tag(), "en-US");
        assert_eq!(Language::Ja.speech_tag(), "ja-JP");
        assert_eq!(Language::Unknown.speech_tag(), "en-US");
    }

    #[test]
    fn test_unrecognized_language_is_unknown() -> Result<(), serde_json::Error> {
        let lang: Language = serde_json::from_str("\"ko\"")?;
        assert_eq!(lang, Language::Unknown);
        let lang: Language = serde_json::from_str("\"ja\"")?;
        assert_eq!(lang, Language::Ja);
        assert_eq!(serde_json::to_string(&Language::Zh)?, "\"zh\"");
        Ok(())
    }

    #[test]
    fn test_preferred_language_serialization() -> Result<(), serde_json::Error> {
        assert_eq!(serde_json::to_string(&PreferredLanguage::Auto)?, "\"auto\"");
        assert_eq!(serde_json::to_string(&PreferredLanguage::Ja)?, "\"ja\"");
        Ok(())
    }
}
