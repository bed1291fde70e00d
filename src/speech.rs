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

use std::process::Child;
use std::process::Command;
use std::process::Stdio;

/// Text-to-speech playback. Fire-and-forget: a new utterance cancels the one
/// in progress, and a missing synthesizer is silently ignored.
pub trait Speaker {
    /// Speaks `text` using the voice for the BCP 47 tag `lang`.
    fn speak(&mut self, text: &str, lang: &str);
}

/// A speaker that never makes a sound.
pub struct SilentSpeaker;

impl Speaker for SilentSpeaker {
    fn speak(&mut self, _text: &str, _lang: &str) {}
}

/// Speaks through the platform's command-line synthesizer.
pub struct CommandSpeaker {
    program: &'static str,
    child: Option<Child>,
}

impl CommandSpeaker {
    pub fn system() -> Self {
        let program = if cfg!(target_os = "macos") {
            "say"
        } else {
            "espeak-ng"
        };
        Self {
            program,
            child: None,
        }
    }

    fn args(&self, text: &str, lang: &str) -> Vec<String> {
        let voice = match self.program {
            "say" => say_voice(lang).to_string(),
            _ => lang.to_lowercase(),
        };
        vec!["-v".to_string(), voice, text.to_string()]
    }

    fn cancel(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
        }
    }
}

/// The bundled macOS voice for a language tag. `say` picks voices by name,
/// not by tag.
fn say_voice(lang: &str) -> &'static str {
    match lang {
        "zh-CN" => "Tingting",
        "ja-JP" => "Kyoko",
        _ => "Samantha",
    }
}

impl Speaker for CommandSpeaker {
    fn speak(&mut self, text: &str, lang: &str) {
        self.cancel();
        let result = Command::new(self.program)
            .args(self.args(text, lang))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match result {
            Ok(child) => self.child = Some(child),
            Err(e) => log::debug!("Speech unavailable ({}): {e}", self.program),
        }
    }
}

impl Drop for CommandSpeaker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_synthesizer_is_silent() {
        let mut speaker = CommandSpeaker {
            program: "trilingual-no-such-synthesizer",
            child: None,
        };
        speaker.speak("apple", "en-US");
        assert!(speaker.child.is_none());
    }

    #[test]
    fn test_espeak_args() {
        let speaker = CommandSpeaker {
            program: "espeak-ng",
            child: None,
        };
        assert_eq!(speaker.args("林檎", "ja-JP"), vec!["-v", "ja-jp", "林檎"]);
    }

    #[test]
    fn test_say_args_pick_voice_by_language() {
        let speaker = CommandSpeaker {
            program: "say",
            child: None,
        };
        assert_eq!(speaker.args("林檎", "ja-JP"), vec!["-v", "Kyoko", "林檎"]);
        assert_eq!(speaker.args("苹果", "zh-CN"), vec!["-v", "Tingting", "苹果"]);
        assert_eq!(speaker.args("apple", "en-US"), vec!["-v", "Samantha", "apple"]);
    }
}
