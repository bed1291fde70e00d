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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// The models offered when the configuration doesn't list any.
const DEFAULT_MODELS: [(&str, &str); 8] = [
    ("Qwen/Qwen3-Next-80B-A3B-Instruct", "Qwen3 Next 80BA3B Instruct"),
    ("Qwen/Qwen3-Next-80B-A3B-Thinking", "Qwen3 Next 80BA3B Thinking"),
    ("meta-llama/Llama-3.3-70B-Instruct", "Llama 3.3 70B (FP8)"),
    ("openai/gpt-oss-120b", "GPT OSS 120B"),
    ("openai/gpt-oss-20b", "GPT OSS 20B"),
    ("meta-llama/Meta-Llama-3.1-8B-Instruct", "Llama 3.1 8B (FP8)"),
    ("Qwen/Qwen3-235B-A22B", "Qwen 3 235B A22B (FP8)"),
    ("deepseek-ai/DeepSeek-V3", "DeepSeek V3 (FP8)"),
];

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub name: String,
}

/// Runtime configuration, read from `config.toml` in the data directory.
/// Handed explicitly to whatever talks to the backend.
#[derive(Clone, PartialEq, Debug)]
pub struct Config {
    backend_url: String,
    models: Vec<ModelInfo>,
}

/// The file as written by the user. Every field is optional.
#[derive(Deserialize, Default)]
struct ConfigFile {
    backend_url: Option<String>,
    models: Option<Vec<ModelInfo>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file(ConfigFile::default())
    }
}

impl Config {
    /// Reads the configuration at `path`. A missing file gives the defaults;
    /// a malformed one is reported and ignored.
    pub fn load(path: &Path) -> Fallible<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults.", path.display());
            return Ok(Self::default());
        }
        let content = read_to_string(path)?;
        match Self::parse(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::warn!("Ignoring malformed config at {}: {e}", path.display());
                Ok(Self::default())
            }
        }
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(Self::from_file(file))
    }

    fn from_file(file: ConfigFile) -> Self {
        let backend_url = file
            .backend_url
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let models = match file.models {
            Some(models) if !models.is_empty() => models,
            _ => DEFAULT_MODELS
                .iter()
                .map(|(id, name)| ModelInfo {
                    id: id.to_string(),
                    name: name.to_string(),
                })
                .collect(),
        };
        Self {
            backend_url,
            models,
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn models(&self) -> &[ModelInfo] {
        &self.models
    }

    pub fn has_model(&self, id: &str) -> bool {
        self.models.iter().any(|model| model.id == id)
    }

    /// The stored model if it is still configured, otherwise the first one.
    pub fn resolve_model<'a>(&'a self, stored: Option<&'a str>) -> &'a str {
        match stored {
            Some(id) if self.has_model(id) => id,
            _ => &self.models[0].id,
        }
    }
}
