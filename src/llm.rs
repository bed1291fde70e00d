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

//! The client for the dictionary backend, which fronts a language model.

use std::fmt::Display;
use std::fmt::Formatter;
use std::future::Future;

use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::types::dictionary::DictionaryData;
use crate::types::dictionary::LuckySentence;
use crate::types::dictionary::WordContext;
use crate::types::language::PreferredLanguage;
use crate::types::timestamp::Timestamp;

/// A failure talking to the backend. Carries a message fit for the user.
#[derive(Debug, PartialEq)]
pub enum ServiceError {
    /// The request never got an answer.
    Network(String),
    /// The backend answered with an error, or with something unreadable.
    Service(String),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Network(message) => write!(f, "network error: {message}"),
            ServiceError::Service(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for ServiceError {}

/// Looks words up.
pub trait Dictionary {
    fn lookup(
        &self,
        query: &str,
        preferred: PreferredLanguage,
        model: &str,
    ) -> impl Future<Output = Result<DictionaryData, ServiceError>>;
}

/// Writes example sentences out of a handful of words.
pub trait SentenceGenerator {
    fn generate(
        &self,
        words: &[WordContext],
        model: &str,
    ) -> impl Future<Output = Result<LuckySentence, ServiceError>>;
}

pub struct LlmClient {
    http: Client,
    base_url: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LookupRequest<'a> {
    query: &'a str,
    preferred_language: PreferredLanguage,
    model: &'a str,
    timestamp: Timestamp,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    words: &'a [WordContext],
    model: &'a str,
    timestamp: Timestamp,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AutocompleteRequest<'a> {
    partial_input: &'a str,
    model: &'a str,
    timestamp: Timestamp,
}

#[derive(Deserialize)]
struct AutocompleteResponse {
    suggestions: Vec<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

impl LlmClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            base_url: config.backend_url().to_string(),
        }
    }

    /// Suggests up to three completions of a partial word.
    ///
    /// Resolving `cancelled` abandons the wait and returns `Ok(None)`. This is
    /// advisory: a request already sent may still be served by the backend.
    pub async fn autocomplete(
        &self,
        partial: &str,
        model: &str,
        cancelled: impl Future<Output = ()>,
    ) -> Result<Option<Vec<String>>, ServiceError> {
        let partial = partial.trim();
        if partial.is_empty() {
            return Ok(Some(Vec::new()));
        }
        let body = AutocompleteRequest {
            partial_input: partial,
            model,
            timestamp: Timestamp::now(),
        };
        let request = self.post::<_, AutocompleteResponse>("/api/autocomplete", &body);
        tokio::select! {
            biased;
            _ = cancelled => {
                log::debug!("Autocomplete for {partial:?} cancelled.");
                Ok(None)
            }
            response = request => Ok(Some(response?.suggestions)),
        }
    }

    async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, ServiceError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("POST {url}");
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(err) => err.error,
                Err(_) => format!(
                    "Backend Error: {}",
                    status.canonical_reason().unwrap_or(status.as_str())
                ),
            };
            return Err(ServiceError::Service(message));
        }
        response
            .json::<R>()
            .await
            .map_err(|e| ServiceError::Service(format!("malformed response from backend: {e}")))
    }
}

impl Dictionary for LlmClient {
    async fn lookup(
        &self,
        query: &str,
        preferred: PreferredLanguage,
        model: &str,
    ) -> Result<DictionaryData, ServiceError> {
        let body = LookupRequest {
            query,
            preferred_language: preferred,
            model,
            timestamp: Timestamp::now(),
        };
        self.post("/api/lookup", &body).await
    }
}

impl SentenceGenerator for LlmClient {
    async fn generate(
        &self,
        words: &[WordContext],
        model: &str,
    ) -> Result<LuckySentence, ServiceError> {
        let body = GenerateRequest {
            words,
            model,
            timestamp: Timestamp::now(),
        };
        self.post("/api/generate-sentence", &body).await
    }
}

#[cfg(test)]
mod tests {
    use std::future::pending;
    use std::future::ready;

    use axum::Json;
    use axum::Router;
    use axum::http::StatusCode;
    use axum::routing::post;
    use serde_json::Value;
    use serde_json::json;
    use tokio::net::TcpListener;
    use tokio::spawn;

    use super::*;
    use crate::error::Fallible;
    use crate::types::language::Language;

    fn payload(word: &str) -> Value {
        json!({
            "targetWord": word,
            "detectedLanguage": "en",
            "definitions": {"zh": "苹果", "en": "apple", "ja": "林檎"},
            "translations": {
                "zh": {"word": "苹果", "pronunciation": "píng guǒ"},
                "en": {"word": word, "pronunciation": "/ˈæp.əl/"},
                "ja": {"word": "林檎", "pronunciation": "りんご"}
            },
            "synonyms": [],
            "antonyms": []
        })
    }

    async fn start_backend() -> Fallible<Config> {
        let port = portpicker::pick_unused_port().expect("no free port");
        let app = Router::new()
            .route(
                "/api/lookup",
                post(|Json(body): Json<Value>| async move {
                    assert_eq!(body["preferredLanguage"], "en");
                    assert_eq!(body["model"], "test-model");
                    assert!(body["timestamp"].as_i64().unwrap() > 0);
                    let query = body["query"].as_str().unwrap_or_default().to_string();
                    if query == "broken" {
                        return (StatusCode::OK, Json(json!({})));
                    }
                    if query == "busy" {
                        return (
                            StatusCode::TOO_MANY_REQUESTS,
                            Json(json!({"error": "Rate limit exceeded."})),
                        );
                    }
                    (StatusCode::OK, Json(payload(&query)))
                }),
            )
            .route(
                "/api/generate-sentence",
                post(|Json(body): Json<Value>| async move {
                    let used: Vec<Value> = body["words"]
                        .as_array()
                        .unwrap()
                        .iter()
                        .map(|w| w["word"].clone())
                        .collect();
                    let text = json!({"text": "t", "pronunciation": "p"});
                    Json(json!({
                        "usedWords": used,
                        "content": {"zh": text, "en": text, "ja": text}
                    }))
                }),
            )
            .route(
                "/api/autocomplete",
                post(|Json(body): Json<Value>| async move {
                    assert_eq!(body["partialInput"], "natsuyas");
                    Json(json!({"suggestions": ["夏休み"]}))
                }),
            );
        let listener = TcpListener::bind(("127.0.0.1", port)).await?;
        spawn(async move { axum::serve(listener, app).await });
        Config::parse(&format!("backend_url = \"http://127.0.0.1:{port}/\""))
    }

    #[tokio::test]
    async fn test_lookup() -> Fallible<()> {
        let config = start_backend().await?;
        let client = LlmClient::new(&config);
        let data = client
            .lookup("apple", PreferredLanguage::En, "test-model")
            .await?;
        assert_eq!(data.target_word, "apple");
        assert_eq!(data.detected_language, Language::En);
        Ok(())
    }

    #[tokio::test]
    async fn test_lookup_service_error() -> Fallible<()> {
        let config = start_backend().await?;
        let client = LlmClient::new(&config);
        let result = client
            .lookup("busy", PreferredLanguage::En, "test-model")
            .await;
        assert_eq!(
            result,
            Err(ServiceError::Service("Rate limit exceeded.".to_string()))
        );
        let result = client
            .lookup("broken", PreferredLanguage::En, "test-model")
            .await;
        assert!(matches!(result, Err(ServiceError::Service(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_network_error() -> Fallible<()> {
        let port = portpicker::pick_unused_port().expect("no free port");
        let config = Config::parse(&format!("backend_url = \"http://127.0.0.1:{port}\""))?;
        let client = LlmClient::new(&config);
        let result = client
            .lookup("apple", PreferredLanguage::Auto, "test-model")
            .await;
        assert!(matches!(result, Err(ServiceError::Network(_))));
        Ok(())
    }

    #[tokio::test]
    async fn test_generate() -> Fallible<()> {
        let config = start_backend().await?;
        let client = LlmClient::new(&config);
        let words = vec![
            WordContext {
                word: "apple".to_string(),
                lang: Language::En,
            },
            WordContext {
                word: "林檎".to_string(),
                lang: Language::Ja,
            },
        ];
        let sentence = client.generate(&words, "test-model").await?;
        assert_eq!(sentence.used_words, vec!["apple", "林檎"]);
        assert_eq!(sentence.content.ja.pronunciation, "p");
        Ok(())
    }

    #[tokio::test]
    async fn test_autocomplete() -> Fallible<()> {
        let config = start_backend().await?;
        let client = LlmClient::new(&config);
        let suggestions = client
            .autocomplete(" natsuyas ", "test-model", pending())
            .await?;
        assert_eq!(suggestions, Some(vec!["夏休み".to_string()]));
        let suggestions = client.autocomplete("   ", "test-model", pending()).await?;
        assert_eq!(suggestions, Some(Vec::new()));
        Ok(())
    }

    #[tokio::test]
    async fn test_autocomplete_cancelled() -> Fallible<()> {
        let config = start_backend().await?;
        let client = LlmClient::new(&config);
        let suggestions = client
            .autocomplete("natsuyas", "test-model", ready(()))
            .await?;
        assert_eq!(suggestions, None);
        Ok(())
    }
}
