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

use std::future::pending;

use tokio::signal::ctrl_c;

use crate::collection::Collection;
use crate::collection::ModelSlot;
use crate::error::Fallible;
use crate::llm::LlmClient;

/// Prints completions for a partial word. Ctrl-C abandons the request.
pub async fn suggest(directory: Option<String>, partial: String, model: Option<String>) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let model = coll.model_or(ModelSlot::Search, model)?;
    let client = LlmClient::new(&coll.config);
    let interrupted = async {
        if ctrl_c().await.is_err() {
            pending::<()>().await;
        }
    };
    match client.autocomplete(&partial, &model, interrupted).await? {
        Some(suggestions) if suggestions.is_empty() => println!("No suggestions."),
        Some(suggestions) => {
            for suggestion in suggestions {
                println!("{suggestion}");
            }
        }
        None => println!("Cancelled."),
    }
    Ok(())
}
