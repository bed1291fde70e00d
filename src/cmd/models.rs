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

use std::fmt::Write;

use crate::collection::Collection;
use crate::collection::ModelSlot;
use crate::config::ModelInfo;
use crate::error::Fallible;

/// Lists the configured models, optionally changing the saved selections
/// first.
pub fn models(directory: Option<String>, search: Option<String>, lucky: Option<String>) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    if let Some(id) = search {
        coll.set_model(ModelSlot::Search, &id)?;
    }
    if let Some(id) = lucky {
        coll.set_model(ModelSlot::Lucky, &id)?;
    }
    let search = coll.model(ModelSlot::Search)?;
    let lucky = coll.model(ModelSlot::Lucky)?;
    print!("{}", render_models(coll.config.models(), &search, &lucky));
    Ok(())
}

fn render_models(models: &[ModelInfo], search: &str, lucky: &str) -> String {
    let mut out = String::new();
    for model in models {
        let s = if model.id == search { 'S' } else { ' ' };
        let l = if model.id == lucky { 'L' } else { ' ' };
        let _ = writeln!(out, "{s}{l} {} ({})", model.name, model.id);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_render_models() {
        let config = Config::default();
        let out = render_models(
            &config.models()[..2],
            "Qwen/Qwen3-Next-80B-A3B-Instruct",
            "Qwen/Qwen3-Next-80B-A3B-Thinking",
        );
        assert_eq!(
            out,
            "S  Qwen3 Next 80BA3B Instruct (Qwen/Qwen3-Next-80B-A3B-Instruct)\n \
             L Qwen3 Next 80BA3B Thinking (Qwen/Qwen3-Next-80B-A3B-Thinking)\n"
        );
    }
}
