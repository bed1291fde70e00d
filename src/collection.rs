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

use std::env::current_dir;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Fallible;
use crate::error::fail;
use crate::history::History;
use crate::persist::load_history;
use crate::persist::save_history;
use crate::store::KeyValueStore;
use crate::store::LUCKY_MODEL_KEY;
use crate::store::SEARCH_MODEL_KEY;
use crate::store::SqliteStore;

/// Everything that lives in the data directory.
pub struct Collection {
    pub directory: PathBuf,
    pub store: SqliteStore,
    pub config: Config,
    pub history: History,
}

/// Which of the two model preferences to read or write.
#[derive(Clone, Copy, Debug)]
pub enum ModelSlot {
    Search,
    Lucky,
}

impl ModelSlot {
    fn key(self) -> &'static str {
        match self {
            ModelSlot::Search => SEARCH_MODEL_KEY,
            ModelSlot::Lucky => LUCKY_MODEL_KEY,
        }
    }
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory: PathBuf = match directory {
            Some(dir) => PathBuf::from(dir),
            None => current_dir()?,
        };
        let directory = if directory.exists() {
            directory.canonicalize()?
        } else {
            return fail("directory does not exist.");
        };

        let config = Config::load(&directory.join("config.toml"))?;
        let store = SqliteStore::new(&directory.join("trilingual.db"))?;
        let history = load_history(&store)?;

        Ok(Self {
            directory,
            store,
            config,
            history,
        })
    }

    pub fn save(&mut self) -> Fallible<()> {
        save_history(&mut self.store, &self.history)
    }

    /// The selected model for a slot, falling back to the first configured
    /// model when the stored one is gone.
    pub fn model(&self, slot: ModelSlot) -> Fallible<String> {
        let stored = self.store.load(slot.key())?;
        Ok(self.config.resolve_model(stored.as_deref()).to_string())
    }

    pub fn set_model(&mut self, slot: ModelSlot, id: &str) -> Fallible<()> {
        if !self.config.has_model(id) {
            return fail(format!("Model '{id}' not supported."));
        }
        self.store.save(slot.key(), id)
    }

    /// An explicitly requested model, or the saved preference.
    pub fn model_or(&self, slot: ModelSlot, requested: Option<String>) -> Fallible<String> {
        match requested {
            Some(id) if self.config.has_model(&id) => Ok(id),
            Some(id) => fail(format!("Model '{id}' not supported.")),
            None => self.model(slot),
        }
    }
}
