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

use std::path::Path;

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::Transaction;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::timestamp::Timestamp;

/// Where the history and the model preferences are saved.
pub const HISTORY_KEY: &str = "dictionary_history";
pub const SEARCH_MODEL_KEY: &str = "search_model";
pub const LUCKY_MODEL_KEY: &str = "lucky_model";

/// A string-keyed store of serialized values.
pub trait KeyValueStore {
    fn load(&self, key: &str) -> Fallible<Option<String>>;

    fn save(&mut self, key: &str, value: &str) -> Fallible<()>;
}

/// A key-value store backed by a SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn new(database_path: &Path) -> Fallible<Self> {
        let database_path: &str = database_path
            .to_str()
            .ok_or_else(|| ErrorReport::new("invalid path"))?;
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                log::debug!("Creating database schema.");
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        Ok(Self { conn })
    }
}

impl KeyValueStore for SqliteStore {
    fn load(&self, key: &str) -> Fallible<Option<String>> {
        let sql = "select value from kv where key = ?;";
        let value: Option<String> = self
            .conn
            .query_row(sql, [key], |row| row.get(0))
            .optional()?;
        Ok(value)
    }

    fn save(&mut self, key: &str, value: &str) -> Fallible<()> {
        let tx = self.conn.transaction()?;
        let sql = "insert into kv (key, value, updated_at) values (?, ?, ?) on conflict (key) do update set value = excluded.value, updated_at = excluded.updated_at;";
        tx.execute(sql, (key, value, Timestamp::now()))?;
        tx.commit()?;
        Ok(())
    }
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["kv"], |row| row.get(0))?;
    Ok(count > 0)
}

/// An in-memory store, for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    values: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> Fallible<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Fallible<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
