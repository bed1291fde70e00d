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

use chrono::DateTime;
use chrono::Utc;
use rusqlite::ToSql;
use rusqlite::types::ToSqlOutput;
use serde::Deserialize;
use serde::Serialize;

/// Milliseconds since the Unix epoch. Scheduling arithmetic is done directly
/// on this value; `chrono` is only used to read the clock and to format.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const EPOCH: Timestamp = Timestamp(0);

    pub fn from_millis(ms: i64) -> Self {
        Self(ms)
    }

    pub fn now() -> Self {
        Self::from_millis(Utc::now().timestamp_millis())
    }

    pub fn as_millis(self) -> i64 {
        self.0
    }

    /// Returns the timestamp `ms` milliseconds later, saturating on overflow.
    pub fn plus_millis(self, ms: u64) -> Self {
        let ms = i64::try_from(ms).unwrap_or(i64::MAX);
        Self(self.0.saturating_add(ms))
    }

    /// Milliseconds from `self` until `later`, or zero if `later` has passed.
    pub fn millis_until(self, later: Timestamp) -> u64 {
        u64::try_from(later.0 - self.0).unwrap_or(0)
    }

    fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }
}

impl Display for Timestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.to_datetime() {
            Some(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
            None => write!(f, "{}ms", self.0),
        }
    }
}

impl ToSql for Timestamp {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let str = match self.to_datetime() {
            Some(ts) => ts.to_rfc3339(),
            None => self.0.to_string(),
        };
        Ok(ToSqlOutput::from(str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_millis() {
        let ts = Timestamp::from_millis(1_000);
        assert_eq!(ts.plus_millis(500), Timestamp::from_millis(1_500));
        assert_eq!(
            Timestamp::from_millis(i64::MAX - 1).plus_millis(u64::MAX),
            Timestamp::from_millis(i64::MAX)
        );
    }

    #[test]
    fn test_millis_until() {
        let a = Timestamp::from_millis(1_000);
        let b = Timestamp::from_millis(4_000);
        assert_eq!(a.millis_until(b), 3_000);
        assert_eq!(b.millis_until(a), 0);
    }

    #[test]
    fn test_display() {
        let ts = Timestamp::from_millis(0);
        assert_eq!(ts.to_string(), "1970-01-01 00:00:00");
    }

    #[test]
    fn test_serde_is_plain_number() {
        let ts = Timestamp::from_millis(1_700_000_000_123);
        assert_eq!(serde_json::to_string(&ts).unwrap(), "1700000000123");
    }
}
