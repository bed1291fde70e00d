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

use crate::types::grade::Grade;
use crate::types::timestamp::Timestamp;

/// How long the grade indicator stays visible, in milliseconds.
pub const FEEDBACK_DURATION: u64 = 3_000;

/// The transient indicator shown after grading a card.
///
/// There is only ever one pending expiry: setting a new indicator replaces
/// the old one together with its deadline, so a stale clear can never hide a
/// newer indicator.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct Feedback {
    pending: Option<(Grade, Timestamp)>,
}

impl Feedback {
    pub fn set(&mut self, grade: Grade, now: Timestamp) {
        self.pending = Some((grade, now.plus_millis(FEEDBACK_DURATION)));
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }

    /// The visible indicator, if it has not expired yet.
    pub fn current(&self, now: Timestamp) -> Option<Grade> {
        match self.pending {
            Some((grade, expires_at)) if now < expires_at => Some(grade),
            _ => None,
        }
    }

    /// Drops the indicator once its deadline has passed.
    pub fn tick(&mut self, now: Timestamp) {
        if self.current(now).is_none() {
            self.pending = None;
        }
    }
}
