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

//! The pop quiz: presents due cards one at a time, grades them, and keeps a
//! single step of undo.
//!
//! Operations called in a state where they make no sense (grading an
//! unrevealed card, revealing with no card) are ignored rather than reported.

use crate::feedback::Feedback;
use crate::grading::grade_entry;
use crate::history::History;
use crate::selector::due_count;
use crate::selector::select_next;
use crate::speech::Speaker;
use crate::types::entry::Entry;
use crate::types::grade::Grade;
use crate::types::timestamp::Timestamp;

/// Shown when a session runs out of due cards.
pub const COMPLETE_MESSAGE: &str = "All caught up!";

#[derive(Clone, PartialEq, Debug)]
pub enum QuizState {
    /// No quiz is open.
    Idle,
    /// A card is shown with its answer hidden.
    AwaitingGrade { id: String },
    /// The answer is shown and the card can be graded.
    Revealed { id: String },
    /// Nothing is due.
    Complete { message: String },
}

/// The collection as it was before the last grade or removal. Holds at most
/// one state: each new action overwrites it.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct UndoBuffer {
    snapshot: Option<Vec<Entry>>,
}

impl UndoBuffer {
    pub fn record(&mut self, history: &History) {
        self.snapshot = Some(history.snapshot());
    }

    pub fn take(&mut self) -> Option<Vec<Entry>> {
        self.snapshot.take()
    }

    pub fn clear(&mut self) {
        self.snapshot = None;
    }

    pub fn is_available(&self) -> bool {
        self.snapshot.is_some()
    }
}

pub struct Session {
    state: QuizState,
    undo: UndoBuffer,
    feedback: Feedback,
}

/// What a front end needs to draw the quiz.
#[derive(Debug)]
pub struct QuizView<'a> {
    pub state: &'a QuizState,
    pub card: Option<&'a Entry>,
    pub revealed: bool,
    /// The completion message, once nothing is due.
    pub message: Option<&'a str>,
    pub feedback: Option<Grade>,
    pub due_count: usize,
    pub undo_available: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            state: QuizState::Idle,
            undo: UndoBuffer::default(),
            feedback: Feedback::default(),
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self.state, QuizState::Revealed { .. })
    }

    pub fn undo_available(&self) -> bool {
        self.undo.is_available()
    }

    pub fn feedback(&self, now: Timestamp) -> Option<Grade> {
        self.feedback.current(now)
    }

    /// Expires the grade indicator once its time is up.
    pub fn tick(&mut self, now: Timestamp) {
        self.feedback.tick(now);
    }

    /// The ID of the card on screen, if any.
    pub fn current_id(&self) -> Option<&str> {
        match &self.state {
            QuizState::AwaitingGrade { id } | QuizState::Revealed { id } => Some(id),
            QuizState::Idle | QuizState::Complete { .. } => None,
        }
    }

    pub fn current<'h>(&self, history: &'h History) -> Option<&'h Entry> {
        self.current_id().and_then(|id| history.get(id))
    }

    /// Always computed from the collection, so it tracks every mutation.
    pub fn due_count(&self, history: &History, now: Timestamp) -> usize {
        due_count(history.entries(), now)
    }

    /// Opens the quiz on the most overdue card. Ignored while a card is
    /// already on screen.
    pub fn start(&mut self, history: &History, now: Timestamp) {
        if self.current_id().is_some() {
            return;
        }
        self.undo.clear();
        self.feedback.clear();
        log::debug!("Starting quiz with {} due.", self.due_count(history, now));
        self.select(history, now);
    }

    /// Shows the answer and reads the word aloud.
    pub fn reveal(&mut self, history: &History, speaker: &mut dyn Speaker) {
        let QuizState::AwaitingGrade { id } = &self.state else {
            return;
        };
        let id = id.clone();
        if let Some(card) = history.get(&id) {
            speaker.speak(card.word(), card.language().speech_tag());
        }
        self.state = QuizState::Revealed { id };
    }

    /// Grades the revealed card and moves on to the next due one.
    pub fn grade(&mut self, history: &mut History, grade: Grade, now: Timestamp) {
        let QuizState::Revealed { id } = &self.state else {
            return;
        };
        let Some(card) = history.get(id).cloned() else {
            return;
        };
        self.undo.record(history);
        history.replace(grade_entry(card, grade, now));
        self.feedback.set(grade, now);
        self.select(history, now);
    }

    /// Drops the card on screen from the collection entirely.
    pub fn remove(&mut self, history: &mut History, now: Timestamp) {
        let Some(id) = self.current_id().map(str::to_string) else {
            return;
        };
        self.undo.record(history);
        if let Some(removed) = history.remove(&id) {
            log::debug!("Removed {} from history.", removed.id());
        }
        self.feedback.clear();
        self.select(history, now);
    }

    /// Restores the collection to its state before the last grade or
    /// removal. There is only one level: a second undo does nothing.
    pub fn undo(&mut self, history: &mut History, now: Timestamp) {
        let Some(snapshot) = self.undo.take() else {
            return;
        };
        history.restore(snapshot);
        self.feedback.clear();
        self.select(history, now);
    }

    /// Closes the quiz. The undo buffer survives until the next quiz starts.
    pub fn close(&mut self) {
        self.state = QuizState::Idle;
    }

    pub fn view<'a>(&'a self, history: &'a History, now: Timestamp) -> QuizView<'a> {
        QuizView {
            state: &self.state,
            card: self.current(history),
            revealed: self.is_revealed(),
            message: match &self.state {
                QuizState::Complete { message } => Some(message.as_str()),
                _ => None,
            },
            feedback: self.feedback(now),
            due_count: self.due_count(history, now),
            undo_available: self.undo_available(),
        }
    }

    fn select(&mut self, history: &History, now: Timestamp) {
        self.state = match select_next(history.entries(), now) {
            Some(card) => QuizState::AwaitingGrade {
                id: card.id().to_string(),
            },
            None => QuizState::Complete {
                message: COMPLETE_MESSAGE.to_string(),
            },
        };
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
