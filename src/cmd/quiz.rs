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

//! The pop quiz in the terminal: one command per line on standard input.

use std::io::BufRead;
use std::io::Write;
use std::io::stdin;
use std::io::stdout;

use crate::cmd::render::render_entry;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::history::History;
use crate::persist::save_history;
use crate::session::QuizState;
use crate::session::QuizView;
use crate::session::Session;
use crate::speech::CommandSpeaker;
use crate::speech::SilentSpeaker;
use crate::speech::Speaker;
use crate::store::KeyValueStore;
use crate::types::grade::Grade;
use crate::types::timestamp::Timestamp;

#[derive(Clone, Copy, PartialEq, Debug)]
enum QuizCommand {
    Reveal,
    Grade(Grade),
    Remove,
    Undo,
    Quit,
}

impl QuizCommand {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "" | "r" => Some(QuizCommand::Reveal),
            "1" | "a" => Some(QuizCommand::Grade(Grade::Again)),
            "2" | "h" => Some(QuizCommand::Grade(Grade::Hard)),
            "3" | "g" => Some(QuizCommand::Grade(Grade::Good)),
            "x" | "d" => Some(QuizCommand::Remove),
            "u" => Some(QuizCommand::Undo),
            "q" => Some(QuizCommand::Quit),
            other => Grade::try_from(other).ok().map(QuizCommand::Grade),
        }
    }
}

pub fn drill(directory: Option<String>, mute: bool) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    log::debug!("Quizzing from {}.", coll.directory.display());
    let mut speaker: Box<dyn Speaker> = if mute {
        Box::new(SilentSpeaker)
    } else {
        Box::new(CommandSpeaker::system())
    };
    run_quiz(
        &mut coll.history,
        &mut coll.store,
        speaker.as_mut(),
        stdin().lock(),
        stdout().lock(),
        Timestamp::now,
    )
}

/// Runs a quiz to completion. The history is saved after every change, so
/// quitting halfway loses nothing.
pub fn run_quiz(
    history: &mut History,
    store: &mut impl KeyValueStore,
    speaker: &mut dyn Speaker,
    mut input: impl BufRead,
    mut output: impl Write,
    mut clock: impl FnMut() -> Timestamp,
) -> Fallible<()> {
    let mut session = Session::new();
    session.start(history, clock());
    loop {
        let now = clock();
        session.tick(now);
        write_view(&mut output, &session.view(history, now))?;
        if matches!(session.state(), QuizState::Complete { .. }) && !session.undo_available() {
            break;
        }
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let Some(command) = QuizCommand::parse(&line) else {
            writeln!(output, "Unknown command: {}", line.trim())?;
            continue;
        };
        let now = clock();
        match command {
            QuizCommand::Reveal => session.reveal(history, speaker),
            QuizCommand::Grade(grade) => {
                session.grade(history, grade, now);
                save_history(store, history)?;
            }
            QuizCommand::Remove => {
                session.remove(history, now);
                save_history(store, history)?;
            }
            QuizCommand::Undo => {
                session.undo(history, now);
                save_history(store, history)?;
            }
            QuizCommand::Quit => break,
        }
    }
    session.close();
    output.flush()?;
    Ok(())
}

fn write_view(out: &mut impl Write, view: &QuizView) -> Fallible<()> {
    if let Some(grade) = view.feedback {
        writeln!(out, "· {grade}")?;
    }
    let undo = if view.undo_available { "  [u] undo" } else { "" };
    match (view.message, view.card) {
        (Some(message), _) => {
            writeln!(out, "{message}")?;
            if view.undo_available {
                writeln!(out, "[u] undo  [q] quit")?;
            }
        }
        (_, Some(card)) if view.revealed => {
            write!(out, "{}", render_entry(card))?;
            writeln!(out, "[1] again  [2] hard  [3] good  [x] remove{undo}  [q] quit")?;
        }
        (_, Some(card)) => {
            writeln!(out, "[{} due] {} ({})", view.due_count, card.word(), card.language())?;
            writeln!(out, "[enter] reveal  [x] remove{undo}  [q] quit")?;
        }
        (None, None) => {}
    }
    Ok(())
}
