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

use clap::Parser;
use clap::Subcommand;

use crate::cmd::history::list_history;
use crate::cmd::history::remove_entry;
use crate::cmd::lookup::lookup_word;
use crate::cmd::lucky::feeling_lucky;
use crate::cmd::models::models;
use crate::cmd::quiz::drill;
use crate::cmd::stats::print_stats;
use crate::cmd::suggest::suggest;
use crate::error::Fallible;
use crate::types::language::PreferredLanguage;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the data directory. Defaults to the current directory.
    #[arg(long, global = true)]
    directory: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a word in Chinese, English, or Japanese.
    Lookup {
        query: String,
        /// The language to explain the word in.
        #[arg(long, value_enum, default_value = "auto")]
        lang: PreferredLanguage,
        /// Use this model instead of the saved one.
        #[arg(long)]
        model: Option<String>,
    },
    /// List the words looked up so far, newest first.
    History {
        /// Print as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Remove an entry from history by ID.
    Remove { id: String },
    /// Review the words that are due.
    Quiz {
        /// Don't read words aloud.
        #[arg(long)]
        mute: bool,
    },
    /// Generate a sentence out of random words from history.
    Lucky {
        #[arg(long)]
        model: Option<String>,
    },
    /// Suggest completions for a partial word.
    Suggest {
        partial: String,
        #[arg(long)]
        model: Option<String>,
    },
    /// Print history statistics as JSON.
    Stats,
    /// List the available models, or pick the ones to use.
    Models {
        /// Model for lookups and suggestions.
        #[arg(long)]
        search: Option<String>,
        /// Model for sentence generation.
        #[arg(long)]
        lucky: Option<String>,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli = Cli::parse();
    let directory = cli.directory;
    match cli.command {
        Command::Lookup { query, lang, model } => lookup_word(directory, query, lang, model).await,
        Command::History { json } => list_history(directory, json),
        Command::Remove { id } => remove_entry(directory, id),
        Command::Quiz { mute } => drill(directory, mute),
        Command::Lucky { model } => feeling_lucky(directory, model).await,
        Command::Suggest { partial, model } => suggest(directory, partial, model).await,
        Command::Stats => print_stats(directory),
        Command::Models { search, lucky } => models(directory, search, lucky),
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;
    use crate::error::ErrorReport;
    use crate::error::fail;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_lookup() -> Fallible<()> {
        let args = ["trilingual", "lookup", "林檎", "--lang", "zh", "--directory", "/tmp"];
        let cli = Cli::try_parse_from(args).map_err(|e| ErrorReport::new(e.to_string()))?;
        assert_eq!(cli.directory.as_deref(), Some("/tmp"));
        let Command::Lookup { query, lang, model } = cli.command else {
            return fail("expected lookup");
        };
        assert_eq!(query, "林檎");
        assert_eq!(lang, PreferredLanguage::Zh);
        assert_eq!(model, None);
        Ok(())
    }

    #[test]
    fn test_default_language() -> Fallible<()> {
        let cli = Cli::try_parse_from(["trilingual", "lookup", "apple"])
            .map_err(|e| ErrorReport::new(e.to_string()))?;
        let Command::Lookup { lang, .. } = cli.command else {
            return fail("expected lookup");
        };
        assert_eq!(lang, PreferredLanguage::Auto);
        Ok(())
    }
}
