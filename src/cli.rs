//! Command-line front end: feeds actions into a [`Store`] and prints the
//! resulting state as JSON.

use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::config::Config;
use crate::counter::{CounterAction, CounterReducer, CounterState};
use crate::form::{FormAction, FormReducer};
use crate::local_counter::{LocalCounterAction, LocalCounterReducer};
use crate::mvi::Reducer;
use crate::store::Store;

#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(version, about = "Replay actions through state reducers")]
#[command(long_about = r#"Replay actions through state reducers and print the final state as JSON.

EXAMPLES:
    # Counter actions by tag
    tally apply INCREMENT INCREMENT DECREMENT

    # SET_DATA takes a JSON payload after '='
    tally apply 'SET_DATA={"x":1}' TOGGLE

    # JSON lines: {"type":"INCREMENT"}
    tally replay actions.jsonl
    cat actions.jsonl | tally replay -

    # Form edits
    tally form userName=Ada age=36 isMarried

    # Queued updates on the local counter
    tally click --times 3
    tally click --times 3 --stale
"#)]
pub struct Cli {
    /// Config file (default: ~/.config/tally/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print every changed state to stderr (no-op actions print nothing)
    #[arg(long, global = true)]
    pub trace: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply counter actions given as TAG or TAG=<json>
    Apply {
        #[arg(required = true, value_name = "ACTION")]
        actions: Vec<String>,
    },
    /// Apply counter actions from a JSON-lines file ('-' for stdin)
    Replay {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Apply profile form changes given as NAME=VALUE
    Form {
        #[arg(value_name = "NAME=VALUE")]
        fields: Vec<String>,
    },
    /// Queue updates on the local counter
    Click {
        #[arg(long, default_value_t = 2)]
        times: u32,
        /// Queue value updates built from one snapshot instead of functional updates
        #[arg(long)]
        stale: bool,
    },
}

impl Cli {
    /// Loads the config named by `--config`, or the default one.
    pub fn load_config(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        Ok(config)
    }

    /// Runs the selected command and writes the final state to `out`.
    pub fn execute<W: Write>(&self, config: &Config, out: &mut W) -> Result<()> {
        match &self.command {
            Command::Apply { actions } => {
                let actions = actions
                    .iter()
                    .map(|token| {
                        CounterAction::from_token(token)
                            .with_context(|| format!("Invalid action '{}'", token))
                    })
                    .collect::<Result<Vec<_>>>()?;
                let state = self.run_counter(config, actions);
                write_json(out, &state)
            }
            Command::Replay { file } => {
                let actions = read_action_lines(file)?;
                let state = self.run_counter(config, actions);
                write_json(out, &state)
            }
            Command::Form { fields } => {
                let actions = fields
                    .iter()
                    .map(|token| FormAction::from_token(token))
                    .collect::<Result<Vec<_>, _>>()?;
                let store = self.store::<FormReducer>(Default::default());
                let state = store.dispatch_all(actions);
                write_json(out, &state)
            }
            Command::Click { times, stale } => {
                let store = self.store::<LocalCounterReducer>(Default::default());
                let snapshot = store.state();
                let actions = (0..*times).map(|_| {
                    if *stale {
                        LocalCounterAction::Set {
                            value: snapshot.count.wrapping_add(1),
                        }
                    } else {
                        LocalCounterAction::Add
                    }
                });
                let state = store.dispatch_all(actions);
                write_json(out, &state)
            }
        }
    }

    fn run_counter(&self, config: &Config, actions: Vec<CounterAction>) -> CounterState {
        let store = self.store::<CounterReducer>(config.initial.clone().into());
        store.dispatch_all(actions)
    }

    fn store<R: Reducer>(&self, initial: R::State) -> Store<R> {
        let store = Store::new(initial);
        if self.trace {
            store.subscribe(|state: &R::State| {
                if let Ok(line) = serde_json::to_string(state) {
                    eprintln!("{}", line);
                }
            });
        }
        store
    }
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn read_action_lines(file: &Path) -> Result<Vec<CounterAction>> {
    let reader: Box<dyn Read> = if file.as_os_str() == "-" {
        Box::new(io::stdin())
    } else {
        Box::new(
            fs::File::open(file)
                .with_context(|| format!("Failed to open '{}'", file.display()))?,
        )
    };

    let mut actions = Vec::new();
    for (index, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let action = CounterAction::from_json(&line)
            .with_context(|| format!("{}:{}", file.display(), index + 1))?;
        actions.push(action);
    }
    Ok(actions)
}
