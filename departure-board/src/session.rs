//! The interactive command loop.
//!
//! A [`Session`] owns the departure store for its lifetime and talks to
//! three streams: commands and prompt answers come from `input`, results go
//! to `output`, and every reported error goes to `diagnostics`.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::command::Command;
use crate::config::BoardConfig;
use crate::domain::{Departure, DepartureTime, parse_train_number};
use crate::error::BoardError;
use crate::render;
use crate::storage;
use crate::store::DepartureStore;

const DESTINATION_PROMPT: &str = "Destination? ";
const NUMBER_PROMPT: &str = "Train number? ";
const TIME_PROMPT: &str = "Departure time (HH:MM)? ";

/// Whether the loop should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One interactive session over a departure store.
pub struct Session<R, W, E> {
    config: BoardConfig,
    store: DepartureStore,
    input: R,
    output: W,
    diagnostics: E,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    /// Create a session with an empty store.
    pub fn new(config: BoardConfig, input: R, output: W, diagnostics: E) -> Self {
        Self {
            config,
            store: DepartureStore::new(),
            input,
            output,
            diagnostics,
        }
    }

    /// Start from an existing store instead of an empty one.
    pub fn with_store(mut self, store: DepartureStore) -> Self {
        self.store = store;
        self
    }

    /// The current departures.
    pub fn store(&self) -> &DepartureStore {
        &self.store
    }

    /// End the session and hand back its store.
    pub fn into_store(self) -> DepartureStore {
        self.store
    }

    /// Read and execute commands until `exit` or end of input.
    ///
    /// Command failures are reported and the loop carries on. Only failing
    /// to read input or to write diagnostics ends the loop early.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let Some(line) = read_line(&mut self.input, &mut self.output, &self.config.prompt)?
            else {
                debug!("end of input");
                return Ok(());
            };

            if self.execute_line(&line)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Parse and execute a single line, reporting any failure.
    pub fn execute_line(&mut self, line: &str) -> io::Result<Flow> {
        let result = Command::parse(line).and_then(|command| match command {
            Some(command) => self.execute(command),
            None => Ok(Flow::Continue),
        });

        match result {
            Ok(flow) => Ok(flow),
            Err(err) => {
                self.report(&err)?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Execute a parsed command.
    pub fn execute(&mut self, command: Command) -> Result<Flow, BoardError> {
        debug!(?command, "dispatching command");

        match command {
            Command::Add => return self.add(),
            Command::List => render::write_table(&mut self.output, self.store.departures())?,
            Command::Select(time) => self.select(time)?,
            Command::Save(path) => self.save(&path)?,
            Command::Load(path) => self.load(&path)?,
            Command::Help => render::write_help(&mut self.output)?,
            Command::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    /// Ask for a destination, number and time, then insert the departure.
    ///
    /// Each answer is checked as soon as it is read, so a bad answer ends
    /// the command without asking the rest.
    fn add(&mut self) -> Result<Flow, BoardError> {
        let Some(destination) = self.ask(DESTINATION_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(BoardError::InvalidInput(
                "destination must not be empty".to_string(),
            ));
        }

        let Some(number) = self.ask(NUMBER_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let number = parse_train_number(&number)?;

        let Some(time) = self.ask(TIME_PROMPT)? else {
            return Ok(Flow::Exit);
        };
        let time = DepartureTime::parse_hhmm(time.trim())?;

        self.store.insert(Departure::new(destination, number, time));
        Ok(Flow::Continue)
    }

    fn select(&mut self, time: DepartureTime) -> Result<(), BoardError> {
        let later = self.store.later_than(time);
        let count = render::write_later_departures(&mut self.output, later)?;
        debug!(%time, count, "selected later departures");
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<(), BoardError> {
        storage::save_departures(path, self.store.departures(), self.config.json_indent)?;
        writeln!(
            self.output,
            "Saved {} departure(s) to {}",
            self.store.len(),
            path.display()
        )?;
        Ok(())
    }

    /// Replace the store with the file's departures.
    ///
    /// A wrong extension leaves the store alone. A missing or malformed
    /// file empties it.
    fn load(&mut self, path: &Path) -> Result<(), BoardError> {
        match storage::load_departures(path) {
            Ok(departures) => {
                self.store.replace(departures);
                writeln!(
                    self.output,
                    "Loaded {} departure(s) from {}",
                    self.store.len(),
                    path.display()
                )?;
                Ok(())
            }
            Err(err @ BoardError::InvalidFileExtension(_)) => Err(err),
            Err(err) => {
                if !self.store.is_empty() {
                    warn!(
                        discarded = self.store.len(),
                        "load failed, discarding current departures"
                    );
                }
                self.store.clear();
                Err(err)
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        read_line(&mut self.input, &mut self.output, prompt)
    }

    fn report(&mut self, err: &BoardError) -> io::Result<()> {
        warn!(error = %err, "command failed");
        writeln!(self.diagnostics, "error: {err}")?;
        self.diagnostics.flush()
    }
}

/// Print `prompt` and read one line, without its line terminator.
///
/// Returns `None` at end of input.
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    output.write_all(prompt.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
