//! Command-line parsing for the interactive loop.

use std::path::PathBuf;

use crate::domain::DepartureTime;
use crate::error::BoardError;

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Prompt for a new departure.
    Add,
    /// Print every departure as a table.
    List,
    /// Print departures leaving after the given time.
    Select(DepartureTime),
    /// Write departures to a JSON file.
    Save(PathBuf),
    /// Replace departures with the contents of a JSON file.
    Load(PathBuf),
    /// Print the command summary.
    Help,
    /// Leave the loop.
    Exit,
}

impl Command {
    /// Parse one line of input.
    ///
    /// The command word is matched case-insensitively; the argument keeps
    /// its case. Returns `Ok(None)` for a blank line.
    ///
    /// ```
    /// use departure_board::command::Command;
    ///
    /// assert_eq!(Command::parse("LIST").unwrap(), Some(Command::List));
    /// assert_eq!(Command::parse("   ").unwrap(), None);
    /// assert!(Command::parse("fly away").is_err());
    /// ```
    pub fn parse(line: &str) -> Result<Option<Self>, BoardError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, argument) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match (word.to_lowercase().as_str(), argument) {
            ("add", "") => Command::Add,
            ("list", "") => Command::List,
            ("help", "") => Command::Help,
            ("exit", "") => Command::Exit,
            ("select", "") => return Err(missing_argument("select", "<HH:MM>")),
            ("select", time) => Command::Select(DepartureTime::parse_hhmm(time)?),
            ("save", "") => return Err(missing_argument("save", "<file name.json>")),
            ("save", path) => Command::Save(PathBuf::from(path)),
            ("load", "") => return Err(missing_argument("load", "<file name.json>")),
            ("load", path) => Command::Load(PathBuf::from(path)),
            _ => return Err(BoardError::InvalidCommand(line.to_string())),
        };

        Ok(Some(command))
    }
}

fn missing_argument(command: &str, usage: &str) -> BoardError {
    BoardError::InvalidInput(format!("usage: {command} {usage}"))
}
