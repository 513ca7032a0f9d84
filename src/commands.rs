//! The fixed set of REPL commands and their dispatch metadata.
//!
//! Each line of input maps to one command plus an optional argument blob.
//! The command set is closed; unknown words are reported to the user and
//! the loop continues.

/// Commands the REPL understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Display the usage banner and command list
    Help,
    /// Leave the REPL
    Exit,
    /// Show the next batch of location areas
    Map,
    /// Show the previous batch of location areas
    MapBack,
    /// List the pokemon encountered in a location area
    Explore,
    /// Try to catch a pokemon
    Catch,
    /// Show a caught pokemon's details
    Inspect,
    /// List the pokemon in the pokedex
    Pokedex,
}

impl Command {
    /// Returns a slice containing all commands in display order.
    pub fn all() -> &'static [Command] {
        &[
            Command::Help,
            Command::Exit,
            Command::Map,
            Command::MapBack,
            Command::Explore,
            Command::Catch,
            Command::Inspect,
            Command::Pokedex,
        ]
    }

    /// The word the user types to invoke this command.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    /// One-line description shown by the help command.
    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => "Displays location areas in batches of 20",
            Command::MapBack => "Navigate backwards between location area batches",
            Command::Explore => {
                "Takes a location area name and returns the pokemon encountered there"
            }
            Command::Catch => {
                "Takes a pokemon name and tries to catch it, adding it to your pokedex on success"
            }
            Command::Inspect => "Takes a pokemon name and displays its information if caught",
            Command::Pokedex => "Displays the names of the pokemon in your pokedex",
        }
    }

    /// Parses a command word into a Command.
    ///
    /// Matching is exact; returns `None` for anything not in the table.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Command> {
        Command::all().iter().copied().find(|c| c.name() == s)
    }
}

/// Splits an input line into its command word and optional argument blob.
///
/// The split happens at the first space; everything after it is handed to
/// the command untouched. Returns `None` for blank input.
pub fn parse_line(line: &str) -> Option<(&str, Option<&str>)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match line.split_once(' ') {
        Some((word, rest)) => Some((word, Some(rest))),
        None => Some((line, None)),
    }
}
