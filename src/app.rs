//! Application state management for the Pokedex CLI
//!
//! This module contains the REPL's state and command handlers: pagination
//! cursors for the location area listing, the pokedex of recorded pokemon,
//! and the API client everything fetches through. Handlers return the text
//! to print so the REPL loop owns all terminal output.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::commands::{parse_line, Command};
use crate::data::{PokeapiClient, PokeapiError, Pokemon};

/// Errors produced by command execution
#[derive(Debug, Error)]
pub enum CommandError {
    /// The command word is not in the dispatch table
    #[error("unknown command: {0}")]
    Unknown(String),

    /// The command was given an argument it does not take
    #[error("{command} command does not accept arguments")]
    NoArguments { command: &'static str },

    /// The command needs an argument it was not given
    #[error("{command} command takes exactly one argument: {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    /// Paging past either end of the location area listing
    #[error("end of location areas reached")]
    EndOfPages,

    /// The underlying API call failed
    #[error(transparent)]
    Api(#[from] PokeapiError),
}

/// Main application struct managing REPL state
pub struct App {
    /// URL of the next listing page, `None` once the last page was seen
    next_page: Option<String>,
    /// URL of the previous listing page, `None` on the first page
    previous_page: Option<String>,
    /// Pokemon recorded by the catch command, keyed by name
    pokedex: HashMap<String, Pokemon>,
    /// API client shared with the response cache
    client: PokeapiClient,
    /// Random source for catch outcomes
    rng: StdRng,
    /// Flag indicating the REPL should quit
    pub should_quit: bool,
}

impl App {
    /// Creates a new App seeded with the first listing page.
    pub fn new(client: PokeapiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }

    /// Creates a new App with a caller-supplied random source.
    ///
    /// Seeding the source makes catch outcomes deterministic in tests.
    pub fn with_rng(client: PokeapiClient, rng: StdRng) -> Self {
        let next_page = Some(client.location_areas_url());
        Self {
            next_page,
            previous_page: None,
            pokedex: HashMap::new(),
            client,
            rng,
            should_quit: false,
        }
    }

    /// Parses one input line and runs the matching command.
    ///
    /// Returns the text to print. Errors leave the state untouched except
    /// where the failing fetch had already advanced it.
    pub async fn execute(&mut self, line: &str) -> Result<String, CommandError> {
        let Some((word, arg)) = parse_line(line) else {
            return Ok(
                "Please enter a command!\nUse the 'help' command for the list of available commands."
                    .to_string(),
            );
        };
        let Some(command) = Command::from_str(word) else {
            return Err(CommandError::Unknown(word.to_string()));
        };

        match command {
            Command::Help => {
                Self::no_arguments(command, arg)?;
                Ok(self.help())
            }
            Command::Exit => {
                Self::no_arguments(command, arg)?;
                self.should_quit = true;
                Ok(String::new())
            }
            Command::Map => {
                Self::no_arguments(command, arg)?;
                self.map_next().await
            }
            Command::MapBack => {
                Self::no_arguments(command, arg)?;
                self.map_previous().await
            }
            Command::Explore => {
                let arg = Self::one_argument(command, arg, "name of the location area to explore")?;
                self.explore(arg).await
            }
            Command::Catch => {
                let arg = Self::one_argument(command, arg, "name of the pokemon to catch")?;
                self.catch(arg).await
            }
            Command::Inspect => {
                let arg = Self::one_argument(command, arg, "name of the pokemon to inspect")?;
                Ok(self.inspect(arg))
            }
            Command::Pokedex => {
                Self::no_arguments(command, arg)?;
                Ok(self.list_pokedex())
            }
        }
    }

    /// Rejects a non-empty argument blob for argument-less commands.
    fn no_arguments(command: Command, arg: Option<&str>) -> Result<(), CommandError> {
        match arg {
            Some(a) if !a.trim().is_empty() => Err(CommandError::NoArguments {
                command: command.name(),
            }),
            _ => Ok(()),
        }
    }

    /// Extracts the single required argument, trimmed.
    fn one_argument<'a>(
        command: Command,
        arg: Option<&'a str>,
        expected: &'static str,
    ) -> Result<&'a str, CommandError> {
        match arg.map(str::trim) {
            Some(a) if !a.is_empty() => Ok(a),
            _ => Err(CommandError::MissingArgument {
                command: command.name(),
                expected,
            }),
        }
    }

    /// Advances to the next listing page.
    async fn map_next(&mut self) -> Result<String, CommandError> {
        let url = self.next_page.clone().ok_or(CommandError::EndOfPages)?;
        self.browse(&url).await
    }

    /// Goes back to the previous listing page.
    async fn map_previous(&mut self) -> Result<String, CommandError> {
        let url = self.previous_page.clone().ok_or(CommandError::EndOfPages)?;
        self.browse(&url).await
    }

    /// Fetches one listing page, updates both cursors, lists the area names.
    async fn browse(&mut self, url: &str) -> Result<String, CommandError> {
        let page = self.client.fetch_location_areas(url).await?;
        self.next_page = page.next.clone();
        self.previous_page = page.previous.clone();

        let lines: Vec<&str> = page.results.iter().map(|area| area.name.as_str()).collect();
        Ok(lines.join("\n"))
    }

    /// Lists the pokemon encountered in a location area.
    async fn explore(&mut self, raw: &str) -> Result<String, CommandError> {
        let name = slug(raw);
        let area = self.client.fetch_location_area(&name).await?;

        let mut lines = vec![
            format!("Exploring {} area...", name),
            "Found the following pokemon:".to_string(),
        ];
        for encounter in &area.pokemon_encounters {
            lines.push(encounter.pokemon.name.clone());
        }
        Ok(lines.join("\n"))
    }

    /// Attempts to catch a pokemon and records it in the pokedex.
    ///
    /// The odds are 1 in `base_experience`, clamped to at least 1 because
    /// the field is absent for some species. The record is kept regardless
    /// of the outcome.
    async fn catch(&mut self, raw: &str) -> Result<String, CommandError> {
        let name = slug(raw);
        let pokemon = self.client.fetch_pokemon(&name).await?;

        let chance = pokemon.base_experience.max(1);
        let mut lines = vec![
            format!("Throwing a Pokeball at {}...", name),
            format!("Probability of catching this pokemon is 1 in {}", chance),
        ];
        if self.rng.gen_range(1..=chance) == chance {
            lines.push(format!("{} was caught!", name));
            lines.push("You may now inspect it with the inspect command.".to_string());
        } else {
            lines.push(format!("{} escaped!", name));
        }
        self.pokedex.insert(name, pokemon);
        Ok(lines.join("\n"))
    }

    /// Shows a recorded pokemon's details.
    fn inspect(&self, raw: &str) -> String {
        let name = slug(raw);
        let Some(pokemon) = self.pokedex.get(&name) else {
            return format!("You haven't caught {} yet!", name);
        };

        let mut lines = vec![
            format!("Name: {}", pokemon.name),
            format!("Height: {}", pokemon.height),
            format!("Weight: {}", pokemon.weight),
            "Stats:".to_string(),
        ];
        for stat in &pokemon.stats {
            lines.push(format!("  - {}: {}", stat.stat.name, stat.base_stat));
        }
        lines.push("Types:".to_string());
        for slot in &pokemon.types {
            lines.push(format!("  - {}", slot.kind.name));
        }
        lines.join("\n")
    }

    /// Lists the names recorded in the pokedex.
    fn list_pokedex(&self) -> String {
        if self.pokedex.is_empty() {
            return "Your pokedex is empty! You need to catch some pokemon first.".to_string();
        }

        let mut names: Vec<&str> = self.pokedex.keys().map(String::as_str).collect();
        names.sort_unstable();

        let mut lines = vec!["Your Pokedex:".to_string()];
        for name in names {
            lines.push(format!("  - {}", name));
        }
        lines.join("\n")
    }

    /// The usage banner and command table.
    fn help(&self) -> String {
        let mut lines = vec![
            "Welcome to the Pokedex!".to_string(),
            "Usage:".to_string(),
            String::new(),
        ];
        for command in Command::all() {
            lines.push(format!("{}: {}", command.name(), command.description()));
        }
        lines.join("\n")
    }
}

/// Normalizes a user-supplied resource name: trims and joins words with '-'.
fn slug(raw: &str) -> String {
    raw.trim().replace(' ', "-")
}
