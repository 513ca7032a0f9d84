//! Pokedex CLI - browse PokeAPI from an interactive prompt
//!
//! A REPL that pages through location areas, explores them, and catches
//! pokemon into an in-memory pokedex. Every API response is memoized in a
//! time-bounded cache so browsing back and forth stays off the network.

use std::io::{self, Write};

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use pokedex::app::{App, CommandError};
use pokedex::cache::ResponseCache;
use pokedex::cli::{Cli, StartupConfig};
use pokedex::data::PokeapiClient;

/// Prints the prompt and reads the next input line.
///
/// Returns `None` once stdin reaches end of file.
async fn read_line(
    lines: &mut tokio::io::Lines<BufReader<tokio::io::Stdin>>,
) -> io::Result<Option<String>> {
    print!("Pokedex > ");
    io::stdout().flush()?;
    lines.next_line().await
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Diagnostics go to stderr so they never interleave with REPL output.
    // Quiet by default; override with e.g. RUST_LOG=pokedex=debug
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "pokedex=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli);

    let cache = ResponseCache::new(config.cache_ttl);
    let mut app = App::new(PokeapiClient::new(cache.clone()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = read_line(&mut lines).await? {
        match app.execute(&line).await {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            Err(CommandError::Unknown(_)) => {
                println!("Unknown command!\nUse the 'help' command for the list of available commands.");
            }
            Err(err) => {
                println!("An error occurred: {}", err);
            }
        }
        println!();

        if app.should_quit {
            break;
        }
    }

    cache.shutdown();
    Ok(())
}
