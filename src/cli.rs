//! Command-line interface parsing for the Pokedex CLI
//!
//! This module handles parsing of CLI arguments using clap. The only
//! tunable is the response cache TTL; everything else happens inside the
//! REPL.

use std::time::Duration;

use clap::Parser;

/// Default cache TTL in seconds
const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Pokedex CLI - browse PokeAPI location areas and build your own Pokedex
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(about = "Browse PokeAPI location areas, explore them, and catch pokemon")]
#[command(version)]
pub struct Cli {
    /// How long fetched API responses stay cached, in seconds
    ///
    /// Expired responses are reclaimed by a background sweep; a longer TTL
    /// means fewer repeat requests while browsing back and forth.
    #[arg(
        long,
        value_name = "SECONDS",
        default_value_t = DEFAULT_CACHE_TTL_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub cache_ttl: u64,
}

/// Configuration derived from CLI arguments for application startup
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Time-to-live for cached API responses
    pub cache_ttl: Duration,
}

impl StartupConfig {
    /// Creates a StartupConfig from parsed CLI arguments.
    ///
    /// The TTL is already validated non-zero by clap's range parser.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            cache_ttl: Duration::from_secs(cli.cache_ttl),
        }
    }
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}
