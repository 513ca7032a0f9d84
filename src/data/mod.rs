//! Core data models for the Pokedex CLI
//!
//! This module contains the types used to decode PokeAPI responses:
//! paginated resource listings, location areas with their encounters, and
//! full pokemon records.

pub mod pokeapi;

pub use pokeapi::{PokeapiClient, PokeapiError};

use serde::Deserialize;

/// A name/URL pair referencing another API resource
#[derive(Debug, Clone, Deserialize)]
pub struct NamedResource {
    /// Resource name, e.g. "canalave-city-area" or "pikachu"
    pub name: String,
    /// Canonical URL of the full resource
    pub url: String,
}

/// One page of a paginated resource listing
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceList {
    /// Total number of resources across all pages
    pub count: u32,
    /// URL of the next page, absent on the last page
    pub next: Option<String>,
    /// URL of the previous page, absent on the first page
    pub previous: Option<String>,
    /// The resources on this page
    pub results: Vec<NamedResource>,
}

/// A location area and the pokemon that can be encountered there
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    /// Area name
    pub name: String,
    /// Possible encounters in this area
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A single possible encounter within a location area
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    /// The pokemon that can be encountered
    pub pokemon: NamedResource,
}

/// A full pokemon record
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    /// Pokemon name
    pub name: String,
    /// Base experience granted when defeated; absent for some species
    #[serde(default)]
    pub base_experience: u32,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Base stat values
    pub stats: Vec<PokemonStat>,
    /// Type slots
    pub types: Vec<PokemonType>,
}

/// A single base stat entry on a pokemon record
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    /// The stat value
    pub base_stat: u32,
    /// Which stat this is (hp, attack, ...)
    pub stat: NamedResource,
}

/// A single type slot on a pokemon record
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    /// The type occupying this slot (electric, water, ...)
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
