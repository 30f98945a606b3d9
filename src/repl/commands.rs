//! REPL Commands
//!
//! Parsing and handlers for each command the Pokedex understands.

use std::io::Write;

use rand::Rng;
use tracing::info;

use super::Session;
use crate::error::{PokedexError, Result};

/// Name, usage and description of every command, in help order
pub const COMMANDS: &[(&str, &str, &str)] = &[
    ("help", "help", "Displays a help message"),
    ("exit", "exit", "Exit the Pokedex"),
    ("map", "map", "Explore the Pokemon world by listing location areas"),
    ("explore", "explore <location-area>", "List all Pokémon in a location area"),
    ("catch", "catch <pokemon>", "Try to catch a Pokémon"),
    ("inspect", "inspect <pokemon>", "Inspect a caught Pokémon"),
    ("pokedex", "pokedex", "List all caught Pokémon"),
];

/// Lowest catch chance, in percent
const MIN_CATCH_CHANCE: u32 = 10;

// == Command ==
/// A parsed REPL command. Arguments are `None` when the user left them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    Explore(Option<String>),
    Catch(Option<String>),
    Inspect(Option<String>),
    Pokedex,
    Unknown(String),
}

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

impl Command {
    /// Parses cleaned input words. Returns `None` for a blank line.
    pub fn parse(words: &[String]) -> Option<Self> {
        let (name, args) = words.split_first()?;
        let arg = args.first().cloned();

        let command = match name.as_str() {
            "help" => Self::Help,
            "exit" => Self::Exit,
            "map" => Self::Map,
            "explore" => Self::Explore(arg),
            "catch" => Self::Catch(arg),
            "inspect" => Self::Inspect(arg),
            "pokedex" => Self::Pokedex,
            other => Self::Unknown(other.to_string()),
        };
        Some(command)
    }
}

// == Execute ==
/// Runs `command` against `session`, writing user-facing text to `out`.
pub async fn execute<W: Write>(
    command: &Command,
    session: &mut Session,
    out: &mut W,
) -> Result<Flow> {
    match command {
        Command::Help => help(out)?,
        Command::Exit => {
            writeln!(out, "Closing the Pokedex... Goodbye!")?;
            return Ok(Flow::Exit);
        }
        Command::Map => map(session, out).await?,
        Command::Explore(Some(area)) => explore(session, area, out).await?,
        Command::Catch(Some(name)) => catch(session, name, out).await?,
        Command::Inspect(Some(name)) => inspect(session, name, out)?,
        Command::Explore(None) => writeln!(out, "Usage: explore <location-area>")?,
        Command::Catch(None) => writeln!(out, "Usage: catch <pokemon>")?,
        Command::Inspect(None) => writeln!(out, "Usage: inspect <pokemon>")?,
        Command::Pokedex => pokedex(session, out)?,
        Command::Unknown(_) => writeln!(out, "Command not found")?,
    }
    Ok(Flow::Continue)
}

fn help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for (_, usage, description) in COMMANDS {
        writeln!(out, "{}: {}", usage, description)?;
    }
    Ok(())
}

async fn map<W: Write>(session: &mut Session, out: &mut W) -> Result<()> {
    let page = session
        .client
        .location_areas(session.offset, session.page_size)
        .await?;

    if page.results.is_empty() {
        writeln!(out, "No more locations to display.")?;
        return Ok(());
    }

    writeln!(out, "Location Areas:")?;
    for area in &page.results {
        writeln!(out, "- {}", area.name)?;
    }
    session.offset += session.page_size;
    Ok(())
}

async fn explore<W: Write>(session: &mut Session, area_name: &str, out: &mut W) -> Result<()> {
    let area = match session.client.location_area(area_name).await {
        Ok(area) => area,
        Err(PokedexError::NotFound(_)) => {
            writeln!(out, "Location area '{}' not found.", area_name)?;
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    if area.pokemon_encounters.is_empty() {
        writeln!(out, "No Pokémon found in this location area.")?;
        return Ok(());
    }

    writeln!(out, "Pokémon in {}:", area_name)?;
    for name in area.pokemon_names() {
        writeln!(out, "- {}", name)?;
    }
    Ok(())
}

// == Catching ==
/// Percent chance of catching a Pokemon with the given base experience.
pub fn catch_chance(base_experience: u32) -> u32 {
    100u32
        .saturating_sub(base_experience)
        .max(MIN_CATCH_CHANCE)
}

/// Whether a roll in `1..=100` catches a Pokemon with the given base experience.
pub fn catch_succeeds(base_experience: u32, roll: u32) -> bool {
    roll <= catch_chance(base_experience)
}

async fn catch<W: Write>(session: &mut Session, name: &str, out: &mut W) -> Result<()> {
    writeln!(out, "Throwing a Pokeball at {}...", name)?;

    let pokemon = match session.client.pokemon(name).await {
        Ok(pokemon) => pokemon,
        Err(PokedexError::NotFound(_)) => {
            writeln!(out, "Pokemon '{}' not found.", name)?;
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let roll = session.rng.gen_range(1..=100);
    if catch_succeeds(pokemon.base_experience, roll) {
        writeln!(out, "{} was caught!", name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        info!("Caught {}", pokemon.name);
        session.pokedex.insert(pokemon);
    } else {
        writeln!(out, "{} escaped!", name)?;
    }
    Ok(())
}

fn inspect<W: Write>(session: &Session, name: &str, out: &mut W) -> Result<()> {
    let Some(pokemon) = session.pokedex.get(name) else {
        writeln!(out, "you have not caught that pokemon")?;
        return Ok(());
    };

    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.name, stat.value)?;
    }
    writeln!(out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(out, "  - {}", kind)?;
    }
    Ok(())
}

fn pokedex<W: Write>(session: &Session, out: &mut W) -> Result<()> {
    if session.pokedex.is_empty() {
        writeln!(out, "Your Pokedex is empty.")?;
        return Ok(());
    }

    writeln!(out, "Your Pokedex:")?;
    for name in session.pokedex.names() {
        writeln!(out, " - {}", name)?;
    }
    Ok(())
}
