//! REPL Module
//!
//! Reads commands line by line and routes them to their handlers. All
//! mutable state lives in an explicit [`Session`] passed to every handler.
//!
//! Input is read on a dedicated OS thread and forwarded over a channel, so a
//! read parked on an interactive stdin never holds up runtime shutdown.

mod commands;

use std::io::{self, BufRead, Write};
use std::thread;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::client::PokeApiClient;
use crate::error::Result;
use crate::pokedex::Pokedex;

pub use commands::{catch_chance, catch_succeeds, execute, Command, Flow, COMMANDS};

/// Prompt written before every line is read
pub const PROMPT: &str = "Pokedex > ";

/// Lines buffered between the reader thread and the loop
const LINE_BUFFER: usize = 16;

// == Session ==
/// State carried between commands of one REPL run.
#[derive(Debug)]
pub struct Session {
    pub client: PokeApiClient,
    pub pokedex: Pokedex,
    /// Offset of the next `map` page
    pub offset: u32,
    pub page_size: u32,
    pub rng: StdRng,
}

impl Session {
    pub fn new(client: PokeApiClient, page_size: u32) -> Self {
        Self::with_rng(client, page_size, StdRng::from_entropy())
    }

    /// Creates a session with a caller-supplied random source for catches.
    pub fn with_rng(client: PokeApiClient, page_size: u32, rng: StdRng) -> Self {
        Self {
            client,
            pokedex: Pokedex::new(),
            offset: 0,
            page_size,
            rng,
        }
    }
}

// == Input Cleaning ==
/// Splits `text` on whitespace and lowercases every word.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

// == Line Reader ==
/// Spawns an OS thread that reads `reader` line by line and forwards each
/// line over the returned channel.
///
/// The channel closes at end of input, on a read error, or once the
/// receiver is dropped and the next line arrives. The thread is detached: a
/// read that never returns does not keep the process or the runtime alive.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<mpsc::Receiver<String>>
where
    R: BufRead + Send + 'static,
{
    let (tx, rx) = mpsc::channel(LINE_BUFFER);

    thread::Builder::new()
        .name("repl-input".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let line = match line {
                    Ok(line) => line,
                    Err(err) => {
                        warn!("Failed to read input: {}", err);
                        break;
                    }
                };
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
            debug!("Input reader finished");
        })?;

    Ok(rx)
}

// == Run ==
/// Runs the read-eval-print loop until `exit` or end of input.
///
/// A failing command is reported on `out` and the loop keeps going.
pub async fn run<W: Write>(
    session: &mut Session,
    mut lines: mpsc::Receiver<String>,
    out: &mut W,
) -> Result<()> {
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.recv().await else {
            writeln!(out)?;
            break;
        };

        let Some(command) = Command::parse(&clean_input(&line)) else {
            continue;
        };

        match execute(&command, session, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                warn!("Command {:?} failed: {}", command, err);
                writeln!(out, "Error: {}", err)?;
            }
        }
    }

    Ok(())
}
