#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs a Fountain of Objects session.

mod layout_file;
mod terminal;

use std::{io, path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use fountain_core::Category;
use fountain_system_bootstrap::{Bootstrap, MapSize};
use fountain_system_turn::{Input, Output, TurnEngine};
use fountain_world::World;
use terminal::{LineInput, Terminal};
use tracing_subscriber::EnvFilter;

const SIZE_PROMPT: &str = "What size map would you like to explore? (small, medium, large) ";

/// Explore the Cavern of Objects, reactivate the fountain and escape alive.
#[derive(Debug, Parser)]
#[command(name = "fountain", version)]
struct Args {
    /// Size of the built-in map; asked interactively when omitted.
    #[arg(long)]
    size: Option<MapSize>,
    /// TOML file describing a custom map.
    #[arg(long, conflicts_with = "size")]
    layout: Option<PathBuf>,
    /// Print plain text without colors.
    #[arg(long)]
    no_color: bool,
}

/// Entry point for the Fountain of Objects command-line interface.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut input = LineInput::new(io::stdin().lock());
    let mut output = Terminal::new(io::stdout(), !args.no_color);
    let bootstrap = Bootstrap;

    let layout = match (args.layout, args.size) {
        (Some(path), _) => layout_file::load(&path)?,
        (None, Some(size)) => bootstrap.layout(size),
        (None, None) => match choose_size(&mut input, &mut output) {
            Some(size) => bootstrap.layout(size),
            None => return Ok(()),
        },
    };
    let mut world = World::from_layout(&layout).context("map layout is not playable")?;
    output.emit(bootstrap.welcome_banner(&world), Category::Info);

    let started = Instant::now();
    let outcome = TurnEngine::new().run(&mut world, &mut input, &mut output);
    let elapsed = started.elapsed();
    output.emit(
        &format!("Time spent exploring: {}m {}s.", elapsed.as_secs() / 60, elapsed.as_secs() % 60),
        Category::Info,
    );
    tracing::info!(?outcome, elapsed_ms = elapsed.as_millis(), "session finished");
    Ok(())
}

/// Asks for a map size until a valid answer arrives or input ends.
fn choose_size<I: Input, O: Output>(input: &mut I, output: &mut O) -> Option<MapSize> {
    loop {
        output.emit(SIZE_PROMPT, Category::Prompt);
        let line = input.read_line()?;
        match line.parse::<MapSize>() {
            Ok(size) => return Some(size),
            Err(error) => output.emit(&error.to_string(), Category::Warning),
        }
    }
}
