//! Command-line interface for trivia_board.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Trivia Board - random category boards from a question source
#[derive(Parser, Debug)]
#[command(name = "trivia_board")]
#[command(about = "Trivia board game in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively: type `<category>-<clue>` to reveal, `new` for a new board
    Play(BoardArgs),

    /// Build one board and print it as JSON
    Dump(BoardArgs),
}

/// Options shared by every command that builds a board.
#[derive(Args, Debug, Clone)]
pub struct BoardArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// jService-compatible API root (overrides config and TRIVIA_SOURCE_URL)
    #[arg(long)]
    pub source_url: Option<String>,

    /// Read categories from a JSON file instead of the network
    #[arg(long, conflicts_with = "source_url")]
    pub source_file: Option<PathBuf>,

    /// Number of categories on the board
    #[arg(long)]
    pub categories: Option<usize>,

    /// Number of clues per category
    #[arg(long)]
    pub clues: Option<usize>,

    /// RNG seed for a reproducible board
    #[arg(long)]
    pub seed: Option<u64>,
}
