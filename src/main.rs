//! Trivia Board - terminal shell
//!
//! Builds boards from a question source and plays them on stdin/stdout.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{BoardArgs, Cli, Command};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;
use trivia_board::{
    BoardBuilder, BoardView, CellRef, Game, InMemorySource, JServiceSource, QuestionSource,
    TextView, TriviaConfig,
};

const HELP: &str = "\
Commands:
  <cat>-<clue>   reveal a cell (e.g. 0-3); again for the answer
  board          redraw the board
  new            build a new board
  help           show this help
  quit           exit";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Play(args) => run_play(args).await,
        Command::Dump(args) => run_dump(args).await,
    }
}

/// Resolves config from file, environment, then command-line flags.
#[instrument(skip(args))]
fn resolve_config(args: &BoardArgs) -> Result<TriviaConfig> {
    let mut config = match &args.config {
        Some(path) => TriviaConfig::from_file(path)?,
        None => TriviaConfig::default(),
    }
    .with_env_overrides();

    if let Some(url) = &args.source_url {
        config = config.with_source_url(url.clone());
    }
    if args.categories.is_some() || args.clues.is_some() {
        let categories = args.categories.unwrap_or(*config.categories());
        let clues = args.clues.unwrap_or(*config.clues_per_category());
        config = config.with_shape(categories, clues);
    }
    if args.seed.is_some() {
        config = config.with_seed(args.seed);
    }

    config.validate()?;
    debug!(?config, "Resolved configuration");
    Ok(config)
}

/// Creates the board builder for the resolved config.
#[instrument(skip(args, config))]
fn make_builder(
    args: &BoardArgs,
    config: &TriviaConfig,
) -> Result<BoardBuilder<Arc<dyn QuestionSource>>> {
    let source: Arc<dyn QuestionSource> = match &args.source_file {
        Some(path) => Arc::new(
            InMemorySource::from_file(path)
                .with_context(|| format!("loading questions from {}", path.display()))?,
        ),
        None => Arc::new(JServiceSource::new(config.source_url())),
    };

    Ok(BoardBuilder::new(source, config.shape()?)
        .with_pool_size(*config.pool_size())
        .skip_sparse_categories(*config.skip_sparse_categories()))
}

/// Run the interactive game loop on stdin/stdout.
async fn run_play(args: BoardArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let builder = make_builder(&args, &config)?;
    let mut game = Game::new(builder, *config.seed());
    let mut view = TextView::new(std::io::stdout());

    info!("Starting trivia game");
    println!("{}", HELP);
    if let Err(e) = game.new_game(&mut view).await {
        println!("Could not build a board: {}. Type `new` to retry.", e);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "" => continue,
            "quit" | "q" | "exit" => break,
            "help" | "?" => println!("{}", HELP),
            "new" => {
                if let Err(e) = game.new_game(&mut view).await {
                    println!("Could not build a board: {}", e);
                }
            }
            "board" => match game.board() {
                Some(board) => view.render(board),
                None => println!("No board yet. Type `new`."),
            },
            other => match other.parse::<CellRef>() {
                Ok(cell) => {
                    if let Err(e) = game.reveal(cell, &mut view) {
                        println!("{}", e);
                    }
                }
                Err(e) => println!("{}. Type `help` for commands.", e),
            },
        }
    }

    info!(boards = game.generation(), "Game over");
    Ok(())
}

/// Build a single board and print it as JSON.
async fn run_dump(args: BoardArgs) -> Result<()> {
    let config = resolve_config(&args)?;
    let builder = make_builder(&args, &config)?;
    let mut rng = match config.seed() {
        Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let board = builder.build(&mut rng).await?;
    println!("{}", serde_json::to_string_pretty(&board)?);
    Ok(())
}
