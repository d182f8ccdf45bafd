//! Handle - CLI
//!
//! Guess a four-character idiom; every guess is scored on character,
//! pinyin initial, final and tone.

use anyhow::{Context, Result, anyhow};
use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand};
use handle_wordle::{
    commands::{PlayConfig, list_categories, query_in_mode, query_word, run_play},
    corpus::{
        Corpus, JI_PRESET, MODES, ModeRegistry,
        loader::load_from_file,
        modes::{DEFAULT_DATA_DIR, DEFAULT_MODE, mode_by_id},
    },
    game::{DEFAULT_STRICT_MODE, DEFAULT_TIMEOUT, GameOptions},
    output::print_categories,
};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(
    name = "handle",
    about = "Wordle for four-character Chinese idioms, scored on character, initial, final and tone",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game mode: handle (成语), arkdle (舟语) or dordle (刀语)
    #[arg(short, long, global = true, default_value = DEFAULT_MODE)]
    mode: String,

    /// Directory holding the corpus file of each mode
    #[arg(long, global = true, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Corpus file in the answers.json layout, replacing the mode's own
    #[arg(short, long, global = true)]
    corpus: Option<PathBuf>,

    /// Only score words from the corpus unless a game turns it off
    #[arg(
        long,
        global = true,
        env = "HANDLE_STRICT_MODE",
        default_value_t = DEFAULT_STRICT_MODE,
        action = ArgAction::Set,
        value_parser = BoolishValueParser::new()
    )]
    strict_mode: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play(PlayArgs),

    /// Show pinyin, categories and explanation of a corpus word
    Query {
        /// The word to look up
        word: String,

        /// Look the word up in the mode with this word name, e.g. 舟语
        #[arg(long)]
        name: Option<String>,
    },

    /// List the categories answers are drawn from
    Categories,
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Hard mode: 5 guesses, strict, no hints
    #[arg(long)]
    hard: bool,

    /// Only accept words from the corpus, even with --strict-mode false
    #[arg(long)]
    strict: bool,

    /// Disable hints
    #[arg(long)]
    nohint: bool,

    /// Tell the player when a strict-mode guess is not in the corpus
    #[arg(long)]
    confirm: bool,

    /// Restrict answers to these categories (repeatable)
    #[arg(long = "category", value_name = "CATEGORY")]
    categories: Vec<String>,

    /// Play arkdle restricted to Integrated Strategies categories
    #[arg(long)]
    ji: bool,

    /// Seed for a reproducible answer
    #[arg(long)]
    seed: Option<u64>,

    /// Seconds of inactivity before the game ends
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

impl PlayArgs {
    fn into_config(self, strict_mode: bool, modes: ModeRegistry) -> PlayConfig {
        let options = GameOptions {
            hard: self.hard,
            strict: self.strict || strict_mode,
            hint_enabled: !self.nohint,
            confirm: self.confirm,
            ..GameOptions::default()
        };
        let mut categories = self.categories;
        if self.ji {
            categories.extend(JI_PRESET.to_vec());
        }
        PlayConfig {
            options,
            categories,
            seed: self.seed,
            timeout: self.timeout.map_or(DEFAULT_TIMEOUT, Duration::from_secs),
            modes,
        }
    }
}

/// Load the corpus of `mode`, or the file given by `--corpus`
fn load_corpus(modes: &ModeRegistry, mode: &str, path: Option<&PathBuf>) -> Result<Corpus> {
    let Some(path) = path else {
        return modes
            .load(mode)
            .with_context(|| format!("failed to load mode {mode}"));
    };

    let mode = mode_by_id(mode).ok_or_else(|| {
        let known: Vec<&str> = MODES.iter().map(|m| m.id).collect();
        anyhow!("unknown mode '{mode}', expected one of: {}", known.join(", "))
    })?;
    load_from_file(path, mode.id, mode.name)
        .with_context(|| format!("failed to load corpus from {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let modes = ModeRegistry::new(cli.data_dir.clone());

    // Default to Play mode if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Play(PlayArgs::default()));

    let mode = match &command {
        Commands::Play(args) if args.ji => {
            if cli.mode != JI_PRESET.mode {
                tracing::warn!(mode = %cli.mode, "--ji plays {}", JI_PRESET.mode);
            }
            JI_PRESET.mode
        }
        _ => cli.mode.as_str(),
    };
    let corpus = load_corpus(&modes, mode, cli.corpus.as_ref())?;

    match command {
        Commands::Play(args) => {
            run_play_command(corpus, args.into_config(cli.strict_mode, modes))
        }
        Commands::Query { word, name } => {
            run_query_command(&modes, &corpus, name.as_deref(), &word)
        }
        Commands::Categories => {
            print_categories(corpus.name(), &list_categories(&corpus));
            Ok(())
        }
    }
}

fn run_play_command(corpus: Corpus, config: PlayConfig) -> Result<()> {
    run_play(Arc::new(corpus), &config, io::stdin().lock())
        .map(|_| ())
        .map_err(|e| anyhow!(e))
}

fn run_query_command(
    modes: &ModeRegistry,
    corpus: &Corpus,
    name: Option<&str>,
    word: &str,
) -> Result<()> {
    let card = match name {
        Some(name) if name != corpus.name() => query_in_mode(modes, name, word),
        _ => query_word(corpus, word),
    }
    .map_err(|e| anyhow!(e))?;
    println!("{card}");
    Ok(())
}
