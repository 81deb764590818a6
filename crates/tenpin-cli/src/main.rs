//! Tenpin command-line scorer.
//!
//! # Quick Start
//!
//! ```bash
//! # Score a game, padding the rest of the 20 throws with gutters
//! tenpin score 5 5 3 --pad
//!
//! # Show how every throw was scored
//! tenpin trace 5 5 3 4
//!
//! # Write a tenpin.toml with the defaults
//! tenpin init
//! ```

mod commands;
mod style;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

/// Tenpin - paired-throw bonus scorer.
#[derive(Parser)]
#[command(name = "tenpin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Write a default tenpin.toml.
    Init {
        /// Project directory.
        #[arg(default_value = ".")]
        path: String,
    },

    /// Score a sequence of throws.
    Score {
        #[command(flatten)]
        game: GameArgs,

        /// Output format (text, json). Defaults to output.format from config.
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Show how each throw was scored.
    Trace {
        #[command(flatten)]
        game: GameArgs,

        /// Output format (text, json). Defaults to output.format from config.
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the merged configuration.
    Show {
        /// Project directory.
        #[arg(short, long, default_value = ".")]
        project: String,

        /// Output format (text, json, toml).
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

/// Throw list and scoring options shared by `score` and `trace`.
#[derive(Args)]
pub struct GameArgs {
    /// Pins knocked down by each throw, in order.
    #[arg(required = true, allow_negative_numbers = true)]
    pub pins: Vec<i32>,

    /// Fill the game with gutter throws up to game.throws_per_game.
    #[arg(long)]
    pub pad: bool,

    /// Reject negative pin counts and counts above 10.
    #[arg(long)]
    pub strict: bool,

    /// Project directory to read tenpin.toml from.
    #[arg(short, long, default_value = ".")]
    pub project: String,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        style::set_no_color(true);
    }

    match cli.command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Init { path } => commands::init::run(&path),
        Commands::Score { game, format } => commands::score::run(&game, format.as_deref()),
        Commands::Trace { game, format } => commands::trace::run(&game, format.as_deref()),
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { project, format } => commands::config::show(&project, &format),
        },
    }
}
