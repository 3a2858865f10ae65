//! CLI module for DevNotes
//!
//! Every widget operation is also reachable from the command line. Running
//! without a subcommand opens the window instead.

mod commands;
mod output;

use clap::{Parser, Subcommand};

pub use output::{print_error, OutputFormat};

/// DevNotes - random jokes and expandable tips for the tutorial site
#[derive(Parser, Debug)]
#[command(name = "devnotes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[command(flatten)]
    pub output: OutputOptions,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output formatting options
#[derive(Parser, Debug, Clone)]
pub struct OutputOptions {
    /// Output in JSON format (for machine parsing)
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl OutputOptions {
    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch and print a random joke
    Joke,

    /// Browse the tips list
    Tips {
        #[command(subcommand)]
        command: commands::tips::TipsCommands,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommands,
    },
}

/// Run a CLI subcommand
pub async fn run(command: Commands, output: &OutputOptions) -> anyhow::Result<()> {
    let format = output.format();
    let quiet = output.quiet;

    match command {
        Commands::Joke => commands::joke::run(format, output.verbose).await,
        Commands::Tips { command } => commands::tips::run(command, format, quiet).await,
        Commands::Config { command } => commands::config::run(command, format, quiet).await,
    }
}
