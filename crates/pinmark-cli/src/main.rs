//! Pinmark CLI
//!
//! Command-line interface for Pinmark - source-location bookmarks and
//! navigation history.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pinmark_core::{Config, Session};

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "pinmark")]
#[command(about = "Pinmark - bookmarks and navigation history for source locations")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a bookmark at a location
    Add {
        /// Resource identifier (file URI or path)
        uri: String,
        /// Line number (1-based)
        #[arg(short, long)]
        line: u32,
        /// Column number (1-based)
        #[arg(short, long, default_value_t = 1)]
        column: u32,
        /// Bookmark label (defaults to file:line, max 100 characters)
        #[arg(long)]
        label: Option<String>,
    },
    /// List all bookmarks
    #[command(alias = "ls")]
    List,
    /// Remove a bookmark
    #[command(alias = "rm")]
    Remove {
        /// Bookmark id
        id: String,
    },
    /// Remove all bookmarks
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Record a visit to a location
    Visit {
        /// Resource identifier (file URI or path)
        uri: String,
        /// Line number (1-based)
        #[arg(short, long)]
        line: u32,
        /// Column number (1-based)
        #[arg(short, long, default_value_t = 1)]
        column: u32,
    },
    /// Show or clear navigation history
    History {
        #[command(subcommand)]
        command: Option<HistoryCommands>,
    },
    /// Export bookmarks to a JSON file
    Export {
        /// Destination file
        path: PathBuf,
    },
    /// Import bookmarks from a JSON file
    Import {
        /// Source file
        path: PathBuf,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum HistoryCommands {
    /// List history entries, most recent first
    #[command(alias = "ls")]
    List {
        /// Show at most this many entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Remove all history entries
    Clear,
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, max_history)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    // Config commands don't need a session
    if let Commands::Config { command } = &cli.command {
        return handle_config_command(command.clone(), &output);
    }

    let config = Config::load().context("Failed to load configuration")?;
    let mut session = Session::open(&config);

    match cli.command {
        Commands::Add {
            uri,
            line,
            column,
            label,
        } => commands::bookmark::add(&mut session, uri, line, column, label, &output),
        Commands::List => commands::bookmark::list(&session, &output),
        Commands::Remove { id } => commands::bookmark::remove(&mut session, id, &output),
        Commands::Clear { yes } => commands::bookmark::clear(&mut session, yes, &output),
        Commands::Visit { uri, line, column } => {
            commands::history::visit(&mut session, uri, line, column, &output)
        }
        Commands::History { command } => handle_history_command(command, &mut session, &output),
        Commands::Export { path } => commands::transfer::export(&session, path, &output),
        Commands::Import { path } => commands::transfer::import(&mut session, path, &output),
        Commands::Config { .. } => unreachable!(), // Handled above
    }
}

fn handle_history_command(
    command: Option<HistoryCommands>,
    session: &mut Session,
    output: &Output,
) -> Result<()> {
    match command {
        Some(HistoryCommands::List { limit }) => commands::history::list(session, limit, output),
        None => commands::history::list(session, None, output),
        Some(HistoryCommands::Clear) => commands::history::clear(session, output),
    }
}

fn handle_config_command(command: Option<ConfigCommands>, output: &Output) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => commands::config::show(output),
        Some(ConfigCommands::Set { key, value }) => commands::config::set(key, value, output),
    }
}
