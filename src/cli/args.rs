//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    browse::BrowseArgs, completions::CompletionsArgs, config::ConfigCommands, list::ListArgs,
    show::ShowArgs,
};

#[derive(Parser)]
#[command(name = "pokedex")]
#[command(author, version, about = "Pokédex catalog viewer")]
#[command(long_about = "Browse the PokeAPI catalog from the terminal: list and search entries by name or number, and view detail pages with stats and descriptions.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (info-level logs on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// API root (default: https://pokeapi.co/api/v2)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the catalog, optionally filtered by name or number
    List(ListArgs),

    /// Show an entry's detail page
    Show(ShowArgs),

    /// Interactive catalog browser
    Browse(BrowseArgs),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (pretty for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}
