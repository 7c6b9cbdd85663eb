//! CLI structure and argument parsing.
//!
//! The `skg` CLI follows a standard command-subcommand pattern built with
//! clap derive macros:
//!
//! ```bash
//! # Print the generated configuration for an endpoint
//! skg generate recid --config search.toml
//! skg generate recid --config search.toml --app-id deposits --grid-view
//!
//! # Validate the whole endpoint catalog (intended for CI / startup checks)
//! skg check --config search.toml
//! skg check recid --config search.toml
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI for the `skg` command.
#[derive(Parser, Debug)]
#[command(name = "skg", version, about = "Search UI configuration generator")]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the search UI configuration for one endpoint
    Generate(GenerateArgs),
    /// Validate endpoint configuration without emitting anything
    Check(CheckArgs),
}

/// Arguments for `skg generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Endpoint id to generate configuration for
    pub endpoint: String,

    /// Path to the application search configuration (TOML)
    #[arg(long, short = 'c', env = "SKG_CONFIG")]
    pub config: PathBuf,

    /// Search application id embedded in the output
    #[arg(long, default_value = "search")]
    pub app_id: String,

    /// Offer the grid layout
    #[arg(long)]
    pub grid_view: bool,

    /// Do not offer the list layout (start in grid layout)
    #[arg(long)]
    pub no_list_view: bool,

    /// Page size choices, comma separated
    #[arg(long, value_delimiter = ',')]
    pub page_sizes: Option<Vec<u32>>,

    /// Default page size (must be one of the page size choices)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Hidden query parameter applied to every request (repeatable)
    #[arg(long = "hidden-param", value_name = "KEY=VALUE")]
    pub hidden_params: Vec<String>,

    /// Extra request header (repeatable)
    #[arg(long = "header", value_name = "KEY=VALUE")]
    pub headers: Vec<String>,

    /// JSON object whose top-level keys replace generated values wholesale
    #[arg(long = "override", value_name = "JSON")]
    pub overrides: Option<String>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for `skg check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Endpoint id to validate (validates all endpoints if omitted)
    pub endpoint: Option<String>,

    /// Path to the application search configuration (TOML)
    #[arg(long, short = 'c', env = "SKG_CONFIG")]
    pub config: PathBuf,
}
