//! MediaVault CLI Library
//!
//! Command-line dashboard for the MediaVault asset store:
//!
//! - **Browsing**: list assets with search/filter/sort (`mvault list`)
//! - **Inspection**: view a single record (`mvault show`)
//! - **Uploading**: validate and create assets (`mvault upload`)
//! - **Editing**: validate and replace assets (`mvault update`)
//! - **Removal**: delete assets (`mvault delete`)
//! - **Overview**: per-category summary (`mvault status`)

pub mod commands;
pub mod config;
pub mod error;
pub mod preview;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MediaVault - Creative Asset Metadata Manager
#[derive(Parser, Debug)]
#[command(name = "mvault")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Asset store URL
    #[arg(
        long,
        env = "MVAULT_SERVER_URL",
        default_value = "http://localhost:3001",
        global = true
    )]
    pub server_url: String,

    /// Path to a TOML file overriding the category→extension rules
    #[arg(long, env = "MVAULT_RULES_FILE", value_name = "FILE", global = true)]
    pub rules_file: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List assets, optionally filtered and sorted
    List {
        /// Search terms matched against name, description, and tags
        terms: Vec<String>,

        /// Only show assets in this category (exact match)
        #[arg(short, long)]
        category: Option<String>,

        /// Sort key: name, date, or size
        #[arg(long, default_value = "date")]
        sort: String,

        /// Sort direction: asc or desc
        #[arg(long, default_value = "desc")]
        order: String,

        /// Output format: table, compact, or json
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show a single asset
    Show {
        /// Asset id
        id: String,

        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate and upload a new asset
    Upload {
        /// File to upload
        file: PathBuf,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Category (e.g. "3D Model", "Audio", "Video", "Image")
        #[arg(short, long)]
        category: String,

        /// Description (at least 10 characters)
        #[arg(short, long)]
        description: String,

        /// Comma-separated tags
        #[arg(short, long)]
        tags: Option<String>,
    },

    /// Edit an existing asset
    Update {
        /// Asset id
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New category
        #[arg(long)]
        category: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New comma-separated tags (replaces the existing list)
        #[arg(long)]
        tags: Option<String>,

        /// Replacement file; omit to keep the existing file
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Delete an asset
    Delete {
        /// Asset id
        id: String,
    },

    /// Show a summary of the asset store
    Status,
}

/// Split a comma-separated tag list, trimming and dropping empties.
pub fn parse_tags(tags: &str) -> Vec<String> {
    tags.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}
