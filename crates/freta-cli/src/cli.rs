//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use freta_types::OutputFormat;

#[derive(Parser)]
#[command(name = "freta")]
#[command(author = "getra")]
#[command(version)]
#[command(about = "Bus charter (fretamento) request registry and reporting dashboard")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the request field schema
    Fields,

    /// Register a new request from a JSON draft file
    Add {
        /// Path to a JSON object mapping field ids (col_0..col_32) to values
        draft: PathBuf,
    },

    /// Replace the fields of an existing request
    Update {
        /// Identifier of the request to edit
        id: String,

        /// Path to the replacement JSON draft
        draft: PathBuf,
    },

    /// Copy an existing request under a new identifier
    Duplicate {
        /// Identifier of the request to copy
        id: String,
    },

    /// Delete a request
    Remove {
        /// Identifier of the request to delete
        id: String,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List registered requests in insertion order
    List {
        /// Limit number of requests shown
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Export all requests to a formatted spreadsheet
    Export {
        /// Output file path (derived from the first record if omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Export a passenger list document
    Passengers {
        /// Path to a JSON passenger list (header fields plus passengers)
        list: PathBuf,

        /// Output file path (derived from the route if omitted)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Produce the paginated PDF rendition instead of the spreadsheet
        #[arg(long)]
        pdf: bool,
    },

    /// Fetch the published feed and show dashboard statistics
    Dashboard {
        /// Feed URL override
        #[arg(long)]
        url: Option<String>,

        /// Filter by process-number substring
        #[arg(long)]
        process: Option<String>,

        /// Filter by departure month (01..12)
        #[arg(long)]
        month: Option<String>,

        /// Filter by executive
        #[arg(long)]
        executive: Option<String>,

        /// Filter by sector
        #[arg(long)]
        sector: Option<String>,

        /// Filter by company
        #[arg(long)]
        company: Option<String>,

        /// Filter by status (e.g. Confirmada, Realizada)
        #[arg(long)]
        status: Option<String>,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set the data directory
        #[arg(long)]
        set_data_dir: Option<PathBuf>,

        /// Set the published-feed URL
        #[arg(long)]
        set_feed_url: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
