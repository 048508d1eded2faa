//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// Rollcall: find out who has not filled in the form
#[derive(Parser)]
#[command(name = "rollcall")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Reconcile a response export against an optional roster
    Check {
        /// Path to the response export (CSV/TSV)
        #[arg(value_name = "FILE", required_unless_present = "url", conflicts_with = "url")]
        file: Option<PathBuf>,

        /// Shared Google Sheets link to download instead of a file
        #[arg(long)]
        url: Option<String>,

        /// Master list of expected names (one per line, or a CSV with a name column)
        #[arg(short, long)]
        roster: Option<PathBuf>,

        /// Use this column as the name column instead of detecting one
        #[arg(short = 'n', long)]
        name_column: Option<String>,

        /// JSON file with detection thresholds
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Number of classified rows to include in the preview
        #[arg(long, default_value = "5")]
        preview: usize,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,

        /// Also write the JSON result to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show which columns would be used, without reconciling
    Detect {
        /// Path to the response export (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Use this column as the name column instead of detecting one
        #[arg(short = 'n', long)]
        name_column: Option<String>,

        /// JSON file with detection thresholds
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the HTTP API
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        bind: IpAddr,

        /// Port for web server
        #[arg(short, long, default_value = "5000")]
        port: u16,

        /// Seconds before a check request is abandoned
        #[arg(long, default_value = "30")]
        timeout_secs: u64,
    },
}
