//! CLI definitions for lemscope.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// lemscope CLI.
#[derive(Parser)]
#[command(name = "lemscope")]
#[command(about = "Emotion, needs and strategy markers for web pages")]
#[command(version)]
pub(crate) struct Cli {
    /// Configuration file path (missing file means defaults)
    #[arg(short, long, default_value = "config/lemscope.toml", global = true)]
    pub config: PathBuf,

    /// Log filter, overriding `logging.level`
    #[arg(long, env = "LEMSCOPE_LOG", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Analyze a web page and print the result as JSON
    Analyze {
        /// Page URL
        url: String,

        /// Use this screenshot instead of capturing one
        #[arg(long)]
        image: Option<PathBuf>,

        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show how a screenshot would be sliced
    Slice {
        /// Screenshot file
        image: PathBuf,

        /// Write each slice as a PNG into this directory
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },

    /// Load and validate the configuration
    ConfigCheck,
}
