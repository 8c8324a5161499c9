//! 命令行定义

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ideascube::application::DEFAULT_EXPORT_PREFIX;

/// Ideascube deployment settings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to runtime configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Deployment identifier (overrides the environment and hostname)
    #[arg(long, global = true)]
    pub id: Option<String>,

    /// Extra directory of `<name>.toml` overlays (overrides config)
    #[arg(long, global = true)]
    pub conf_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve settings and exit (default)
    Check,

    /// Print every resolved setting
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print one resolved setting as JSON
    Get {
        /// Setting name, e.g. MEDIA_ROOT
        key: String,
    },

    /// List registered overlays
    Confs,

    /// Print the export file name for the current deployment
    ExportName {
        /// File name prefix
        #[arg(long, default_value = DEFAULT_EXPORT_PREFIX)]
        prefix: String,
    },
}
