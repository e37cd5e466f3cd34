use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "emokbd")]
#[command(about = "Pick emojis and symbols with the keys of your keyboard layout", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory holding emokbd.toml
    #[arg(long, global = true)]
    pub config_dir: Option<String>,

    /// Directory for the recent list and the log file
    #[arg(long, global = true)]
    pub state_dir: Option<String>,

    /// Directory for corpus sources and caches
    #[arg(long, global = true)]
    pub cache_dir: Option<String>,

    /// Keyboard layout to use instead of [board] layout
    #[arg(long, global = true)]
    pub layout: Option<String>,

    /// Log level for emokbd.log instead of [logging] level
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive picker and print the composed text on exit
    Pick,

    /// Search the corpus
    Search {
        #[arg(required = true)]
        query: Vec<String>,

        #[arg(long, default_value = "20")]
        limit: usize,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// List configured keyboard layouts
    Layouts {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Show the recent list
    Recent {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },

    /// Print the effective configuration as TOML
    Config,

    /// Manage the corpus caches
    Cache {
        #[command(subcommand)]
        command: CacheCommand,
    },
}

#[derive(Subcommand)]
pub enum CacheCommand {
    /// Rebuild corpus caches from the local source files
    Rebuild {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },
}
