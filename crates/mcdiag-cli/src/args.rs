use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mcdiag")]
#[command(about = "Explain common Minecraft launcher crashes from their logs", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Directory holding config.toml (defaults to $MCDIAG_PATH or the platform data dir)"
    )]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(
        long,
        default_value = "default",
        global = true,
        help = "Named custom-rule set to use"
    )]
    pub scope: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Diagnose a log file (reads stdin when PATH is omitted or `-`)
    Analyze {
        path: Option<PathBuf>,

        #[arg(long, help = "Only run the built-in rules")]
        no_custom: bool,
    },

    /// Print the raw-text URL of the first paste.ee link in a message
    Link { message: String },

    /// List the built-in rules in evaluation order
    Rules,

    /// Manage custom rules for the selected scope
    Custom {
        #[command(subcommand)]
        command: CustomCommand,
    },
}

#[derive(Subcommand)]
pub enum CustomCommand {
    /// Add a rule, or replace the trigger of an existing label
    Add {
        /// Message reported when the trigger is found
        label: String,

        /// Text to look for in the log (plain substring)
        trigger: String,
    },

    /// Show the scope's custom rules
    List,

    /// Remove a rule by label
    Remove { label: String },
}
