use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "goalpace", version, about = "Track goals and habits and see how you are pacing")]
pub struct Cli {
    /// Goals/logs data file (overrides the configured path)
    #[arg(long, global = true)]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List goals with their current progress
    Goals {
        /// Only goals in this status: draft, active or ended
        #[arg(long)]
        status: Option<String>,
    },
    /// Show progress statistics for one goal
    Progress {
        /// Goal id or name
        goal: String,
        /// Reference time (defaults to now)
        #[arg(long)]
        now: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Log progress against a goal
    Log {
        /// Goal id or name
        goal: String,
        /// Amount to log
        value: String,
        /// When it happened (defaults to now)
        #[arg(long)]
        date: Option<String>,
        /// Free-form note
        #[arg(long)]
        note: Option<String>,
    },
    /// Cumulative chart data for a goal
    Chart {
        /// Goal id or name
        goal: String,
        /// Range start
        #[arg(long)]
        from: String,
        /// Range end
        #[arg(long)]
        to: String,
        /// Bucket: daily or weekly
        #[arg(long)]
        bucket: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Daily heatmap of a goal for one month
    Heatmap {
        /// Goal id or name
        goal: String,
        /// Month as YYYY-MM
        month: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Statistics across all goals
    Overview {
        /// Reference time (defaults to now)
        #[arg(long)]
        now: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Summarize the current cycle of a goal
    Cycle {
        /// Goal id or name
        goal: String,
        /// Reference time (defaults to now)
        #[arg(long)]
        now: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Export progress statistics for every goal as JSON
    Export {
        /// Reference time (defaults to now)
        #[arg(long)]
        now: Option<String>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
