//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{
    Config, LogFormat, LogLevel, DEFAULT_MAX_HOPS, DEFAULT_QUEUE_CAPACITY, DEFAULT_RESULTS_DIR,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_WORKERS,
};

/// Follows HTTP redirect chains for batches of URLs and checks where they land.
#[derive(Debug, Parser)]
#[command(name = "redirect_check", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check a `url[,expected]` file, or every *.csv then *.txt file under a directory
    Check(CheckArgs),
    /// Sort result lines into per-domain files under a results directory
    Route(RouteArgs),
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input file or directory
    pub path: PathBuf,

    /// Number of concurrent workers
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Maximum hops followed per URL
    #[arg(long, default_value_t = DEFAULT_MAX_HOPS)]
    pub max_hops: usize,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
}

#[derive(Debug, Args)]
pub struct RouteArgs {
    /// File of result lines (reads stdin when omitted)
    pub input: Option<PathBuf>,

    /// Directory the category folders are created under
    #[arg(long, default_value = DEFAULT_RESULTS_DIR)]
    pub results_dir: PathBuf,
}

impl Cli {
    /// Library configuration for a `check` run.
    pub fn to_config(&self, args: &CheckArgs) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            workers: args.workers,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            timeout_seconds: args.timeout_seconds,
            max_hops: args.max_hops,
            user_agent: args.user_agent.clone(),
        }
    }
}
