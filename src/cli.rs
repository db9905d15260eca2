use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pomoring")]
#[command(about = "Pomodoro countdown with a circular progress ring")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the timer (default)
    Run(RunArgs),

    /// Explain the Pomodoro technique
    Info,

    /// Show where the config and log files are stored
    Paths,

    /// Print the effective configuration as TOML
    Config,
}

#[derive(Args, Default)]
pub struct RunArgs {
    /// Work period length in seconds (overrides config)
    #[arg(long)]
    pub work: Option<u32>,

    /// Break period length in seconds (overrides config)
    #[arg(long = "break")]
    pub rest: Option<u32>,
}
