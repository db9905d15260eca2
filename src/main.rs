mod cli;
mod config;
mod error;
mod logging;
mod paths;
mod progress;
mod timer;
mod tui;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::Parser;
use cli::{Cli, Command, RunArgs};
use console::style;
use tracing::info;

use timer::phase::format_countdown;
use timer::CycleStats;
use tui::widgets::info::{INFO_MESSAGE, INFO_TITLE};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(paths::config_file);

    match cli.command.unwrap_or_else(|| Command::Run(RunArgs::default())) {
        Command::Run(args) => run_timer(&config_path, cli.verbose, &args),

        Command::Info => {
            println!("{}", style(INFO_TITLE).bold());
            println!();
            println!("  {INFO_MESSAGE}");
            Ok(())
        }

        Command::Paths => {
            println!("Config: {}", config_path.display());
            println!("Log:    {}", paths::log_file().display());
            Ok(())
        }

        Command::Config => {
            let config = config::load_config(&config_path)?;
            config.settings().context("Invalid configuration")?;
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn run_timer(config_path: &Path, verbose: u8, args: &RunArgs) -> Result<()> {
    logging::init_logging(verbose, &paths::log_file())?;

    let mut config = config::load_config(config_path)?;
    if let Some(work) = args.work {
        config.timer.work_secs = work;
    }
    if let Some(rest) = args.rest {
        config.timer.break_secs = rest;
    }
    let settings = config.settings().context("Invalid configuration")?;
    info!(
        work = config.timer.work_secs,
        rest = config.timer.break_secs,
        config = %config_path.display(),
        "starting timer"
    );

    let started = Local::now();
    let mut terminal = tui::init().context("Failed to initialise terminal")?;
    let outcome = tui::screens::pomodoro::run(&mut terminal, &settings);
    tui::restore()?;
    let outcome = outcome?;

    print_summary(started, &outcome.stats);
    Ok(())
}

fn print_summary(started: DateTime<Local>, stats: &CycleStats) {
    let elapsed = (Local::now() - started).num_seconds().max(0);
    let elapsed = u32::try_from(elapsed).unwrap_or(u32::MAX);

    println!();
    println!("{}", style("Session").bold());
    println!("  Started:        {}", started.format("%Y-%m-%d %H:%M:%S"));
    println!("  Open for:       {}", format_countdown(elapsed));
    println!(
        "  Work periods:   {}",
        style(stats.work_completed).red().bold()
    );
    println!(
        "  Breaks taken:   {}",
        style(stats.breaks_completed).green().bold()
    );
    println!();
}
