mod demo;

use anyhow::Context;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use prettylog_core::access_log::RequestLogger;
use prettylog_core::cli::logs::run_logs;
use prettylog_core::config::PrettylogConfig;
use prettylog_core::logging::{LogMode, init_logging};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "prettylog",
    version,
    about = "prettylog: colorized one-line HTTP access logs"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay sample traffic through the access logger (default)
    Demo {
        /// Path to a prettylog config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Only run the pretty strategy
        #[arg(long, conflicts_with = "structured")]
        pretty: bool,

        /// Only run the structured strategy
        #[arg(long)]
        structured: bool,
    },

    /// Re-render structured access events read from stdin
    Logs {
        #[arg(long)]
        raw: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Logs { raw }) => run_logs(raw).context("failed to run logs command"),

        Some(Command::Demo {
            config,
            pretty,
            structured,
        }) => run_demo(config, pretty, structured).await,

        None => run_demo(None, false, false).await,
    }
}

async fn run_demo(config: Option<PathBuf>, pretty: bool, structured: bool) -> anyhow::Result<()> {
    init_logging();

    let cfg = match config {
        Some(path) => PrettylogConfig::from_file(&path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => PrettylogConfig::default(),
    };

    let modes: &[LogMode] = if pretty {
        &[LogMode::Pretty]
    } else if structured {
        &[LogMode::Structured]
    } else {
        &[LogMode::Structured, LogMode::Pretty]
    };

    for (i, mode) in modes.iter().enumerate() {
        if modes.len() > 1 {
            let heading = if i == 0 { "Before:" } else { "After:" };
            println!("\n{}", heading.bold());
        }

        demo::replay(RequestLogger::from_config(&cfg.logger, Some(*mode))).await;
    }

    Ok(())
}
