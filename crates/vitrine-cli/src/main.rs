//! `vitrine` binary: runs the built-in pattern demonstrations and prints
//! a deterministic report.
//!
//! Exit codes: 0 when every demo passed, 1 when any failed, 130 when the
//! run was interrupted by a signal.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;

use vitrine_core::{RunOptions, render, run_all, run_selected};
use vitrine_demos::builtin_registry;

#[derive(Parser)]
#[command(name = "vitrine", about = "Design-pattern demonstration harness")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run demos and print the report
    Run {
        /// Comma-separated demo names to run (default: all registered)
        #[arg(long, value_delimiter = ',')]
        only: Option<Vec<String>>,
        /// Halt at the first failing demo
        #[arg(long)]
        stop_on_failure: bool,
        /// Per-demo timeout in milliseconds
        #[arg(long, default_value_t = 1000)]
        timeout: u64,
        /// Emit the summary as JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// List registered demos with their descriptions
    List,
}

/// Execute the `vitrine run` command.
async fn cmd_run(
    only: Option<Vec<String>>,
    stop_on_failure: bool,
    timeout_ms: u64,
    json: bool,
) -> Result<()> {
    let registry = builtin_registry()?;
    let options = RunOptions {
        timeout: Duration::from_millis(timeout_ms),
        stop_on_failure,
    };

    // Graceful shutdown: first signal cancels, second force-exits.
    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    let got_first_signal = Arc::new(AtomicBool::new(false));
    let got_first_clone = Arc::clone(&got_first_signal);

    tokio::spawn(async move {
        loop {
            tokio::signal::ctrl_c().await.ok();
            if got_first_clone.swap(true, Ordering::SeqCst) {
                eprintln!("\nForce exit.");
                std::process::exit(130);
            }
            eprintln!("\nStopping after the current demo (Ctrl+C again to force)...");
            cancel_clone.cancel();
        }
    });

    let summary = match &only {
        Some(names) => run_selected(&registry, names, &options, cancel).await?,
        None => run_all(&registry, &options, cancel).await,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for line in render(&summary) {
            println!("{line}");
        }
    }

    if summary.interrupted {
        std::process::exit(130);
    }
    if summary.failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Execute the `vitrine list` command.
fn cmd_list() -> Result<()> {
    let registry = builtin_registry()?;
    for demo in registry.list() {
        println!("{:<26} {}", demo.name(), demo.description());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            only,
            stop_on_failure,
            timeout,
            json,
        } => cmd_run(only, stop_on_failure, timeout, json).await,
        Commands::List => cmd_list(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_flags_parse() {
        let cli = Cli::try_parse_from([
            "vitrine",
            "run",
            "--only=strategy,state",
            "--stop-on-failure",
            "--timeout=250",
        ])
        .unwrap();

        match cli.command {
            Commands::Run {
                only,
                stop_on_failure,
                timeout,
                json,
            } => {
                assert_eq!(only, Some(vec!["strategy".to_string(), "state".to_string()]));
                assert!(stop_on_failure);
                assert_eq!(timeout, 250);
                assert!(!json);
            }
            Commands::List => panic!("expected run subcommand"),
        }
    }

    #[test]
    fn run_defaults() {
        let cli = Cli::try_parse_from(["vitrine", "run"]).unwrap();
        match cli.command {
            Commands::Run {
                only,
                stop_on_failure,
                timeout,
                json,
            } => {
                assert!(only.is_none());
                assert!(!stop_on_failure);
                assert_eq!(timeout, 1000);
                assert!(!json);
            }
            Commands::List => panic!("expected run subcommand"),
        }
    }

    #[test]
    fn list_parses() {
        let cli = Cli::try_parse_from(["vitrine", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::List));
    }
}
