// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Runtime Guard Command Line
// ─────────────────────────────────────────────────────────────────────
//! Command definitions and dispatch.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use gvguard_types::{GuardConfig, SentinelConfig};

use crate::{adapter, simulate};

/// GV runtime guard: advisory risk signal for agent/tool loops.
#[derive(Parser, Debug)]
#[command(name = "gv-guard")]
#[command(
    version,
    about = "Compute a GV risk decision from agent telemetry JSON",
    after_help = "\
Examples:
  echo '{\"token_delta\":120,\"tool_calls_delta\":1}' | gv-guard
  gv-guard step --lines < telemetry.ndjson      One decision per input line
  echo '{\"drift\":0.19,\"uncertainty\":0.61}' | gv-guard sentinel --system-id demo
  gv-guard simulate --seed 7                    Synthetic three-phase agent loop

Set RUST_LOG=debug to trace every step on stderr."
)]
pub struct Cli {
    /// JSON config file. `step`/`simulate` read guard parameters (damping,
    /// weights, thresholds); `sentinel` reads constraint_strength and its
    /// 0-1 thresholds
    #[arg(long, global = true, env = "GV_GUARD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Step a fresh guard with one telemetry sample from stdin (default)
    Step {
        /// Read newline-delimited samples and step one guard per line
        #[arg(long)]
        lines: bool,
    },

    /// Score a JSON map of normalized signals with the one-shot Sentinel
    Sentinel {
        /// Identifier echoed in the record
        #[arg(long, default_value = "stdin")]
        system_id: String,

        /// Constraint strength, overriding the config file [default: 0.8].
        /// Values at or below 0.01 read as 0.01
        #[arg(long)]
        constraint_strength: Option<f64>,
    },

    /// Drive a guard through a seeded synthetic agent loop
    Simulate {
        /// RNG seed for the synthetic telemetry
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Pause between steps, in milliseconds
        #[arg(long, default_value_t = 0)]
        delay_ms: u64,
    },
}

fn load_config(path: Option<&Path>) -> Result<GuardConfig> {
    let Some(path) = path else {
        return Ok(GuardConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = GuardConfig::from_json(&raw)?;
    config.validate()?;
    tracing::debug!(?config, "loaded guard config from {}", path.display());
    Ok(config)
}

fn load_sentinel_config(
    path: Option<&Path>,
    constraint_strength: Option<f64>,
) -> Result<SentinelConfig> {
    let mut config = match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            SentinelConfig::from_json(&raw)?
        }
        None => SentinelConfig::default(),
    };
    if let Some(strength) = constraint_strength {
        config.constraint_strength = strength;
    }
    config.validate()?;
    tracing::debug!(?config, "sentinel config");
    Ok(config)
}

pub fn run(cli: Cli) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    match cli.command.unwrap_or(Commands::Step { lines: false }) {
        Commands::Step { lines } => {
            let config = load_config(cli.config.as_deref())?;
            if lines {
                let steps = adapter::step_lines(config, stdin.lock(), stdout.lock())?;
                tracing::info!(steps, "telemetry stream finished");
            } else {
                adapter::step_once(config, stdin.lock(), stdout.lock())?;
            }
        }
        Commands::Sentinel {
            system_id,
            constraint_strength,
        } => {
            let config = load_sentinel_config(cli.config.as_deref(), constraint_strength)?;
            adapter::sentinel_once(config, &system_id, stdin.lock(), stdout.lock())?;
        }
        Commands::Simulate { seed, delay_ms } => {
            let config = load_config(cli.config.as_deref())?;
            simulate::run(config, seed, Duration::from_millis(delay_ms), &mut stdout.lock())
                .context("writing simulation output")?;
        }
    }
    Ok(())
}
