// ─────────────────────────────────────────────────────────────────────
// Director-Class AI — GV Runtime Guard Command-Line Adapter
// (C) 1998-2026 Miroslav Sotek. All rights reserved.
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
#![deny(unsafe_code)]
//! `gv-guard`: reads telemetry JSON on stdin, writes the guard's
//! decision JSON on stdout.
//!
//! Exit status: 0 on success, 2 when stdin is empty or not valid
//! telemetry JSON, 1 for any other failure (unreadable config, I/O).
//!
//! ```text
//! echo '{"token_delta":120,"tool_calls_delta":1}' | gv-guard
//! ```

mod adapter;
mod cli;
mod simulate;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gvguard_types::GuardError;

/// Exit status for absent or malformed input.
const EXIT_BAD_INPUT: u8 = 2;

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<GuardError>() {
        Some(GuardError::Input(_)) => EXIT_BAD_INPUT,
        _ => 1,
    }
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only decision JSON.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = cli::Cli::parse();
    match cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}
