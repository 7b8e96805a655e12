// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// figview — Interactive figure filter demo
//
// Entry point. Initialises logging, parses flags, opens the viewer and runs
// the interactive session on stdin/stdout.

mod cli;
mod dispatch;
mod driver;
mod menu;
mod outcome;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use figview_core::{DriverConfig, Result};

use cli::Cli;
use driver::{Driver, SessionSummary};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = DriverConfig::from(Cli::parse());
    tracing::info!(
        figs_dir = %config.figs_dir().display(),
        policy = ?config.policy,
        wait = ?config.wait,
        once = config.once,
        headless = config.headless,
        "figview starting"
    );

    let mut viewer = match figview_viewer::open_viewer(config.headless) {
        Ok(viewer) => viewer,
        Err(err) => return exit_code(&config, Err(err)),
    };

    let result = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        Driver::new(&config, stdin.lock(), stdout.lock(), viewer.as_mut()).run()
    };

    // Nothing may stay on screen once the session is over, however it ended.
    viewer.close_all();

    exit_code(&config, result)
}

fn exit_code(config: &DriverConfig, result: Result<SessionSummary>) -> ExitCode {
    let status = outcome::finish(config.policy, result, &mut io::stdout(), &mut io::stderr());
    ExitCode::from(status)
}
