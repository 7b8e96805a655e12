// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line flags. Everything else is asked interactively.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use figview_core::{DriverConfig, InputPolicy, WaitPolicy};

/// Load a figure, pick a filter, and look at the result.
#[derive(Debug, Parser)]
#[command(name = "figview", version, about)]
pub struct Cli {
    /// Directory holding FigureOne.jpeg, FigureTwo.jpeg and FigureThree.jpeg.
    #[arg(long, default_value = "figs")]
    pub figs_dir: PathBuf,

    /// What to do with menu input outside the offered choices.
    #[arg(long, value_enum, default_value_t = PolicyArg::Strict)]
    pub policy: PolicyArg,

    /// Seconds each result stays on screen; 0 waits for a keypress.
    #[arg(long, default_value_t = 10)]
    pub wait_secs: u64,

    /// Process a single figure/filter pair, then exit.
    #[arg(long)]
    pub once: bool,

    /// Do not open windows; log the results instead.
    #[arg(long)]
    pub headless: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Ask again until the input is valid.
    Strict,
    /// Use the first figure, or apply no filter.
    Lenient,
}

impl From<PolicyArg> for InputPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Strict => InputPolicy::Strict,
            PolicyArg::Lenient => InputPolicy::Lenient,
        }
    }
}

impl From<Cli> for DriverConfig {
    fn from(cli: Cli) -> Self {
        Self {
            figs_dir: cli.figs_dir,
            policy: cli.policy.into(),
            wait: WaitPolicy::from_secs(cli.wait_secs),
            once: cli.once,
            headless: cli.headless,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn defaults_match_driver_defaults() {
        let cli = Cli::try_parse_from(["figview"]).expect("parse");
        let config = DriverConfig::from(cli);
        let defaults = DriverConfig::default();

        assert_eq!(config.figs_dir, defaults.figs_dir);
        assert_eq!(config.policy, defaults.policy);
        assert_eq!(config.wait, defaults.wait);
        assert_eq!(config.once, defaults.once);
        assert_eq!(config.headless, defaults.headless);
    }

    #[test]
    fn flags_map_onto_config() {
        let cli = Cli::try_parse_from([
            "figview",
            "--figs-dir",
            "/tmp/figures",
            "--policy",
            "lenient",
            "--wait-secs",
            "20",
            "--once",
            "--headless",
        ])
        .expect("parse");
        let config = DriverConfig::from(cli);

        assert_eq!(config.figs_dir, PathBuf::from("/tmp/figures"));
        assert_eq!(config.policy, InputPolicy::Lenient);
        assert_eq!(config.wait, WaitPolicy::Fixed(Duration::from_secs(20)));
        assert!(config.once);
        assert!(config.headless);
    }

    #[test]
    fn zero_wait_means_keypress() {
        let cli = Cli::try_parse_from(["figview", "--wait-secs", "0"]).expect("parse");
        assert_eq!(DriverConfig::from(cli).wait, WaitPolicy::UntilKeypress);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(Cli::try_parse_from(["figview", "--policy", "sometimes"]).is_err());
    }
}
