// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Driver configuration. Built from command-line flags; there is no config file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::types::Figure;

/// How the menus treat input outside the offered choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputPolicy {
    /// Re-prompt until a valid choice is entered.
    #[default]
    Strict,
    /// Fall back to a default figure, or skip the filter step.
    Lenient,
}

/// How long a result stays on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitPolicy {
    /// Keep the windows open for this long, then close them.
    Fixed(Duration),
    /// Keep the windows open until a key is pressed or every window is closed.
    UntilKeypress,
}

impl WaitPolicy {
    /// `0` means wait for a keypress.
    pub fn from_secs(secs: u64) -> Self {
        if secs == 0 {
            Self::UntilKeypress
        } else {
            Self::Fixed(Duration::from_secs(secs))
        }
    }
}

impl Default for WaitPolicy {
    fn default() -> Self {
        Self::Fixed(Duration::from_secs(10))
    }
}

/// Settings for one run of the interactive driver.
#[derive(Debug, Clone)]
pub struct DriverConfig {
    /// Directory that holds the three figure files.
    pub figs_dir: PathBuf,
    /// Invalid input handling for both menus.
    pub policy: InputPolicy,
    /// Display duration per filter step.
    pub wait: WaitPolicy,
    /// Run a single figure/filter pass and exit.
    pub once: bool,
    /// Never open windows.
    pub headless: bool,
}

impl DriverConfig {
    /// Location of `figure` inside the configured directory.
    pub fn figure_path(&self, figure: Figure) -> PathBuf {
        figure.path_in(&self.figs_dir)
    }

    pub fn figs_dir(&self) -> &Path {
        &self.figs_dir
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            figs_dir: PathBuf::from("figs"),
            policy: InputPolicy::Strict,
            wait: WaitPolicy::default(),
            once: false,
            headless: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seconds_waits_for_keypress() {
        assert_eq!(WaitPolicy::from_secs(0), WaitPolicy::UntilKeypress);
        assert_eq!(
            WaitPolicy::from_secs(20),
            WaitPolicy::Fixed(Duration::from_secs(20))
        );
    }

    #[test]
    fn default_config_reads_from_figs() {
        let config = DriverConfig::default();
        assert_eq!(config.policy, InputPolicy::Strict);
        assert_eq!(
            config.figure_path(Figure::Three),
            PathBuf::from("figs/FigureThree.jpeg")
        );
        assert!(!config.once);
    }
}
