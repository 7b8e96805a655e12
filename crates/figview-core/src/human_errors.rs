// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages printed by the interactive driver.
//
// Every technical error is mapped to plain English with a clear suggestion.

use crate::error::FigviewError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// User must fix something (missing figure, bad parameter) and run again.
    ActionRequired,
    /// Environment problem that the tool cannot work around.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// One-line summary.
    pub message: String,
    /// What the user should try.
    pub suggestion: String,
    /// Severity level.
    pub severity: Severity,
}

impl std::fmt::Display for HumanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.message, self.suggestion)
    }
}

/// Convert a `FigviewError` into a `HumanError`.
pub fn humanize_error(err: &FigviewError) -> HumanError {
    match err {
        FigviewError::Load { path, reason } => HumanError {
            message: format!("The figure {} could not be opened.", path.display()),
            suggestion: format!(
                "Check that the file exists and is a JPEG or PNG image, or point --figs-dir at the right folder. ({reason})"
            ),
            severity: Severity::ActionRequired,
        },

        FigviewError::InvalidKernel { width, height } => HumanError {
            message: format!("A {width}x{height} kernel cannot be used."),
            suggestion: "Kernel sides must be odd numbers such as 3, 5 or 7.".into(),
            severity: Severity::ActionRequired,
        },

        FigviewError::InvalidDimensions { width, height } => HumanError {
            message: format!("An image cannot be resized to {width}x{height}."),
            suggestion: "Enter a width and height between 1 and 16384.".into(),
            severity: Severity::ActionRequired,
        },

        FigviewError::Viewer(detail) => HumanError {
            message: "The result window could not be shown.".into(),
            suggestion: format!(
                "Make sure a graphical display is available, or run with --headless. ({detail})"
            ),
            severity: Severity::Permanent,
        },

        FigviewError::ViewerUnavailable => HumanError {
            message: "This build cannot open windows.".into(),
            suggestion: "Rebuild with the `window` feature or run with --headless.".into(),
            severity: Severity::Permanent,
        },

        FigviewError::Io(io_err) => HumanError {
            message: "Reading from the terminal failed.".into(),
            suggestion: format!("Run figview from an interactive terminal. ({io_err})"),
            severity: Severity::Permanent,
        },
    }
}
