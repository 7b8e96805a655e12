// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Turns the end of a session into user-facing output and a process status.

use std::io::Write;

use figview_core::human_errors::humanize_error;
use figview_core::{FigviewError, InputPolicy};
use tracing::{error, warn};

use crate::driver::SessionSummary;

/// Normal exit, user exit, end of input, or any lenient failure.
pub const EXIT_OK: u8 = 0;
/// Strict failure.
pub const EXIT_FAILED: u8 = 1;

/// Report how the session ended and pick the exit status.
///
/// Strict runs explain a failure on `stderr` and exit non-zero. Lenient runs
/// print a one-line notice on `stdout` and still exit cleanly.
pub fn finish<O, E>(
    policy: InputPolicy,
    result: Result<SessionSummary, FigviewError>,
    stdout: &mut O,
    stderr: &mut E,
) -> u8
where
    O: Write,
    E: Write,
{
    let err = match result {
        Ok(_) => return EXIT_OK,
        Err(err) => err,
    };

    // A failed write here has nowhere left to go; the status still stands.
    match policy {
        InputPolicy::Strict => {
            let human = humanize_error(&err);
            error!(error = %err, severity = ?human.severity, "Session failed");
            let _ = writeln!(stderr, "{}\n{}", human.message, human.suggestion);
            EXIT_FAILED
        }
        InputPolicy::Lenient => {
            warn!(error = %err, "Session failed");
            let _ = writeln!(stdout, "An error occurred: {err}");
            EXIT_OK
        }
    }
}
