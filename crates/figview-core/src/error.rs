// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for figview.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for all figview operations.
#[derive(Debug, Error)]
pub enum FigviewError {
    // -- Image errors --
    #[error("image at {} could not be loaded: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    #[error("invalid kernel size {width}x{height}: sides must be odd and between 1 and 511")]
    InvalidKernel { width: u32, height: u32 },

    #[error("invalid image dimensions {width}x{height}: both must be between 1 and 16384")]
    InvalidDimensions { width: u32, height: u32 },

    // -- Viewer errors --
    #[error("viewer error: {0}")]
    Viewer(String),

    #[error("no windowing backend available in this build")]
    ViewerUnavailable,

    // -- Console --
    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, FigviewError>;
