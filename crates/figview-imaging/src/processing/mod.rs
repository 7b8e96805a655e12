// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Processing module: the image processor, colour-plane helpers and the
// per-plane blur/morphology filters.

pub mod channels;
pub mod filters;
pub mod processor;

pub use processor::ImageProcessor;
