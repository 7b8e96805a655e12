// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// figview-imaging — Image operations for the figview demo.
//
// Provides the `ImageProcessor` (load, resize, binarize, channel split,
// saturation extraction, average/median blur, erosion and dilation) and the
// channel helpers it is built on.

pub mod processing;

// Re-export the primary types so callers can use `figview_imaging::ImageProcessor`.
pub use processing::channels::{ChannelPlanes, merge_channels};
pub use processing::processor::ImageProcessor;
