// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Headless viewer for `--headless` runs and CI, where no display is present.
//
// Nothing is drawn: every frame is logged and recorded so callers can check
// what would have been shown. Waiting returns immediately.

use figview_core::WaitPolicy;
use figview_core::error::Result;
use image::DynamicImage;
use tracing::info;

use crate::traits::ImageViewer;

/// Summary of one frame handed to the viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShownFrame {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Samples per pixel (1 for planes and binary images, 3 for colour).
    pub channels: u8,
}

/// Recording viewer that never opens a window.
#[derive(Debug, Default)]
pub struct HeadlessViewer {
    frames: Vec<ShownFrame>,
    waits: Vec<WaitPolicy>,
    open: usize,
    close_calls: usize,
}

impl HeadlessViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame shown so far, in order.
    pub fn frames(&self) -> &[ShownFrame] {
        &self.frames
    }

    /// Every wait requested so far.
    pub fn waits(&self) -> &[WaitPolicy] {
        &self.waits
    }

    /// How often `close_all` ran.
    pub fn close_calls(&self) -> usize {
        self.close_calls
    }
}

impl ImageViewer for HeadlessViewer {
    fn name(&self) -> &str {
        "headless"
    }

    fn show(&mut self, title: &str, image: &DynamicImage) -> Result<()> {
        let frame = ShownFrame {
            title: title.to_string(),
            width: image.width(),
            height: image.height(),
            channels: image.color().channel_count(),
        };
        info!(
            title,
            width = frame.width,
            height = frame.height,
            channels = frame.channels,
            "Frame (headless)"
        );
        self.frames.push(frame);
        self.open += 1;
        Ok(())
    }

    fn wait(&mut self, policy: WaitPolicy) -> Result<()> {
        info!(?policy, open = self.open, "Wait skipped (headless)");
        self.waits.push(policy);
        Ok(())
    }

    fn close_all(&mut self) {
        self.open = 0;
        self.close_calls += 1;
    }

    fn open_windows(&self) -> usize {
        self.open
    }
}
