// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Viewer abstraction used by the interactive driver.
//
// The windowing subsystem is process-wide state. Implementations own every
// window they open and must release all of them in `close_all` and on drop.

use figview_core::WaitPolicy;
use figview_core::error::Result;
use image::DynamicImage;

/// Something that can put images on screen for a while.
pub trait ImageViewer {
    /// Short backend name for logs (e.g. "minifb", "headless").
    fn name(&self) -> &str;

    /// Open a window titled `title` showing `image`.
    fn show(&mut self, title: &str, image: &DynamicImage) -> Result<()>;

    /// Block according to `policy` while the open windows stay on screen.
    fn wait(&mut self, policy: WaitPolicy) -> Result<()>;

    /// Close every open window. Must be idempotent.
    fn close_all(&mut self);

    /// Number of windows currently open.
    fn open_windows(&self) -> usize;
}
