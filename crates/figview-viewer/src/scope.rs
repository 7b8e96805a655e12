// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Scoped display step: windows opened through a `DisplayScope` are closed
// when the scope is dropped, whether the step finished, failed or unwound.

use figview_core::WaitPolicy;
use figview_core::error::Result;
use image::DynamicImage;
use tracing::debug;

use crate::traits::ImageViewer;

/// Borrow of a viewer for the duration of one filter step.
pub struct DisplayScope<'a, V: ImageViewer + ?Sized> {
    viewer: &'a mut V,
}

impl<'a, V: ImageViewer + ?Sized> DisplayScope<'a, V> {
    pub fn new(viewer: &'a mut V) -> Self {
        Self { viewer }
    }

    /// Open one window for `image`.
    pub fn show(&mut self, title: &str, image: &DynamicImage) -> Result<()> {
        self.viewer.show(title, image)
    }

    /// Keep the windows up according to `policy`.
    pub fn wait(&mut self, policy: WaitPolicy) -> Result<()> {
        self.viewer.wait(policy)
    }
}

impl<V: ImageViewer + ?Sized> Drop for DisplayScope<'_, V> {
    fn drop(&mut self) {
        debug!(
            backend = self.viewer.name(),
            open = self.viewer.open_windows(),
            "Closing display scope"
        );
        self.viewer.close_all();
    }
}
