// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// figview-viewer — Result windows for the figview driver.
//
// Defines the `ImageViewer` trait, a scoped `DisplayScope` that always closes
// its windows, a `minifb` implementation (feature `window`) and a headless
// recorder used by `--headless` runs and tests.

pub mod headless;
pub mod scope;
pub mod traits;

#[cfg(feature = "window")]
pub mod window;

use figview_core::error::Result;

pub use headless::{HeadlessViewer, ShownFrame};
pub use scope::DisplayScope;
pub use traits::ImageViewer;

/// Build the viewer for this run.
///
/// `headless` always succeeds. Otherwise the `minifb` viewer is returned, or
/// `ViewerUnavailable` when the crate was built without the `window` feature.
pub fn open_viewer(headless: bool) -> Result<Box<dyn ImageViewer>> {
    if headless {
        return Ok(Box::new(HeadlessViewer::new()));
    }

    #[cfg(feature = "window")]
    {
        Ok(Box::new(window::WindowViewer::new()))
    }
    #[cfg(not(feature = "window"))]
    {
        tracing::warn!("window feature disabled; cannot open result windows");
        Err(figview_core::FigviewError::ViewerUnavailable)
    }
}
