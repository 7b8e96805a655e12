// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native result windows backed by `minifb`.
//
// Each `show` opens one window sized to the image. `wait` pumps every open
// window until the wait policy is satisfied; `close_all` drops them, which
// destroys the native windows.

use std::time::Instant;

use figview_core::WaitPolicy;
use figview_core::error::{FigviewError, Result};
use image::DynamicImage;
use minifb::{ScaleMode, Window, WindowOptions};
use tracing::{debug, info};

/// Refresh rate while a window is on screen.
const TARGET_FPS: usize = 30;

/// One open native window and the frame it displays.
struct OpenWindow {
    title: String,
    window: Window,
    /// 0x00RRGGBB per pixel, row-major.
    buffer: Vec<u32>,
    width: usize,
    height: usize,
}

impl OpenWindow {
    /// Redraw the frame and process window events.
    fn refresh(&mut self) -> Result<()> {
        self.window
            .update_with_buffer(&self.buffer, self.width, self.height)
            .map_err(|err| {
                FigviewError::Viewer(format!("failed to refresh '{}': {}", self.title, err))
            })
    }
}

/// `minifb`-backed viewer.
#[derive(Default)]
pub struct WindowViewer {
    windows: Vec<OpenWindow>,
}

impl WindowViewer {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Pack an image into minifb's 0x00RRGGBB layout.
fn to_framebuffer(image: &DynamicImage) -> Vec<u32> {
    image
        .to_rgb8()
        .pixels()
        .map(|pixel| {
            let [r, g, b] = pixel.0;
            (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
        })
        .collect()
}

impl crate::traits::ImageViewer for WindowViewer {
    fn name(&self) -> &str {
        "minifb"
    }

    fn show(&mut self, title: &str, image: &DynamicImage) -> Result<()> {
        let (width, height) = (image.width() as usize, image.height() as usize);
        let options = WindowOptions {
            resize: true,
            scale_mode: ScaleMode::AspectRatioStretch,
            ..WindowOptions::default()
        };

        let mut window = Window::new(title, width, height, options).map_err(|err| {
            FigviewError::Viewer(format!("failed to open window '{}': {}", title, err))
        })?;
        window.set_target_fps(TARGET_FPS);

        let mut open = OpenWindow {
            title: title.to_string(),
            window,
            buffer: to_framebuffer(image),
            width,
            height,
        };
        open.refresh()?;

        info!(title, width, height, "Window opened");
        self.windows.push(open);
        Ok(())
    }

    fn wait(&mut self, policy: WaitPolicy) -> Result<()> {
        let deadline = match policy {
            WaitPolicy::Fixed(duration) => Some(Instant::now() + duration),
            WaitPolicy::UntilKeypress => None,
        };
        debug!(?policy, windows = self.windows.len(), "Waiting on result windows");

        loop {
            let mut any_open = false;
            let mut key_pressed = false;

            for open in self.windows.iter_mut().filter(|w| w.window.is_open()) {
                any_open = true;
                open.refresh()?;
                key_pressed |= !open.window.get_keys().is_empty();
            }

            if !any_open {
                debug!("All windows closed by the user");
                break;
            }

            let done = match deadline {
                Some(deadline) => Instant::now() >= deadline,
                None => key_pressed,
            };
            if done {
                break;
            }
        }

        Ok(())
    }

    fn close_all(&mut self) {
        if !self.windows.is_empty() {
            debug!(count = self.windows.len(), "Closing windows");
        }
        self.windows.clear();
    }

    fn open_windows(&self) -> usize {
        self.windows.len()
    }
}

impl Drop for WindowViewer {
    fn drop(&mut self) {
        self.windows.clear();
    }
}
