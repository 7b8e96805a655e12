// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Interactive session: choose a figure, choose a filter, show the result,
// repeat until the user exits.

use std::io::{BufRead, Write};

use figview_core::error::Result;
use figview_core::{Dimensions, DriverConfig, Filter, Selection};
use figview_imaging::ImageProcessor;
use figview_viewer::{DisplayScope, ImageViewer};
use tracing::{info, instrument};

use crate::dispatch::{self, Frame};
use crate::menu::Prompter;

/// What happened during a session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    /// Figures loaded.
    pub figures_loaded: usize,
    /// Filters applied and displayed.
    pub filters_applied: usize,
}

/// Drives the figure/filter loop against a viewer.
pub struct Driver<'a, R, W, V: ImageViewer + ?Sized> {
    config: &'a DriverConfig,
    prompter: Prompter<R, W>,
    viewer: &'a mut V,
}

impl<'a, R, W, V> Driver<'a, R, W, V>
where
    R: BufRead,
    W: Write,
    V: ImageViewer + ?Sized,
{
    pub fn new(config: &'a DriverConfig, input: R, output: W, viewer: &'a mut V) -> Self {
        Self {
            config,
            prompter: Prompter::new(input, output, config.policy),
            viewer,
        }
    }

    /// Run until the user exits, input ends, or (with `once`) after the
    /// first figure. Load and display failures end the session.
    #[instrument(skip_all, fields(viewer = self.viewer.name(), policy = ?self.config.policy))]
    pub fn run(&mut self) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            let figure = match self.prompter.select_figure()? {
                Selection::Chosen(figure) => figure,
                Selection::Exit | Selection::Skip => break,
            };

            // A fresh processor per pass; it is dropped before the next menu.
            let processor = ImageProcessor::open(self.config.figure_path(figure))?;
            summary.figures_loaded += 1;
            info!(%figure, width = processor.width(), height = processor.height(), "Figure ready");

            match self.prompter.select_filter()? {
                Selection::Chosen(filter) => {
                    let Some(resize_to) = self.resize_target(filter)? else {
                        break;
                    };
                    let frames = dispatch::render(&processor, filter, resize_to);
                    self.display(&frames)?;
                    summary.filters_applied += 1;
                }
                Selection::Skip => info!("No filter applied"),
                Selection::Exit => break,
            }

            if self.config.once {
                break;
            }
        }

        info!(
            figures = summary.figures_loaded,
            filters = summary.filters_applied,
            "Session finished"
        );
        Ok(summary)
    }

    /// Dimensions for `filter`: asked for a resize, the default otherwise.
    /// `None` when input ends while asking.
    fn resize_target(&mut self, filter: Filter) -> Result<Option<Dimensions>> {
        if filter != Filter::Resize {
            return Ok(Some(Dimensions::default()));
        }
        Ok(match self.prompter.read_dimensions()? {
            Selection::Chosen(dims) => Some(dims),
            Selection::Exit | Selection::Skip => None,
        })
    }

    /// Show every frame, wait, then close the windows.
    fn display(&mut self, frames: &[Frame]) -> Result<()> {
        let mut scope = DisplayScope::new(&mut *self.viewer);
        for frame in frames {
            scope.show(frame.title, &frame.image)?;
        }
        scope.wait(self.config.wait)
    }
}
