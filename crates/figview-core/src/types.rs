// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: figures, filters, kernel sizes and menu selections.

use std::path::{Path, PathBuf};

use crate::error::{FigviewError, Result};

/// One of the three bundled figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Figure {
    One,
    Two,
    Three,
}

impl Figure {
    /// All figures in menu order.
    pub const ALL: [Figure; 3] = [Figure::One, Figure::Two, Figure::Three];

    /// Figure used when the lenient policy meets an unknown choice.
    pub const DEFAULT: Figure = Figure::One;

    /// Map a menu number (1-3) to a figure.
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            3 => Some(Self::Three),
            _ => None,
        }
    }

    /// Menu number for this figure.
    pub fn choice(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }

    /// File name inside the figures directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::One => "FigureOne.jpeg",
            Self::Two => "FigureTwo.jpeg",
            Self::Three => "FigureThree.jpeg",
        }
    }

    /// Full path of the figure below `figs_dir`.
    pub fn path_in(&self, figs_dir: impl AsRef<Path>) -> PathBuf {
        figs_dir.as_ref().join(self.file_name())
    }
}

impl std::fmt::Display for Figure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.file_name())
    }
}

/// Filters offered by the interactive menu.
///
/// Dilation on its own is available from the processor but has no menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    Resize,
    Binary,
    Channels,
    Saturation,
    AverageBlur,
    MedianBlur,
    Erosion,
    /// Dilation followed by erosion with the same kernel.
    Morphological,
}

impl Filter {
    /// All filters in menu order.
    pub const ALL: [Filter; 8] = [
        Filter::Resize,
        Filter::Binary,
        Filter::Channels,
        Filter::Saturation,
        Filter::AverageBlur,
        Filter::MedianBlur,
        Filter::Erosion,
        Filter::Morphological,
    ];

    /// Map a menu number (1-8) to a filter.
    pub fn from_choice(choice: u8) -> Option<Self> {
        Self::ALL.get(usize::from(choice).checked_sub(1)?).copied()
    }

    /// Menu number for this filter.
    pub fn choice(&self) -> u8 {
        match self {
            Self::Resize => 1,
            Self::Binary => 2,
            Self::Channels => 3,
            Self::Saturation => 4,
            Self::AverageBlur => 5,
            Self::MedianBlur => 6,
            Self::Erosion => 7,
            Self::Morphological => 8,
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Resize => "Resize Image",
            Self::Binary => "Convert to Binary",
            Self::Channels => "Show Colour Channels",
            Self::Saturation => "Show Saturation Channel",
            Self::AverageBlur => "Apply Average Blur",
            Self::MedianBlur => "Apply Median Blur",
            Self::Erosion => "Apply Erosion",
            Self::Morphological => "Apply Morphological Operations (Dilation + Erosion)",
        }
    }
}

/// Rectangular kernel size used by the blur and morphology operations.
///
/// Both dimensions are odd, positive and at most `MAX_SIDE`, so every kernel
/// has a centre pixel whose offset fits in a `u8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KernelSize {
    width: u32,
    height: u32,
}

impl KernelSize {
    /// Largest accepted kernel side.
    pub const MAX_SIDE: u32 = 511;

    pub fn new(width: u32, height: u32) -> Result<Self> {
        let valid = |side: u32| side % 2 == 1 && side <= Self::MAX_SIDE;
        if !valid(width) || !valid(height) {
            return Err(FigviewError::InvalidKernel { width, height });
        }
        Ok(Self { width, height })
    }

    /// Square `size` x `size` kernel.
    pub fn square(size: u32) -> Result<Self> {
        Self::new(size, size)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Horizontal distance from the centre to the kernel edge.
    pub fn x_radius(&self) -> u32 {
        self.width / 2
    }

    /// Vertical distance from the centre to the kernel edge.
    pub fn y_radius(&self) -> u32 {
        self.height / 2
    }
}

impl Default for KernelSize {
    fn default() -> Self {
        Self {
            width: 5,
            height: 5,
        }
    }
}

/// Target size for a resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u32,
    height: u32,
}

impl Dimensions {
    /// Largest accepted side, in pixels.
    pub const MAX_SIDE: u32 = 16_384;

    pub fn new(width: u32, height: u32) -> Result<Self> {
        let valid = |side: u32| (1..=Self::MAX_SIDE).contains(&side);
        if !valid(width) || !valid(height) {
            return Err(FigviewError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
        }
    }
}

/// Outcome of a single menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    /// A valid item was chosen.
    Chosen(T),
    /// The reserved exit choice (or end of input).
    Exit,
    /// Invalid input accepted without a choice (lenient filter menu only).
    Skip,
}
