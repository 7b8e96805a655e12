// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colour-plane helpers: split an RGB buffer into single-channel planes,
// merge them back, and derive luma and HSV saturation planes.

use image::{GrayImage, Luma, Rgb, RgbImage};

/// The three single-channel planes of a colour image, in the sample order of
/// the source buffer (`image` stores R, G, B).
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelPlanes {
    pub red: GrayImage,
    pub green: GrayImage,
    pub blue: GrayImage,
}

impl ChannelPlanes {
    /// Split `image` into its planes.
    pub fn split(image: &RgbImage) -> Self {
        let plane = |idx: usize| {
            GrayImage::from_fn(image.width(), image.height(), |x, y| {
                Luma([image.get_pixel(x, y).0[idx]])
            })
        };
        Self {
            red: plane(0),
            green: plane(1),
            blue: plane(2),
        }
    }

    /// Planes paired with a display name, in buffer order.
    pub fn named(&self) -> [(&'static str, &GrayImage); 3] {
        [
            ("Red Channel", &self.red),
            ("Green Channel", &self.green),
            ("Blue Channel", &self.blue),
        ]
    }

    /// Run `op` over every plane, keeping the plane order.
    pub fn map<F>(&self, mut op: F) -> Self
    where
        F: FnMut(&GrayImage) -> GrayImage,
    {
        Self {
            red: op(&self.red),
            green: op(&self.green),
            blue: op(&self.blue),
        }
    }
}

/// Recombine planes into one RGB image. Exact inverse of `ChannelPlanes::split`.
///
/// All three planes must share the dimensions of `planes.red`.
pub fn merge_channels(planes: &ChannelPlanes) -> RgbImage {
    let (width, height) = planes.red.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            planes.red.get_pixel(x, y).0[0],
            planes.green.get_pixel(x, y).0[0],
            planes.blue.get_pixel(x, y).0[0],
        ])
    })
}

/// BT.601 luma in 14-bit fixed point, rounded to nearest.
///
/// Weights are 0.299, 0.587 and 0.114 scaled by 2^14.
pub fn luma_bt601(image: &RgbImage) -> GrayImage {
    const R_WEIGHT: u32 = 4899;
    const G_WEIGHT: u32 = 9617;
    const B_WEIGHT: u32 = 1868;
    const SHIFT: u32 = 14;

    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgb([r, g, b]) = *image.get_pixel(x, y);
        let weighted = u32::from(r) * R_WEIGHT
            + u32::from(g) * G_WEIGHT
            + u32::from(b) * B_WEIGHT
            + (1 << (SHIFT - 1));
        Luma([(weighted >> SHIFT) as u8])
    })
}

/// Saturation plane of the HSV representation, scaled to 0..=255.
///
/// `V = max(R, G, B)`; `S = 255 * (V - min) / V`, rounded, and 0 for black.
pub fn saturation_plane(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        let Rgb([r, g, b]) = *image.get_pixel(x, y);
        let value = u32::from(r.max(g).max(b));
        if value == 0 {
            return Luma([0]);
        }
        let chroma = value - u32::from(r.min(g).min(b));
        Luma([((255 * chroma + value / 2) / value) as u8])
    })
}
