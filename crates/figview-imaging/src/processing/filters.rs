// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Neighbourhood filters: box blur, median blur, erosion and dilation over
// RGB images. Colour images are processed one plane at a time with the
// `imageproc` grayscale primitives.

use figview_core::KernelSize;
use image::{GrayImage, Luma, RgbImage};
use imageproc::filter::{box_filter, median_filter};
use imageproc::morphology::{Mask, grayscale_dilate, grayscale_erode};

use crate::processing::channels::{ChannelPlanes, merge_channels};

/// Apply `op` to every colour plane of `image` and reassemble the result.
fn map_planes<F>(image: &RgbImage, op: F) -> RgbImage
where
    F: FnMut(&GrayImage) -> GrayImage,
{
    merge_channels(&ChannelPlanes::split(image).map(op))
}

/// Box filter: every sample becomes the mean of its `kernel` neighbourhood.
/// Edges are handled by clamping to the nearest border sample.
pub fn box_blur(image: &RgbImage, kernel: KernelSize) -> RgbImage {
    map_planes(image, |plane| {
        box_filter(plane, kernel.x_radius(), kernel.y_radius())
    })
}

/// Median filter over a `kernel` neighbourhood, per channel.
pub fn median_blur(image: &RgbImage, kernel: KernelSize) -> RgbImage {
    median_filter(image, kernel.x_radius(), kernel.y_radius())
}

/// All-ones rectangular structuring element centred on the kernel.
fn rectangle_mask(kernel: KernelSize) -> Mask {
    let block = GrayImage::from_pixel(kernel.width(), kernel.height(), Luma([255u8]));
    // KernelSize caps each side at 511, so both radii fit in a u8.
    Mask::from_image(&block, kernel.x_radius() as u8, kernel.y_radius() as u8)
}

/// Grayscale erosion (local minimum) with a rectangular kernel, applied
/// `iterations` times.
pub fn erode(image: &RgbImage, kernel: KernelSize, iterations: u32) -> RgbImage {
    let mask = rectangle_mask(kernel);
    repeat(image, iterations, |img| {
        map_planes(img, |plane| grayscale_erode(plane, &mask))
    })
}

/// Grayscale dilation (local maximum) with a rectangular kernel, applied
/// `iterations` times.
pub fn dilate(image: &RgbImage, kernel: KernelSize, iterations: u32) -> RgbImage {
    let mask = rectangle_mask(kernel);
    repeat(image, iterations, |img| {
        map_planes(img, |plane| grayscale_dilate(plane, &mask))
    })
}

fn repeat<F>(image: &RgbImage, iterations: u32, mut step: F) -> RgbImage
where
    F: FnMut(&RgbImage) -> RgbImage,
{
    let mut current = image.clone();
    for _ in 0..iterations {
        current = step(&current);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    /// Black 11x11 canvas with a white 3x3 square centred on (5, 5).
    fn white_square() -> RgbImage {
        RgbImage::from_fn(11, 11, |x, y| {
            if (4..=6).contains(&x) && (4..=6).contains(&y) {
                Rgb([255, 255, 255])
            } else {
                Rgb([0, 0, 0])
            }
        })
    }

    fn white_count(image: &RgbImage) -> usize {
        image.pixels().filter(|p| p.0 == [255, 255, 255]).count()
    }

    #[test]
    fn box_blur_keeps_uniform_image() {
        let img = RgbImage::from_pixel(9, 7, Rgb([40, 120, 200]));
        let blurred = box_blur(&img, KernelSize::default());
        assert_eq!(blurred, img);
    }

    #[test]
    fn box_blur_spreads_a_bright_pixel() {
        let mut img = RgbImage::from_pixel(9, 9, Rgb([0, 0, 0]));
        img.put_pixel(4, 4, Rgb([225, 225, 225]));
        let blurred = box_blur(&img, KernelSize::square(3).expect("3x3"));
        // 225 / 9 = 25 across the 3x3 neighbourhood.
        assert_eq!(blurred.get_pixel(3, 3).0, [25, 25, 25]);
        assert_eq!(blurred.get_pixel(4, 4).0, [25, 25, 25]);
        assert_eq!(blurred.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn median_blur_removes_salt_noise() {
        let mut img = RgbImage::from_pixel(9, 9, Rgb([50, 60, 70]));
        img.put_pixel(4, 4, Rgb([255, 255, 255]));
        let filtered = median_blur(&img, KernelSize::square(3).expect("3x3"));
        assert_eq!(filtered.get_pixel(4, 4).0, [50, 60, 70]);
    }

    #[test]
    fn erosion_shrinks_and_dilation_grows() {
        let img = white_square();
        let kernel = KernelSize::square(3).expect("3x3");

        let eroded = erode(&img, kernel, 1);
        assert_eq!(white_count(&eroded), 1);
        assert_eq!(eroded.get_pixel(5, 5).0, [255, 255, 255]);

        let dilated = dilate(&img, kernel, 1);
        assert_eq!(white_count(&dilated), 25);
        assert_eq!(dilated.get_pixel(3, 3).0, [255, 255, 255]);
    }

    #[test]
    fn iterations_compound() {
        let img = white_square();
        let kernel = KernelSize::square(3).expect("3x3");
        let twice = dilate(&img, kernel, 2);
        assert_eq!(white_count(&twice), 49);
        assert_eq!(dilate(&img, kernel, 0), img);
    }

    #[test]
    fn rectangular_kernel_is_anisotropic() {
        let img = white_square();
        let wide = KernelSize::new(5, 1).expect("5x1");
        let dilated = dilate(&img, wide, 1);
        // 3 rows of 3 grow by 2 on each side horizontally only.
        assert_eq!(white_count(&dilated), 21);
        assert_eq!(dilated.get_pixel(5, 3).0, [0, 0, 0]);
    }
}
