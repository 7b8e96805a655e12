// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Maps a menu filter onto processor calls and titles the resulting frames.

use figview_core::{Dimensions, Filter, KernelSize};
use figview_imaging::ImageProcessor;
use image::DynamicImage;

/// Iteration count used by the erosion and closing menu entries.
pub const MORPHOLOGY_ITERATIONS: u32 = 1;

/// One result image and the window title it is shown under.
pub struct Frame {
    pub title: &'static str,
    pub image: DynamicImage,
}

impl Frame {
    fn new(title: &'static str, image: impl Into<DynamicImage>) -> Self {
        Self {
            title,
            image: image.into(),
        }
    }
}

/// Run `filter` over the loaded figure.
///
/// `resize_to` is only read for [`Filter::Resize`]. Every other filter uses
/// the default 5x5 kernel.
pub fn render(processor: &ImageProcessor, filter: Filter, resize_to: Dimensions) -> Vec<Frame> {
    let kernel = KernelSize::default();
    match filter {
        Filter::Resize => vec![Frame::new("Resized Image", processor.resize(resize_to))],
        Filter::Binary => vec![Frame::new("Binary Image", processor.convert_to_binary())],
        Filter::Channels => processor
            .split_channels()
            .named()
            .into_iter()
            .map(|(title, plane)| Frame::new(title, plane.clone()))
            .collect(),
        Filter::Saturation => vec![Frame::new(
            "Saturation Channel",
            processor.extract_saturation_channel(),
        )],
        Filter::AverageBlur => vec![Frame::new("Blurred Image", processor.average_blur(kernel))],
        Filter::MedianBlur => vec![Frame::new(
            "Median Blurred Image",
            processor.median_blur(kernel),
        )],
        Filter::Erosion => vec![Frame::new(
            "Eroded Image",
            processor.erode(kernel, MORPHOLOGY_ITERATIONS),
        )],
        Filter::Morphological => vec![Frame::new(
            "Final Processed Image",
            processor.dilate_then_erode(kernel, MORPHOLOGY_ITERATIONS),
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    fn processor() -> ImageProcessor {
        let img = RgbImage::from_fn(24, 18, |x, y| Rgb([(x * 10) as u8, (y * 12) as u8, 90]));
        ImageProcessor::from_dynamic(DynamicImage::ImageRgb8(img))
    }

    fn titles(frames: &[Frame]) -> Vec<&'static str> {
        frames.iter().map(|f| f.title).collect()
    }

    #[test]
    fn every_filter_has_its_window_titles() {
        let proc = processor();
        let expected: [(Filter, &[&str]); 8] = [
            (Filter::Resize, &["Resized Image"]),
            (Filter::Binary, &["Binary Image"]),
            (
                Filter::Channels,
                &["Red Channel", "Green Channel", "Blue Channel"],
            ),
            (Filter::Saturation, &["Saturation Channel"]),
            (Filter::AverageBlur, &["Blurred Image"]),
            (Filter::MedianBlur, &["Median Blurred Image"]),
            (Filter::Erosion, &["Eroded Image"]),
            (Filter::Morphological, &["Final Processed Image"]),
        ];

        for (filter, want) in expected {
            let frames = render(&proc, filter, Dimensions::default());
            assert_eq!(titles(&frames), want.to_vec(), "{filter:?}");
        }
    }

    #[test]
    fn single_plane_results_have_one_channel() {
        let proc = processor();
        for filter in [Filter::Binary, Filter::Channels, Filter::Saturation] {
            for frame in render(&proc, filter, Dimensions::default()) {
                assert_eq!(frame.image.color().channel_count(), 1, "{}", frame.title);
            }
        }
        for frame in render(&proc, Filter::AverageBlur, Dimensions::default()) {
            assert_eq!(frame.image.color().channel_count(), 3);
        }
    }

    #[test]
    fn resize_uses_requested_dimensions() {
        let target = Dimensions::new(30, 7).expect("positive");
        let frames = render(&processor(), Filter::Resize, target);
        assert_eq!((frames[0].image.width(), frames[0].image.height()), (30, 7));
    }

    #[test]
    fn non_resize_filters_keep_source_size() {
        let proc = processor();
        for frame in render(&proc, Filter::Erosion, Dimensions::default()) {
            assert_eq!((frame.image.width(), frame.image.height()), (24, 18));
        }
    }
}
