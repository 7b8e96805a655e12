// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image processor: resize, binarize, channel split, saturation, blur and
// morphology over one loaded figure. Operates on in-memory images using the
// `image` and `imageproc` crates.

use figview_core::error::FigviewError;
use figview_core::{Dimensions, KernelSize};
use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Luma, RgbImage};
use tracing::{debug, info, instrument};

use crate::processing::channels::{self, ChannelPlanes};
use crate::processing::filters;

/// Fixed binarization threshold: samples above it become white.
pub const BINARY_THRESHOLD: u8 = 127;

/// Image operations over a single loaded figure.
///
/// The figure is normalised to 8-bit RGB on load and never modified: every
/// operation borrows `self` and returns a freshly allocated buffer.
///
/// ```ignore
/// let processor = ImageProcessor::open("figs/FigureOne.jpeg")?;
/// let binary = processor.convert_to_binary();
/// let blurred = processor.average_blur(KernelSize::default());
/// ```
pub struct ImageProcessor {
    /// The loaded figure.
    image: RgbImage,
}

impl ImageProcessor {
    // -- Construction ---------------------------------------------------------

    /// Load and decode an image file.
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, FigviewError> {
        let path = path.as_ref();
        let img = image::open(path).map_err(|err| FigviewError::Load {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        info!(
            width = img.width(),
            height = img.height(),
            color = ?img.color(),
            "Image loaded"
        );
        Ok(Self::from_dynamic(img))
    }

    /// Wrap an already-decoded `DynamicImage`, converting it to RGB.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self {
            image: image.to_rgb8(),
        }
    }

    // -- Accessors ------------------------------------------------------------

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Borrow the loaded RGB buffer.
    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    // -- Geometry -------------------------------------------------------------

    /// Resize to exactly `dims`, ignoring aspect ratio. Bilinear filtering.
    #[instrument(skip(self))]
    pub fn resize(&self, dims: Dimensions) -> RgbImage {
        info!(
            from_w = self.width(),
            from_h = self.height(),
            to_w = dims.width(),
            to_h = dims.height(),
            "Resizing image"
        );
        image::imageops::resize(&self.image, dims.width(), dims.height(), FilterType::Triangle)
    }

    // -- Thresholding ---------------------------------------------------------

    /// Grayscale conversion followed by a fixed threshold at
    /// [`BINARY_THRESHOLD`]. Output samples are exactly 0 or 255.
    #[instrument(skip(self))]
    pub fn convert_to_binary(&self) -> GrayImage {
        let mut binary = channels::luma_bt601(&self.image);
        for pixel in binary.pixels_mut() {
            let Luma([value]) = *pixel;
            *pixel = Luma([if value > BINARY_THRESHOLD { 255 } else { 0 }]);
        }
        debug!("Binarization complete");
        binary
    }

    // -- Channels -------------------------------------------------------------

    /// Split into three single-channel planes in buffer order.
    #[instrument(skip(self))]
    pub fn split_channels(&self) -> ChannelPlanes {
        info!("Splitting colour channels");
        ChannelPlanes::split(&self.image)
    }

    /// Saturation plane of the HSV representation.
    #[instrument(skip(self))]
    pub fn extract_saturation_channel(&self) -> GrayImage {
        info!("Extracting saturation channel");
        channels::saturation_plane(&self.image)
    }

    // -- Blur -----------------------------------------------------------------

    /// Box-filter averaging over `kernel`.
    #[instrument(skip(self))]
    pub fn average_blur(&self, kernel: KernelSize) -> RgbImage {
        info!(
            kernel_w = kernel.width(),
            kernel_h = kernel.height(),
            "Applying average blur"
        );
        filters::box_blur(&self.image, kernel)
    }

    /// Median filter over `kernel`.
    #[instrument(skip(self))]
    pub fn median_blur(&self, kernel: KernelSize) -> RgbImage {
        info!(
            kernel_w = kernel.width(),
            kernel_h = kernel.height(),
            "Applying median blur"
        );
        filters::median_blur(&self.image, kernel)
    }

    // -- Morphology -----------------------------------------------------------

    /// Erode with an all-ones `kernel`, `iterations` times.
    #[instrument(skip(self))]
    pub fn erode(&self, kernel: KernelSize, iterations: u32) -> RgbImage {
        info!(
            kernel_w = kernel.width(),
            kernel_h = kernel.height(),
            iterations,
            "Applying erosion"
        );
        filters::erode(&self.image, kernel, iterations)
    }

    /// Dilate with an all-ones `kernel`, `iterations` times.
    #[instrument(skip(self))]
    pub fn dilate(&self, kernel: KernelSize, iterations: u32) -> RgbImage {
        info!(
            kernel_w = kernel.width(),
            kernel_h = kernel.height(),
            iterations,
            "Applying dilation"
        );
        filters::dilate(&self.image, kernel, iterations)
    }

    /// Dilation followed by erosion, both with the same kernel and iteration
    /// count. The order is fixed.
    #[instrument(skip(self))]
    pub fn dilate_then_erode(&self, kernel: KernelSize, iterations: u32) -> RgbImage {
        info!(
            kernel_w = kernel.width(),
            kernel_h = kernel.height(),
            iterations,
            "Applying dilation then erosion"
        );
        let dilated = filters::dilate(&self.image, kernel, iterations);
        filters::erode(&dilated, kernel, iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::channels::merge_channels;
    use image::Rgb;

    fn sample_image(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 9 % 256) as u8, (y * 13 % 256) as u8, ((x * y) % 256) as u8])
        })
    }

    fn processor(width: u32, height: u32) -> ImageProcessor {
        ImageProcessor::from_dynamic(DynamicImage::ImageRgb8(sample_image(width, height)))
    }

    /// Loading a PNG from disk keeps its dimensions and pixels.
    #[test]
    fn open_png_matches_source() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("figure.png");
        let img = sample_image(37, 21);
        img.save(&path).expect("save png");

        let loaded = ImageProcessor::open(&path).expect("load png");
        assert_eq!((loaded.width(), loaded.height()), (37, 21));
        assert_eq!(loaded.as_rgb(), &img);
    }

    /// JPEG figures are lossy, but the dimensions must match.
    #[test]
    fn open_jpeg_matches_dimensions() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("FigureOne.jpeg");
        sample_image(64, 48).save(&path).expect("save jpeg");

        let loaded = ImageProcessor::open(&path).expect("load jpeg");
        assert_eq!((loaded.width(), loaded.height()), (64, 48));
    }

    /// Grayscale files are promoted to three channels.
    #[test]
    fn open_grayscale_promotes_to_rgb() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("gray.png");
        GrayImage::from_pixel(5, 4, Luma([90u8]))
            .save(&path)
            .expect("save gray");

        let loaded = ImageProcessor::open(&path).expect("load gray");
        assert!(loaded.as_rgb().pixels().all(|p| p.0 == [90, 90, 90]));
    }

    #[test]
    fn open_missing_file_is_load_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing.jpeg");
        match ImageProcessor::open(&path) {
            Err(FigviewError::Load { path: failed, .. }) => assert_eq!(failed, path),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("missing file must not load"),
        }
    }

    #[test]
    fn open_garbage_file_is_load_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.jpeg");
        std::fs::write(&path, b"definitely not a jpeg").expect("write");
        assert!(matches!(
            ImageProcessor::open(&path),
            Err(FigviewError::Load { .. })
        ));
    }

    #[test]
    fn resize_yields_exact_dimensions() {
        let proc = processor(40, 30);
        for (w, h) in [(1, 1), (17, 91), (80, 15), (40, 30)] {
            let resized = proc.resize(Dimensions::new(w, h).expect("positive"));
            assert_eq!(resized.dimensions(), (w, h));
        }
    }

    #[test]
    fn binary_output_has_two_levels() {
        let binary = processor(50, 50).convert_to_binary();
        assert_eq!(binary.dimensions(), (50, 50));
        assert!(binary.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
        assert!(binary.pixels().any(|p| p.0[0] == 0));
        assert!(binary.pixels().any(|p| p.0[0] == 255));
    }

    #[test]
    fn binary_threshold_is_strictly_above_127() {
        let img = RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 { Rgb([127, 127, 127]) } else { Rgb([128, 128, 128]) }
        });
        let binary = ImageProcessor::from_dynamic(DynamicImage::ImageRgb8(img)).convert_to_binary();
        assert_eq!(binary.get_pixel(0, 0).0[0], 0);
        assert_eq!(binary.get_pixel(1, 0).0[0], 255);
    }

    #[test]
    fn split_then_merge_round_trips() {
        let proc = processor(23, 17);
        let merged = merge_channels(&proc.split_channels());
        assert_eq!(&merged, proc.as_rgb());
    }

    #[test]
    fn saturation_is_single_channel_same_size() {
        let sat = processor(12, 8).extract_saturation_channel();
        assert_eq!(sat.dimensions(), (12, 8));
    }

    #[test]
    fn blurs_preserve_size() {
        let proc = processor(31, 19);
        assert_eq!(proc.average_blur(KernelSize::default()).dimensions(), (31, 19));
        assert_eq!(proc.median_blur(KernelSize::default()).dimensions(), (31, 19));
    }

    #[test]
    fn dilate_then_erode_with_unit_kernel_is_identity() {
        let proc = processor(29, 14);
        let unit = KernelSize::square(1).expect("1x1");
        assert_eq!(&proc.dilate_then_erode(unit, 1), proc.as_rgb());
        assert_eq!(&proc.erode(unit, 1), proc.as_rgb());
        assert_eq!(&proc.dilate(unit, 1), proc.as_rgb());
    }

    #[test]
    fn dilate_then_erode_fills_small_holes() {
        let mut img = RgbImage::from_pixel(9, 9, Rgb([255, 255, 255]));
        img.put_pixel(4, 4, Rgb([0, 0, 0]));
        let proc = ImageProcessor::from_dynamic(DynamicImage::ImageRgb8(img));
        let closed = proc.dilate_then_erode(KernelSize::square(3).expect("3x3"), 1);
        assert!(closed.pixels().all(|p| p.0 == [255, 255, 255]));
    }

    #[test]
    fn operations_leave_source_untouched() {
        let proc = processor(16, 16);
        let before = proc.as_rgb().clone();
        let _ = proc.convert_to_binary();
        let _ = proc.erode(KernelSize::default(), 2);
        let _ = proc.average_blur(KernelSize::default());
        assert_eq!(proc.as_rgb(), &before);
    }
}
