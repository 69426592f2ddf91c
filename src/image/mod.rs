//! Image rendering and PNG output

mod window;

pub use window::{NormalizedFrame, QuantizedFrame, WindowError, apply_window, quantize, validate_window};

use anyhow::{Context, Result};
use image::{DynamicImage, GrayImage, ImageBuffer, ImageFormat};
use std::path::Path;

/// Wrap a quantized frame in an 8-bit single-channel image
///
/// The Luma8 variant keeps the grayscale pixel semantics explicit all the
/// way into the PNG encoder.
pub fn render_gray(frame: QuantizedFrame) -> Result<DynamicImage> {
    let dims = frame.dimensions();

    let buffer: GrayImage = ImageBuffer::from_raw(
        u32::from(dims.cols),
        u32::from(dims.rows),
        frame.into_raw(),
    )
    .context("Failed to create grayscale image buffer")?;

    Ok(DynamicImage::ImageLuma8(buffer))
}

/// Write an image to `path` as PNG, regardless of the path's extension
pub fn write_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write PNG file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Dimensions, SampleFrame, WindowLevel};

    // Window [0, 255]: sample 0 maps to pixel 0 and sample 255 to pixel 255
    fn identity_window() -> WindowLevel {
        WindowLevel::new(127.5, 255.0)
    }

    fn quantized(rows: u16, cols: u16, samples: Vec<i32>) -> QuantizedFrame {
        let frame = SampleFrame::from_raw(Dimensions::new(rows, cols), samples)
            .expect("valid test frame");
        let normalized = apply_window(&frame, identity_window()).expect("valid test window");
        quantize(&normalized)
    }

    #[test]
    fn test_gray_image_preserves_row_major_order() {
        // rows of (0, 255), (255, 0), (255, 255)
        let frame = quantized(3, 2, vec![0, 255, 255, 0, 255, 255]);

        let image = render_gray(frame).expect("render image");
        let gray = image.as_luma8().expect("should be a Luma8 image");
        assert_eq!(gray.dimensions(), (2, 3));

        assert_eq!(gray.get_pixel(0, 0).0[0], 0);
        assert_eq!(gray.get_pixel(1, 0).0[0], 255);
        assert_eq!(gray.get_pixel(0, 1).0[0], 255);
        assert_eq!(gray.get_pixel(1, 1).0[0], 0);
        assert_eq!(gray.get_pixel(0, 2).0[0], 255);
        assert_eq!(gray.get_pixel(1, 2).0[0], 255);
    }

    #[test]
    fn test_png_round_trip() {
        let dims = Dimensions::new(16, 16);
        let samples = (0..dims.pixel_count()).map(|i| i as i32 * 3).collect();
        let frame = quantized(16, 16, samples);
        let expected = frame.data().to_vec();

        let image = render_gray(frame).expect("render image");

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("slice.png");
        write_png(&image, &path).expect("write PNG");

        let decoded = image::open(&path).expect("reopen PNG");
        let gray = decoded
            .as_luma8()
            .expect("PNG should decode as 8-bit grayscale");
        assert_eq!(gray.dimensions(), (16, 16));
        assert_eq!(gray.as_raw().as_slice(), expected.as_slice());
    }

    #[test]
    fn test_write_png_error_names_the_path() {
        let frame = quantized(1, 1, vec![128]);
        let image = render_gray(frame).expect("render image");

        let err = write_png(&image, Path::new("/nonexistent-dir/slice.png"))
            .expect_err("write into a missing directory should fail");
        assert!(err.to_string().contains("/nonexistent-dir/slice.png"));
    }
}
