//! Window/level (WW/WC) grayscale mapping
//!
//! The transform clips raw sample values to the `[low, high]` window around
//! the center, rescales them linearly into `[0, 1]`, and quantizes the
//! result to 8 bits. It never mutates the input frame.

use crate::types::{Dimensions, SampleFrame, WindowLevel};
use thiserror::Error;

/// Window parameter rejection, surfaced before any pass over the samples
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum WindowError {
    #[error("window width must be positive, got {width}")]
    NonPositiveWidth { width: f64 },

    #[error("window center and width must be finite, got center={center} width={width}")]
    NonFinite { center: f64, width: f64 },

    #[error("window [{low}, {high}] is too narrow to span a value range")]
    CollapsedRange { low: f64, high: f64 },

    #[error("window [{low:e}, {high:e}] is too wide to map in single precision")]
    OverflowingRange { low: f64, high: f64 },
}

/// Frame of window-normalized intensities, every value in `[0.0, 1.0]`
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedFrame {
    dims: Dimensions,
    values: Vec<f32>,
}

impl NormalizedFrame {
    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Minimum and maximum normalized intensity; the frame is never empty
    #[must_use]
    pub fn value_range(&self) -> (f32, f32) {
        self.values
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(min, max), &v| {
                (min.min(v), max.max(v))
            })
    }
}

/// Frame of 8-bit grayscale pixel values, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedFrame {
    dims: Dimensions,
    data: Vec<u8>,
}

impl QuantizedFrame {
    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    #[must_use]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}

/// Check window parameters without touching any sample data
///
/// The width must be positive and both parameters finite. The derived
/// `[low, high]` bounds must also survive the trip into f32, where the
/// per-pixel math runs: bounds that collapse to the same single-precision
/// value are rejected, and so are bounds whose span overflows the
/// single-precision range.
pub fn validate_window(window: WindowLevel) -> Result<(), WindowError> {
    if !window.center.is_finite() || !window.width.is_finite() {
        return Err(WindowError::NonFinite {
            center: window.center,
            width: window.width,
        });
    }

    if window.width <= 0.0 {
        return Err(WindowError::NonPositiveWidth {
            width: window.width,
        });
    }

    let low = window.low();
    let high = window.high();
    let range = (high as f32) - (low as f32);
    if !range.is_finite() {
        return Err(WindowError::OverflowingRange { low, high });
    }
    if range <= 0.0 {
        return Err(WindowError::CollapsedRange { low, high });
    }

    Ok(())
}

/// Map raw samples into `[0, 1]` with a linear window/level rule
///
/// Samples below `center - width/2` clip to 0.0 and samples above
/// `center + width/2` clip to 1.0; values exactly on a bound are in-window
/// and map to the corresponding endpoint. The output has the same shape as
/// the input.
///
/// Uses f32 for the per-pixel work; integer samples up to 16 bits are
/// exact in f32, and clamping before the division keeps every result
/// inside the closed unit interval.
pub fn apply_window(
    samples: &SampleFrame,
    window: WindowLevel,
) -> Result<NormalizedFrame, WindowError> {
    validate_window(window)?;

    let low = window.low() as f32;
    let high = window.high() as f32;
    let range = high - low;

    let values = samples
        .data()
        .iter()
        .map(|&v| ((v as f32).clamp(low, high) - low) / range)
        .collect();

    Ok(NormalizedFrame {
        dims: samples.dimensions(),
        values,
    })
}

/// Quantize normalized intensities to 8-bit grayscale
///
/// Expects values already in `[0, 1]` and does not re-clip them.
#[must_use]
pub fn quantize(normalized: &NormalizedFrame) -> QuantizedFrame {
    let data = normalized
        .values
        .iter()
        // Saturating cast: floors toward zero and caps at 255, so
        // floating-point overshoot (e.g. 1.0000001 * 255) cannot wrap
        .map(|&v| (v * 255.0_f32) as u8)
        .collect();

    QuantizedFrame {
        dims: normalized.dims,
        data,
    }
}
