//! Domain-specific types shared across the conversion pipeline

use std::fmt;

/// DICOM transfer syntax (UID, name)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferSyntax {
    pub uid: String,
    pub name: String,
}

impl TransferSyntax {
    #[must_use]
    pub fn new(uid: String, name: String) -> Self {
        Self { uid, name }
    }
}

impl fmt::Display for TransferSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{name} ({uid})", name = self.name, uid = self.uid)
    }
}

/// SOP Class (UID, name)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SOPClass {
    pub uid: String,
    pub name: String,
}

impl SOPClass {
    #[must_use]
    pub fn new(uid: String, name: String) -> Self {
        Self { uid, name }
    }
}

impl fmt::Display for SOPClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{name} ({uid})", name = self.name, uid = self.uid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: u16,
    pub cols: u16,
}

impl Dimensions {
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        Self { rows, cols }
    }

    #[inline]
    #[must_use]
    pub fn pixel_count(&self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.rows > 0 && self.cols > 0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{cols}x{rows}", cols = self.cols, rows = self.rows)
    }
}

/// Window/level (WW/WC) parameters for the grayscale mapping
///
/// `center` is the midpoint of the value range of interest and `width` its
/// extent. Values are kept as given; validation happens when a window is
/// applied to a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowLevel {
    pub center: f64,
    pub width: f64,
}

impl WindowLevel {
    #[must_use]
    pub fn new(center: f64, width: f64) -> Self {
        Self { center, width }
    }

    /// Lower bound of the window: values at or below it map to black
    #[inline]
    #[must_use]
    pub fn low(&self) -> f64 {
        self.center - self.width / 2.0
    }

    /// Upper bound of the window: values at or above it map to white
    #[inline]
    #[must_use]
    pub fn high(&self) -> f64 {
        self.center + self.width / 2.0
    }
}

impl fmt::Display for WindowLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "C={center} W={width}",
            center = self.center,
            width = self.width
        )
    }
}

/// A row-major 2D grid of raw integer sample values
///
/// Samples are widened to `i32` so that signed and unsigned 8/16-bit data
/// share one representation. Construction guarantees that the buffer length
/// matches the dimensions and that the frame is non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleFrame {
    dims: Dimensions,
    data: Vec<i32>,
}

impl SampleFrame {
    /// Build a frame from dimensions and a matching row-major buffer
    ///
    /// Returns `None` if the dimensions are degenerate or the buffer length
    /// does not equal `rows * cols`.
    #[must_use]
    pub fn from_raw(dims: Dimensions, data: Vec<i32>) -> Option<Self> {
        if !dims.is_valid() || data.len() != dims.pixel_count() {
            return None;
        }
        Some(Self { dims, data })
    }

    #[inline]
    #[must_use]
    pub fn dimensions(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    #[must_use]
    pub fn data(&self) -> &[i32] {
        &self.data
    }

    /// Minimum and maximum sample value; the frame is never empty
    #[must_use]
    pub fn value_range(&self) -> (i32, i32) {
        self.data
            .iter()
            .fold((i32::MAX, i32::MIN), |(min, max), &v| {
                (min.min(v), max.max(v))
            })
    }
}

/// Bit depth information for pixel data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitDepth {
    pub allocated: u16,
    pub stored: u16,
}

impl BitDepth {
    #[must_use]
    pub fn new(allocated: u16, stored: u16) -> Self {
        Self { allocated, stored }
    }

    #[inline]
    #[must_use]
    pub fn bytes_per_pixel(&self) -> u16 {
        self.allocated / 8
    }

    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.stored >= 1 && self.stored <= self.allocated
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{stored}/{allocated} bits",
            stored = self.stored,
            allocated = self.allocated
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_pixel_count_and_validity() {
        let dims = Dimensions::new(512, 512);
        assert_eq!(dims.pixel_count(), 262_144);
        assert!(dims.is_valid());

        assert!(!Dimensions::new(0, 512).is_valid());
        assert!(!Dimensions::new(512, 0).is_valid());
        assert_eq!(Dimensions::new(3, 7).to_string(), "7x3");
    }

    #[test]
    fn test_window_level_bounds() {
        let window = WindowLevel::new(2472.0, 4144.0);
        assert_eq!(window.low(), 400.0);
        assert_eq!(window.high(), 4544.0);
        assert_eq!(window.to_string(), "C=2472 W=4144");
    }

    #[test]
    fn test_window_level_bounds_with_negative_center() {
        let window = WindowLevel::new(-600.0, 1500.0);
        assert_eq!(window.low(), -1350.0);
        assert_eq!(window.high(), 150.0);
    }

    #[test]
    fn test_sample_frame_validates_buffer_length() {
        let dims = Dimensions::new(2, 3);
        assert!(SampleFrame::from_raw(dims, vec![0; 6]).is_some());
        assert!(SampleFrame::from_raw(dims, vec![0; 5]).is_none());
        assert!(SampleFrame::from_raw(dims, vec![0; 7]).is_none());
        assert!(SampleFrame::from_raw(Dimensions::new(0, 3), vec![]).is_none());
    }

    #[test]
    fn test_sample_frame_value_range() {
        let frame = SampleFrame::from_raw(Dimensions::new(1, 4), vec![-1024, 0, 3071, 7])
            .expect("valid test frame");
        assert_eq!(frame.value_range(), (-1024, 3071));
    }

    #[test]
    fn test_bit_depth_bytes_and_validity() {
        let depth = BitDepth::new(16, 12);
        assert_eq!(depth.bytes_per_pixel(), 2);
        assert!(depth.is_valid());
        assert_eq!(depth.to_string(), "12/16 bits");

        assert!(!BitDepth::new(16, 17).is_valid());
        assert!(!BitDepth::new(8, 0).is_valid());
    }
}
