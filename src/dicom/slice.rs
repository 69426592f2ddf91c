//! Extracted DICOM slice data

use crate::types::{BitDepth, SOPClass, SampleFrame, TransferSyntax};

use super::photometric::PhotometricInterpretation;
use super::pixel_data::PixelRepresentation;

/// Identifying metadata, available even when pixel extraction fails
#[derive(Debug, Clone)]
pub struct SliceMetadata {
    pub modality: Option<String>,
    pub sop_class: Option<SOPClass>,
    pub transfer_syntax: TransferSyntax,
}

/// A single-frame grayscale image extracted from a DICOM file
#[derive(Debug, Clone)]
pub struct DicomSlice {
    pub metadata: SliceMetadata,

    // Pixel encoding attributes
    pub photometric_interpretation: PhotometricInterpretation,
    pub samples_per_pixel: u16, // Always 1 after validation
    pub bit_depth: BitDepth,
    pub pixel_representation: PixelRepresentation,

    // Stored samples, row-major
    pub samples: SampleFrame,
}

impl DicomSlice {
    #[inline(always)]
    #[must_use]
    pub fn rows(&self) -> u16 {
        self.samples.dimensions().rows
    }

    #[inline(always)]
    #[must_use]
    pub fn cols(&self) -> u16 {
        self.samples.dimensions().cols
    }
}
