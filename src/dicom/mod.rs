//! DICOM file parsing and slice extraction
//!
//! This module provides functionality for opening DICOM files and extracting
//! the attributes and pixel samples needed for grayscale conversion.

mod parser;
mod photometric;
mod pixel_data;
mod slice;
mod validation;

// Re-export public API
pub use photometric::PhotometricInterpretation;
pub use pixel_data::PixelRepresentation;
pub use slice::{DicomSlice, SliceMetadata};

use anyhow::{Context, Result};
use dicom::object::{
    open_file,
    FileDicomObject,
    InMemDicomObject,
    StandardDataDictionary
};
use std::path::Path;

use crate::types::SampleFrame;

/// Open and parse a DICOM file
pub fn open_dicom_file(file_path: &Path) -> Result<FileDicomObject<InMemDicomObject<StandardDataDictionary>>> {
    open_file(file_path)
        .with_context(|| format!("Failed to open DICOM file: {}", file_path.display()))
}

/// Read the identifying metadata of a DICOM object
///
/// These fields are extracted leniently so they stay available for error
/// reporting even when the object turns out not to be an image.
pub fn read_metadata(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
) -> SliceMetadata {
    SliceMetadata {
        modality: parser::extract_modality(obj),
        sop_class: parser::extract_sop_class(obj),
        transfer_syntax: parser::extract_transfer_syntax(obj),
    }
}

/// Extract the pixel samples and attributes of a single-frame grayscale slice
pub fn extract_slice(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
) -> Result<DicomSlice> {
    let metadata = read_metadata(obj);
    let error_context = parser::ErrorContext::from(&metadata);

    let dimensions = parser::extract_dimensions(obj, &error_context)?;
    let bit_depth = parser::extract_bit_depth(obj, &error_context)?;
    let samples_per_pixel = parser::extract_samples_per_pixel(obj);
    let number_of_frames = parser::extract_number_of_frames(obj);
    let pixel_representation = parser::extract_pixel_representation(obj);
    let photometric_interpretation = parser::extract_photometric_interpretation(obj);

    // Reject unsupported layouts before touching the pixel data
    validation::validate_slice(
        &photometric_interpretation,
        samples_per_pixel,
        bit_depth,
        number_of_frames,
    )?;

    let data = pixel_data::extract_samples(obj, dimensions, bit_depth, pixel_representation)?;

    let samples = SampleFrame::from_raw(dimensions, data)
        .context("Pixel data length does not match the image dimensions")?;

    Ok(DicomSlice {
        metadata,
        photometric_interpretation,
        samples_per_pixel,
        bit_depth,
        pixel_representation,
        samples,
    })
}
