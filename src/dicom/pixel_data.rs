//! DICOM pixel data extraction
//!
//! This module turns the stored Pixel Data element into native integer
//! samples. Compressed transfer syntaxes and byte order are normalized
//! by the pixel data decoder before the bytes are reinterpreted here.

use anyhow::{Context, Result, bail};
use dicom::object::{
    FileDicomObject,
    InMemDicomObject,
    StandardDataDictionary
};
use dicom::pixeldata::PixelDecoder;

use crate::types::{BitDepth, Dimensions};

/// Pixel Representation (0028,0103): whether stored samples are signed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelRepresentation {
    Unsigned,
    Signed,
}

impl std::fmt::Display for PixelRepresentation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unsigned => write!(f, "unsigned"),
            Self::Signed => write!(f, "signed"),
        }
    }
}

/// Extract the stored samples of a single-frame grayscale image
pub fn extract_samples(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
    dimensions: Dimensions,
    bit_depth: BitDepth,
    representation: PixelRepresentation,
) -> Result<Vec<i32>> {
    let expected = dimensions.pixel_count() * usize::from(bit_depth.bytes_per_pixel());

    let decoded = obj
        .decode_pixel_data()
        .context("Failed to decode pixel data")?;

    // Use raw decoded data to avoid LUT issues
    let frame = frame_bytes(decoded.data(), expected)?;
    samples_from_le_bytes(frame, bit_depth.allocated, representation)
}

/// Take exactly one frame's worth of bytes, tolerating trailing padding
fn frame_bytes(data: &[u8], expected: usize) -> Result<&[u8]> {
    if data.len() < expected {
        bail!(
            "Pixel data too short: expected {expected} bytes, got {}",
            data.len()
        );
    }

    // OB-encoded pixel data may carry a trailing pad byte
    Ok(&data[..expected])
}

/// Decode little-endian sample bytes into native integers
fn samples_from_le_bytes(
    bytes: &[u8],
    bits_allocated: u16,
    representation: PixelRepresentation,
) -> Result<Vec<i32>> {
    match (bits_allocated, representation) {
        (8, PixelRepresentation::Unsigned) => {
            Ok(bytes.iter().map(|&b| i32::from(b)).collect())
        }
        (8, PixelRepresentation::Signed) => {
            Ok(bytes.iter().map(|&b| i32::from(b as i8)).collect())
        }
        (16, PixelRepresentation::Unsigned) => Ok(bytes
            .chunks_exact(2)
            .map(|chunk| i32::from(u16::from_le_bytes([chunk[0], chunk[1]])))
            .collect()),
        (16, PixelRepresentation::Signed) => Ok(bytes
            .chunks_exact(2)
            .map(|chunk| i32::from(i16::from_le_bytes([chunk[0], chunk[1]])))
            .collect()),
        _ => bail!("Unsupported bits allocated: {bits_allocated}"),
    }
}
