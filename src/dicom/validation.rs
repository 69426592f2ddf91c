use anyhow::{Result, bail};

use crate::types::BitDepth;

use super::photometric::PhotometricInterpretation;

#[inline]
pub fn validate_photometric_samples(
    photometric_interpretation: &PhotometricInterpretation,
    samples_per_pixel: u16,
) -> Result<()> {
    match photometric_interpretation {
        PhotometricInterpretation::Monochrome2 => {}
        PhotometricInterpretation::Monochrome1 => {
            bail!(
                "MONOCHROME1 (inverted grayscale) is not supported; \
                 only MONOCHROME2 images can be converted"
            );
        }
        other => {
            bail!("Unsupported photometric interpretation: {other}");
        }
    }

    if samples_per_pixel != 1 {
        bail!("Expected 1 sample per pixel for grayscale, got {samples_per_pixel}");
    }

    Ok(())
}

#[inline]
pub fn validate_bit_depth(bit_depth: BitDepth) -> Result<()> {
    if !matches!(bit_depth.allocated, 8 | 16) {
        bail!(
            "Unsupported bits allocated: {} (expected 8 or 16)",
            bit_depth.allocated
        );
    }

    if !bit_depth.is_valid() {
        bail!("Inconsistent bit depth: {bit_depth}");
    }

    Ok(())
}

#[inline]
pub fn validate_frame_count(number_of_frames: u32) -> Result<()> {
    if number_of_frames != 1 {
        bail!("Multi-frame images are not supported ({number_of_frames} frames)");
    }

    Ok(())
}

pub fn validate_slice(
    photometric_interpretation: &PhotometricInterpretation,
    samples_per_pixel: u16,
    bit_depth: BitDepth,
    number_of_frames: u32,
) -> Result<()> {
    validate_photometric_samples(photometric_interpretation, samples_per_pixel)?;
    validate_bit_depth(bit_depth)?;
    validate_frame_count(number_of_frames)?;
    Ok(())
}
