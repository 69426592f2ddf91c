//! Per-file processing errors

use thiserror::Error;

use crate::image::WindowError;

/// Error raised while converting a single file
///
/// Variants are ordered by processing stage so callers can tell how far a
/// file got before failing.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// File could not be opened as DICOM - no metadata available
    #[error("{0:#}")]
    NotADicomFile(anyhow::Error),

    /// Valid DICOM file but attribute or pixel extraction failed
    #[error("{0:#}")]
    ExtractionFailed(anyhow::Error),

    /// Window parameters cannot produce a valid mapping
    #[error(transparent)]
    InvalidWindow(#[from] WindowError),

    /// Samples extracted, but the grayscale conversion failed
    #[error("{0:#}")]
    ConversionFailed(anyhow::Error),

    /// Image converted, but writing the PNG failed
    #[error("{0:#}")]
    SaveFailed(anyhow::Error),

    /// Output written, but the terminal preview failed
    #[error("{0:#}")]
    PreviewFailed(anyhow::Error),
}
