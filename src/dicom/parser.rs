use crate::types::{BitDepth, Dimensions, SOPClass, TransferSyntax};
use anyhow::{Context, Result};
use dicom::core::dictionary::UidDictionary;
use dicom::dictionary_std::sop_class;
use dicom::dictionary_std::tags;
use dicom::encoding::TransferSyntaxIndex;
use dicom::object::{FileDicomObject, InMemDicomObject, StandardDataDictionary};
use dicom::transfer_syntax::TransferSyntaxRegistry;

use super::photometric::PhotometricInterpretation;
use super::pixel_data::PixelRepresentation;
use super::slice::SliceMetadata;

/// Partial metadata for error message context
#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub modality: Option<String>,
    pub sop_class: Option<SOPClass>,
}

impl ErrorContext {
    #[must_use]
    pub fn new() -> Self {
        Self {
            modality: None,
            sop_class: None,
        }
    }

    pub fn format_error(&self, tag_name: &str) -> String {
        let mut parts = Vec::new();

        if let Some(modality) = &self.modality {
            parts.push(format!("Modality: {modality}"));
        }

        if let Some(sc) = &self.sop_class {
            parts.push(format!("SOP Class: {sc}")); // Uses Display: "Name (UID)"
        }

        if parts.is_empty() {
            // Generic error when no context available
            format!("Missing or invalid {tag_name} tag")
        } else {
            format!(
                "Missing or invalid {tag_name} tag - this may be a non-image DICOM file ({})",
                parts.join(", ")
            )
        }
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&SliceMetadata> for ErrorContext {
    fn from(metadata: &SliceMetadata) -> Self {
        ErrorContext {
            modality: metadata.modality.clone(),
            sop_class: metadata.sop_class.clone(),
        }
    }
}

pub fn extract_dimensions(
    obj: &InMemDicomObject<StandardDataDictionary>,
    error_context: &ErrorContext,
) -> Result<Dimensions> {
    let rows = obj
        .get(tags::ROWS)
        .and_then(|e| e.to_int::<u16>().ok())
        .with_context(|| error_context.format_error("Rows"))?;

    let cols = obj
        .get(tags::COLUMNS)
        .and_then(|e| e.to_int::<u16>().ok())
        .with_context(|| error_context.format_error("Columns"))?;

    Ok(Dimensions::new(rows, cols))
}

pub fn extract_bit_depth(
    obj: &InMemDicomObject<StandardDataDictionary>,
    error_context: &ErrorContext,
) -> Result<BitDepth> {
    let allocated = obj
        .get(tags::BITS_ALLOCATED)
        .and_then(|e| e.to_int::<u16>().ok())
        .ok_or_else(|| anyhow::anyhow!(error_context.format_error("Bits Allocated")))?;

    let stored = obj
        .get(tags::BITS_STORED)
        .and_then(|e| e.to_int::<u16>().ok())
        .ok_or_else(|| anyhow::anyhow!(error_context.format_error("Bits Stored")))?;

    Ok(BitDepth::new(allocated, stored))
}

#[inline]
pub fn extract_samples_per_pixel(obj: &InMemDicomObject<StandardDataDictionary>) -> u16 {
    obj.get(tags::SAMPLES_PER_PIXEL)
        .and_then(|e| e.to_int::<u16>().ok())
        .unwrap_or(1)
}

#[inline]
pub fn extract_number_of_frames(obj: &InMemDicomObject<StandardDataDictionary>) -> u32 {
    obj.get(tags::NUMBER_OF_FRAMES)
        .and_then(|e| e.to_int::<u32>().ok())
        .unwrap_or(1)
}

#[inline]
pub fn extract_pixel_representation(
    obj: &InMemDicomObject<StandardDataDictionary>,
) -> PixelRepresentation {
    match obj
        .get(tags::PIXEL_REPRESENTATION)
        .and_then(|e| e.to_int::<u16>().ok())
    {
        Some(1) => PixelRepresentation::Signed,
        _ => PixelRepresentation::Unsigned,
    }
}

pub fn extract_photometric_interpretation(
    obj: &InMemDicomObject<StandardDataDictionary>,
) -> PhotometricInterpretation {
    obj.get(tags::PHOTOMETRIC_INTERPRETATION)
        .and_then(|e| e.value().to_str().ok())
        .map_or(PhotometricInterpretation::Monochrome2, |s| {
            PhotometricInterpretation::from(s.as_ref())
        })
}

pub fn extract_modality(obj: &InMemDicomObject<StandardDataDictionary>) -> Option<String> {
    obj.get(tags::MODALITY)
        .and_then(|e| e.value().to_str().ok())
        .map(|s| s.to_string())
}

pub fn extract_sop_class(obj: &InMemDicomObject<StandardDataDictionary>) -> Option<SOPClass> {
    obj.get(tags::SOP_CLASS_UID)
        .and_then(|e| e.value().to_str().ok())
        .and_then(|uid| {
            sop_class::StandardSopClassDictionary
                .by_uid(&uid)
                .map(|entry| SOPClass::new(uid.to_string(), entry.name.to_string()))
        })
}

pub fn extract_transfer_syntax(
    obj: &FileDicomObject<InMemDicomObject<StandardDataDictionary>>,
) -> TransferSyntax {
    let uid = obj.meta().transfer_syntax().to_string();
    let name = TransferSyntaxRegistry
        .get(&uid)
        .map_or_else(|| "Unknown".to_string(), |ts| ts.name().to_string());

    TransferSyntax::new(uid, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicom::core::{DataElement, PrimitiveValue, VR};

    fn grayscale_ct_object() -> InMemDicomObject<StandardDataDictionary> {
        InMemDicomObject::from_element_iter(vec![
            DataElement::new(tags::ROWS, VR::US, PrimitiveValue::from(2_u16)),
            DataElement::new(tags::COLUMNS, VR::US, PrimitiveValue::from(3_u16)),
            DataElement::new(tags::BITS_ALLOCATED, VR::US, PrimitiveValue::from(16_u16)),
            DataElement::new(tags::BITS_STORED, VR::US, PrimitiveValue::from(12_u16)),
            DataElement::new(tags::SAMPLES_PER_PIXEL, VR::US, PrimitiveValue::from(1_u16)),
            DataElement::new(
                tags::PIXEL_REPRESENTATION,
                VR::US,
                PrimitiveValue::from(1_u16),
            ),
            DataElement::new(tags::NUMBER_OF_FRAMES, VR::IS, PrimitiveValue::from("2")),
            DataElement::new(tags::MODALITY, VR::CS, PrimitiveValue::from("CT")),
            DataElement::new(
                tags::PHOTOMETRIC_INTERPRETATION,
                VR::CS,
                PrimitiveValue::from("MONOCHROME2"),
            ),
            DataElement::new(
                tags::SOP_CLASS_UID,
                VR::UI,
                PrimitiveValue::from("1.2.840.10008.5.1.4.1.1.2"),
            ),
        ])
    }

    #[test]
    fn test_extracts_image_attributes() {
        let obj = grayscale_ct_object();
        let context = ErrorContext::new();

        let dims = extract_dimensions(&obj, &context).unwrap();
        assert_eq!(dims, Dimensions::new(2, 3));

        let bit_depth = extract_bit_depth(&obj, &context).unwrap();
        assert_eq!(bit_depth, BitDepth::new(16, 12));

        assert_eq!(extract_samples_per_pixel(&obj), 1);
        assert_eq!(extract_number_of_frames(&obj), 2);
        assert_eq!(
            extract_pixel_representation(&obj),
            PixelRepresentation::Signed
        );
        assert_eq!(
            extract_photometric_interpretation(&obj),
            PhotometricInterpretation::Monochrome2
        );
        assert_eq!(extract_modality(&obj).as_deref(), Some("CT"));
    }

    #[test]
    fn test_sop_class_lookup_resolves_the_name() {
        let obj = grayscale_ct_object();
        let sop_class = extract_sop_class(&obj).unwrap();
        assert_eq!(sop_class.uid, "1.2.840.10008.5.1.4.1.1.2");
        assert_eq!(sop_class.name, "CT Image Storage");
    }

    #[test]
    fn test_missing_attributes_fall_back_to_defaults() {
        let obj = InMemDicomObject::<StandardDataDictionary>::from_element_iter(vec![]);

        assert_eq!(extract_samples_per_pixel(&obj), 1);
        assert_eq!(extract_number_of_frames(&obj), 1);
        assert_eq!(
            extract_pixel_representation(&obj),
            PixelRepresentation::Unsigned
        );
        assert_eq!(
            extract_photometric_interpretation(&obj),
            PhotometricInterpretation::Monochrome2
        );
        assert!(extract_modality(&obj).is_none());
        assert!(extract_sop_class(&obj).is_none());
    }

    #[test]
    fn test_missing_rows_error_includes_the_context() {
        let obj = InMemDicomObject::<StandardDataDictionary>::from_element_iter(vec![]);
        let context = ErrorContext {
            modality: Some("SR".to_string()),
            sop_class: None,
        };

        let err = extract_dimensions(&obj, &context).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("Missing or invalid Rows tag"));
        assert!(message.contains("Modality: SR"));
        assert!(message.contains("non-image DICOM file"));
    }

    #[test]
    fn test_error_without_context_stays_generic() {
        let context = ErrorContext::new();
        let message = context.format_error("Columns");
        assert_eq!(message, "Missing or invalid Columns tag");
    }
}
