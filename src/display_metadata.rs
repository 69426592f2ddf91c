use crate::dicom::{DicomSlice, SliceMetadata};

pub fn print_metadata(slice: &DicomSlice) {
    print_identity(&slice.metadata);

    print_dimensions(slice);

    println!("{:20}: {}", "Bit Depth", slice.bit_depth);
    println!("{:20}: {}", "Pixel Representation", slice.pixel_representation);

    let (min, max) = slice.samples.value_range();
    println!("{:20}: {min}..{max}", "Sample Range");

    println!();
}

/// Identity fields only, for files that fail before pixel extraction
pub fn print_partial_metadata(metadata: &SliceMetadata) {
    print_identity(metadata);
    println!();
}

fn print_identity(metadata: &SliceMetadata) {
    print_field("Modality", metadata.modality.as_ref());

    if let Some(sop_class) = &metadata.sop_class {
        println!("{:20}: {}", "SOP Class UID", sop_class);
    }

    println!("{:20}: {}", "Transfer Syntax", metadata.transfer_syntax);
}

fn print_field(name: &str, value: Option<&String>) {
    if let Some(v) = value {
        println!("{name:20}: {v}");
    }
}

fn print_dimensions(slice: &DicomSlice) {
    println!(
        "{:20}: {} [{} sample/px, {}]",
        "Dimensions",
        slice.samples.dimensions(),
        slice.samples_per_pixel,
        slice.photometric_interpretation
    );
}
