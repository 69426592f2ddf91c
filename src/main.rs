use clap::{CommandFactory, Parser};
use std::path::{Path, PathBuf};
use tracing::{Level, debug, error};

use dcm2png::ProcessError;
use dcm2png::cli::Args;
use dcm2png::dicom;
use dcm2png::display;
use dcm2png::image;
use dcm2png::types::WindowLevel;

fn main() {
    let args = Args::parse();

    if args.files.is_empty() {
        let _ = Args::command().print_help();
        println!();
        return;
    }

    init_logging(args.verbose);

    // Reject bad window parameters up front, before any file is touched
    let window = WindowLevel::new(args.center, args.width);
    if let Err(e) = image::validate_window(window) {
        error!("{e}");
        std::process::exit(2);
    }

    if args.output.is_some() && args.files.len() > 1 {
        error!("--out requires a single input file");
        std::process::exit(2);
    }

    let multiple_files = args.files.len() > 1;
    let mut any_failed = false;

    for (idx, file_path) in args.files.iter().enumerate() {
        if multiple_files {
            println!("{}", file_path.display());
        }

        if let Err(e) = convert_file(file_path, window, &args) {
            error!("{e}");
            any_failed = true;
        }

        if multiple_files && idx < args.files.len() - 1 {
            println!();
        }
    }

    if any_failed {
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Could not set up global logging subscriber");
    }
}

/// Convert a single DICOM file to PNG
fn convert_file(file_path: &Path, window: WindowLevel, args: &Args) -> Result<(), ProcessError> {
    // Stage 1: Open DICOM file
    let obj = dicom::open_dicom_file(file_path).map_err(ProcessError::NotADicomFile)?;

    // Stage 2: Extract attributes and pixel samples
    let slice = match dicom::extract_slice(&obj) {
        Ok(s) => s,
        Err(e) => {
            // Extraction failed - identifying metadata may still be worth showing
            if args.verbose {
                dcm2png::print_partial_metadata(&dicom::read_metadata(&obj));
            }

            return Err(ProcessError::ExtractionFailed(e));
        }
    };

    // Stage 3: Verbose output
    if args.verbose {
        dcm2png::print_metadata(&slice);
    }

    debug!("{}x{} image, {}", slice.cols(), slice.rows(), slice.bit_depth);

    // Stage 4: Window the samples into the unit interval and quantize
    let normalized = image::apply_window(&slice.samples, window)?;

    let (min, max) = normalized.value_range();
    debug!("windowed sample range: {min}..{max}");

    let quantized = image::quantize(&normalized);

    // Stage 5: Render and save
    let image = image::render_gray(quantized).map_err(ProcessError::ConversionFailed)?;

    let output = output_path(file_path, args.output.as_deref());
    image::write_png(&image, &output).map_err(ProcessError::SaveFailed)?;
    debug!("wrote {}", output.display());

    // Stage 6: Optional terminal preview
    if args.preview {
        display::print_image(&image, args.preview_width).map_err(ProcessError::PreviewFailed)?;
    }

    Ok(())
}

/// Output path: explicit --out target, or the input path with a png extension
fn output_path(input: &Path, explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(|| input.with_extension("png"), Path::to_path_buf)
}
