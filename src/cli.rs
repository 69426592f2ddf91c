use clap::Parser;
use std::path::PathBuf;

/// Convert single-frame grayscale DICOM files to 8-bit PNG
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// DICOM file path(s) to convert
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Window center (level) in stored sample values
    #[arg(short, long, default_value_t = 2472.0, allow_negative_numbers = true)]
    pub center: f64,

    /// Window width in stored sample values
    #[arg(short, long, default_value_t = 4144.0, allow_negative_numbers = true)]
    pub width: f64,

    /// Output PNG path (single input only; defaults to the input path with a png extension)
    #[arg(short, long = "out", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Preview the converted image in the terminal
    #[arg(short, long)]
    pub preview: bool,

    /// Preview width in terminal columns
    #[arg(short = 'W', long)]
    pub preview_width: Option<u32>,

    /// Show DICOM metadata
    #[arg(short, long)]
    pub verbose: bool,
}
