//! Run configuration
//!
//! The tool itself takes no options; this struct exists so the library can be
//! pointed at other directories (tests use temporary ones).

use std::path::PathBuf;

/// Directory scanned for screenshots, relative to the working directory
pub const DEFAULT_INPUT_DIR: &str = "screenshots";

/// Directory the PDFs are written into, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "pdfs";

/// Resolution recorded for every page, in dots per inch
pub const DEFAULT_RESOLUTION: f32 = 100.0;

/// Options controlling how a PDF is encoded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfOptions {
    /// Pixels per inch used to size each page
    pub resolution: f32,
    /// Flate-compress page content and image streams
    pub optimize: bool,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            optimize: true,
        }
    }
}

/// Everything a portfolio build needs to know
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    /// Directory holding the `*.png` screenshots
    pub input_dir: PathBuf,
    /// Directory receiving the generated PDFs (created if missing)
    pub output_dir: PathBuf,
    /// PDF encoding options
    pub pdf: PdfOptions,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            pdf: PdfOptions::default(),
        }
    }
}
