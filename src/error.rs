//! Error types for the portfolio PDF builder

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the portfolio PDF builder
#[derive(Error, Debug)]
pub enum Error {
    /// PDF processing error
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An image could not be opened or decoded
    #[error("Error loading {}: {}", .path.display(), .source)]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The input directory holds no matching images
    #[error("No images found in {}", .0.display())]
    NoImagesFound(PathBuf),

    /// File not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Invalid glob pattern
    #[error("Invalid glob pattern: {0}")]
    InvalidGlob(String),

    /// Invalid PDF (no pages)
    #[error("PDF has no pages: {}", .0.display())]
    EmptyPdf(PathBuf),

    /// General error
    #[error("{0}")]
    General(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_names_path_and_cause() {
        let err = Error::Decode {
            path: PathBuf::from("screenshots/01-admin-login.png"),
            source: image::ImageError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "missing",
            )),
        };

        let message = err.to_string();
        assert!(message.starts_with("Error loading screenshots/01-admin-login.png: "));
        assert!(message.contains("missing"));
    }
}
