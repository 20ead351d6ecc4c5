//! Image decoding into the RGB rasters embedded as PDF pages

use std::path::Path;
use image::{ImageError, ImageReader, RgbImage};
use tracing::debug;
use crate::error::{Error, Result};

/// Decode an image file into 8-bit RGB
///
/// The format is sniffed from the file contents, not the extension. Alpha,
/// palette and grayscale sources are all flattened to three channels.
pub fn decode_rgb(path: &Path) -> Result<RgbImage> {
    let decode_error = |source: ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(ImageError::IoError(e)))?;

    let image = reader.decode().map_err(decode_error)?;
    debug!(
        "Decoded {} ({}x{}, {:?})",
        path.display(),
        image.width(),
        image.height(),
        image.color()
    );

    Ok(image.into_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma, Rgba, RgbaImage};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_decode_rgba_drops_alpha() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("01-admin.png");
        RgbaImage::from_pixel(4, 3, Rgba([10, 20, 30, 0]))
            .save(&path)
            .expect("Failed to write PNG");

        let image = decode_rgb(&path).expect("Decode failed");
        assert_eq!(image.dimensions(), (4, 3));
        assert_eq!(image.get_pixel(0, 0).0, [10, 20, 30]);
        assert_eq!(image.as_raw().len(), 4 * 3 * 3);
    }

    #[test]
    fn test_decode_grayscale_expands_channels() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("gray.png");
        GrayImage::from_pixel(2, 2, Luma([128]))
            .save(&path)
            .expect("Failed to write PNG");

        let image = decode_rgb(&path).expect("Decode failed");
        assert_eq!(image.get_pixel(1, 1).0, [128, 128, 128]);
    }

    #[test]
    fn test_decode_corrupt_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").expect("Failed to write file");

        let result = decode_rgb(&path);
        match result {
            Err(Error::Decode { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("Expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_missing_file() {
        let result = decode_rgb(Path::new("nonexistent.png"));
        assert!(matches!(
            result,
            Err(Error::Decode { source: ImageError::IoError(_), .. })
        ));
    }
}
