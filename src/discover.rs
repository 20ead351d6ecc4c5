//! Screenshot discovery

use std::path::{Path, PathBuf};
use glob::{glob_with, MatchOptions, Pattern};
use tracing::{debug, warn};
use crate::error::{Error, Result};

/// File pattern matched directly inside the input directory
pub const IMAGE_PATTERN: &str = "*.png";

/// Find every `*.png` directly inside `dir`, sorted by full path
///
/// Ordering is byte-wise on the path string, so zero-padded prefixes
/// ("01-...", "02-...") control presentation order. Hidden files are not
/// matched. Returns [`Error::NoImagesFound`] when nothing matches, including
/// when `dir` does not exist.
pub fn discover_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = format!(
        "{}/{}",
        Pattern::escape(&dir.to_string_lossy()),
        IMAGE_PATTERN
    );

    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: true,
    };

    let entries = glob_with(&pattern, options)
        .map_err(|e| Error::InvalidGlob(format!("{}: {}", pattern, e)))?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => warn!("Skipping unreadable entry for {}: {}", pattern, e),
        }
    }

    if paths.is_empty() {
        return Err(Error::NoImagesFound(dir.to_path_buf()));
    }

    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    debug!("Discovered {} images in {}", paths.len(), dir.display());

    Ok(paths)
}
