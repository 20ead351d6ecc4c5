//! Progress events emitted while building the portfolio
//!
//! The library never prints. Callers that want the familiar console lines
//! implement [`BuildObserver`] and pass it to the build.

use std::path::Path;
use crate::error::Error;

/// Receives events as each group is assembled
///
/// All methods default to no-ops.
pub trait BuildObserver {
    /// A non-empty group is about to be decoded
    fn on_group_start(&mut self, output: &Path, image_count: usize) {
        let _ = (output, image_count);
    }

    /// One image was skipped because it could not be decoded
    fn on_decode_error(&mut self, path: &Path, error: &Error) {
        let _ = (path, error);
    }

    /// The group's PDF was written
    fn on_group_saved(&mut self, output: &Path, pages: usize) {
        let _ = (output, pages);
    }
}

/// Observer that ignores every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl BuildObserver for NoopObserver {}
