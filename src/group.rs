//! Grouping screenshots into output PDFs by filename substring

use std::path::{Path, PathBuf};

/// Predicate deciding which discovered images belong to a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupFilter {
    /// Every discovered image
    All,
    /// Images whose full path contains the substring (case-sensitive)
    PathContains(&'static str),
}

impl GroupFilter {
    /// Test one path against the filter
    ///
    /// The match runs over the whole path, directory prefix included.
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::PathContains(needle) => path.to_string_lossy().contains(needle),
        }
    }
}

/// One PDF the build produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputTarget {
    /// File name inside the output directory
    pub file_name: &'static str,
    /// Which images go into it
    pub filter: GroupFilter,
}

/// The PDFs a portfolio build writes, in build order
///
/// `key-features.pdf` currently carries the same images as the showcase.
pub const PORTFOLIO_TARGETS: [OutputTarget; 4] = [
    OutputTarget {
        file_name: "complete-showcase.pdf",
        filter: GroupFilter::All,
    },
    OutputTarget {
        file_name: "key-features.pdf",
        filter: GroupFilter::All,
    },
    OutputTarget {
        file_name: "admin-features.pdf",
        filter: GroupFilter::PathContains("admin"),
    },
    OutputTarget {
        file_name: "student-features.pdf",
        filter: GroupFilter::PathContains("student"),
    },
];

/// A named, ordered selection of images destined for one PDF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGroup {
    /// Output file name
    pub name: String,
    /// Images in page order
    pub paths: Vec<PathBuf>,
}

/// Keep the paths accepted by `filter`, preserving their order
pub fn filter_paths(paths: &[PathBuf], filter: GroupFilter) -> Vec<PathBuf> {
    paths
        .iter()
        .filter(|path| filter.matches(path))
        .cloned()
        .collect()
}

/// Build one group per target from the discovered images
///
/// Membership is evaluated independently per target, so an image may land in
/// several groups.
pub fn build_groups(paths: &[PathBuf], targets: &[OutputTarget]) -> Vec<ImageGroup> {
    targets
        .iter()
        .map(|target| ImageGroup {
            name: target.file_name.to_string(),
            paths: filter_paths(paths, target.filter),
        })
        .collect()
}
