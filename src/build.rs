//! End-to-end portfolio build: discover, group, assemble

use std::fs;
use std::path::PathBuf;
use tracing::debug;
use crate::config::PortfolioConfig;
use crate::discover::discover_images;
use crate::error::Result;
use crate::group::{build_groups, PORTFOLIO_TARGETS};
use crate::pdf::{create_pdf, GroupReport};
use crate::progress::BuildObserver;

/// Summary of one portfolio build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Images found in the input directory
    pub discovered: usize,
    /// One entry per output target, in build order
    pub groups: Vec<GroupReport>,
}

impl BuildReport {
    /// Paths of the PDFs actually written
    pub fn written(&self) -> Vec<PathBuf> {
        self.groups
            .iter()
            .filter(|group| group.written)
            .map(|group| group.output_path.clone())
            .collect()
    }
}

/// Build every portfolio PDF from the screenshots in `config.input_dir`
///
/// The output directory is created first, so it exists even when discovery
/// finds nothing and [`crate::Error::NoImagesFound`] is returned. Groups are
/// assembled one after another; decode failures are reported to `observer`
/// and never abort the build.
pub fn build_portfolio(
    config: &PortfolioConfig,
    observer: &mut dyn BuildObserver,
) -> Result<BuildReport> {
    fs::create_dir_all(&config.output_dir)?;

    let images = discover_images(&config.input_dir)?;
    let groups = build_groups(&images, &PORTFOLIO_TARGETS);

    let mut reports = Vec::with_capacity(groups.len());
    for group in groups {
        let output_path = config.output_dir.join(&group.name);
        debug!("Group {} has {} images", group.name, group.paths.len());
        reports.push(create_pdf(&group.paths, &output_path, &config.pdf, observer)?);
    }

    Ok(BuildReport {
        discovered: images.len(),
        groups: reports,
    })
}
