//! Portfolio PDF Builder Library
//!
//! Turns a folder of screenshots into a set of portfolio PDFs.
//! This library provides functionality to:
//! - Discover `*.png` screenshots in a directory, ordered by file name
//! - Group them by filename substring ("admin", "student")
//! - Decode each image to RGB and write one PDF page per image
//!
//! # Example
//!
//! ```no_run
//! use portfolio_pdfs::{build_portfolio, NoopObserver, PortfolioConfig};
//!
//! let report = build_portfolio(&PortfolioConfig::default(), &mut NoopObserver)
//!     .expect("Failed to build portfolio");
//!
//! for path in report.written() {
//!     println!("{}", path.display());
//! }
//! ```

pub mod build;
pub mod config;
pub mod discover;
pub mod error;
pub mod group;
pub mod layout;
pub mod pdf;
pub mod progress;

// Re-export commonly used items
pub use build::{build_portfolio, BuildReport};
pub use config::{PdfOptions, PortfolioConfig};
pub use error::{Error, Result};
pub use progress::{BuildObserver, NoopObserver};
