//! Image decoding and PDF assembly

pub mod assemble;
pub mod decode;
pub mod metadata;

// Re-export commonly used items
pub use assemble::{create_pdf, write_image_pdf, GroupReport};
pub use decode::decode_rgb;
pub use metadata::{count_pages, page_image_sizes};
