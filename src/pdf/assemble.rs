//! Multi-page image PDF assembly using lopdf

use std::path::{Path, PathBuf};
use image::RgbImage;
use lopdf::{Dictionary, Document, Object, Stream};
use tracing::{debug, info};
use crate::config::PdfOptions;
use crate::error::{Error, Result};
use crate::layout::PageDimensions;
use crate::pdf::decode::decode_rgb;
use crate::progress::BuildObserver;

/// Resource name each page uses for its image
const IMAGE_RESOURCE: &str = "Im0";

/// Outcome of assembling one group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupReport {
    /// Where the PDF goes (or would have gone)
    pub output_path: PathBuf,
    /// Number of images the group asked for
    pub requested: usize,
    /// Pages actually written
    pub pages_written: usize,
    /// Images skipped because they failed to decode
    pub failures: Vec<PathBuf>,
    /// Whether a file was written
    pub written: bool,
}

impl GroupReport {
    fn new(output_path: &Path, requested: usize) -> Self {
        Self {
            output_path: output_path.to_path_buf(),
            requested,
            pages_written: 0,
            failures: Vec::new(),
            written: false,
        }
    }
}

/// Decode `image_paths` in order and write them as one PDF
///
/// Images that fail to decode are reported to `observer` and skipped. Nothing
/// is written, and no event fires, for an empty path list. When every image
/// fails, the start and error events fire but no file is written.
pub fn create_pdf(
    image_paths: &[PathBuf],
    output_path: &Path,
    options: &PdfOptions,
    observer: &mut dyn BuildObserver,
) -> Result<GroupReport> {
    let mut report = GroupReport::new(output_path, image_paths.len());
    if image_paths.is_empty() {
        return Ok(report);
    }

    observer.on_group_start(output_path, image_paths.len());

    let mut images = Vec::with_capacity(image_paths.len());
    for path in image_paths {
        match decode_rgb(path) {
            Ok(image) => images.push(image),
            Err(e) => {
                observer.on_decode_error(path, &e);
                report.failures.push(path.clone());
            }
        }
    }

    if images.is_empty() {
        debug!("No decodable images for {}, skipping", output_path.display());
        return Ok(report);
    }

    let pages = write_image_pdf(images, output_path, options)?;
    info!("Wrote {} pages to {}", pages, output_path.display());

    report.pages_written = pages;
    report.written = true;
    observer.on_group_saved(output_path, pages);

    Ok(report)
}

/// Write already-decoded images as a PDF, one full-bleed page per image
///
/// Returns the number of pages written.
pub fn write_image_pdf(
    images: Vec<RgbImage>,
    output_path: &Path,
    options: &PdfOptions,
) -> Result<usize> {
    if images.is_empty() {
        return Err(Error::General("No images to write".to_string()));
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let mut kids: Vec<Object> = Vec::with_capacity(images.len());

    for image in images {
        let page_id = add_image_page(&mut doc, image, pages_id, options.resolution);
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len();

    let mut pages_object = Dictionary::new();
    pages_object.set("Type", Object::Name(b"Pages".to_vec()));
    pages_object.set("Count", Object::Integer(page_count as i64));
    pages_object.set("Kids", Object::Array(kids));
    doc.objects.insert(pages_id, Object::Dictionary(pages_object));

    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));
    let catalog_id = doc.add_object(catalog);
    doc.trailer.set("Root", Object::Reference(catalog_id));

    if options.optimize {
        doc.compress();
    }
    doc.save(output_path)?;

    Ok(page_count)
}

/// Add the image XObject, content stream and page dictionary for one image
fn add_image_page(
    doc: &mut Document,
    image: RgbImage,
    pages_id: lopdf::ObjectId,
    resolution: f32,
) -> lopdf::ObjectId {
    let (pixel_width, pixel_height) = image.dimensions();
    let (width, height) = PageDimensions::for_image(pixel_width, pixel_height, resolution).points();
    debug!(
        "Page for {}x{} image: {:.2}x{:.2}pt",
        pixel_width, pixel_height, width, height
    );

    let mut image_dict = Dictionary::new();
    image_dict.set("Type", Object::Name(b"XObject".to_vec()));
    image_dict.set("Subtype", Object::Name(b"Image".to_vec()));
    image_dict.set("Width", Object::Integer(i64::from(pixel_width)));
    image_dict.set("Height", Object::Integer(i64::from(pixel_height)));
    image_dict.set("ColorSpace", Object::Name(b"DeviceRGB".to_vec()));
    image_dict.set("BitsPerComponent", Object::Integer(8));
    let image_id = doc.add_object(Stream::new(image_dict, image.into_raw()));

    // Scale the unit image square up to the full page
    let content = format!(
        "q\n{} 0 0 {} 0 0 cm\n/{} Do\nQ\n",
        width, height, IMAGE_RESOURCE
    );
    let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));

    let mut xobjects = Dictionary::new();
    xobjects.set(IMAGE_RESOURCE, Object::Reference(image_id));
    let mut resources = Dictionary::new();
    resources.set("XObject", Object::Dictionary(xobjects));

    let mut page = Dictionary::new();
    page.set("Type", Object::Name(b"Page".to_vec()));
    page.set("Parent", Object::Reference(pages_id));
    page.set(
        "MediaBox",
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(width),
            Object::Real(height),
        ]),
    );
    page.set("Resources", Object::Dictionary(resources));
    page.set("Contents", Object::Reference(content_id));

    doc.add_object(page)
}
