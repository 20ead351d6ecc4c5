//! Reading back generated PDFs

use std::path::Path;
use lopdf::{Document, Object};
use crate::error::{Error, Result};

/// Count pages by reading the Count field from the Pages dictionary
fn count_pages_from_catalog(doc: &Document) -> Result<usize> {
    let catalog = doc.catalog()?;

    let pages_id = match catalog.get(b"Pages") {
        Ok(Object::Reference(id)) => *id,
        _ => return Err(Error::General("Pages is not a reference".to_string())),
    };

    let pages_dict = doc.get_dictionary(pages_id)?;

    match pages_dict.get(b"Count") {
        Ok(Object::Integer(n)) => Ok(*n as usize),
        _ => Err(Error::General("Count is not an integer".to_string())),
    }
}

/// Count the number of pages in a PDF file
pub fn count_pages(path: &Path) -> Result<usize> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    let page_count = count_pages_from_catalog(&doc)?;

    if page_count == 0 {
        return Err(Error::EmptyPdf(path.to_path_buf()));
    }

    Ok(page_count)
}

/// Pixel size of the image drawn on each page, in page order
///
/// Every page written by this crate references exactly one image XObject;
/// pages without one are reported as an error.
pub fn page_image_sizes(path: &Path) -> Result<Vec<(u32, u32)>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let doc = Document::load(path)?;
    let mut sizes = Vec::new();

    for (page_num, page_id) in doc.get_pages() {
        let page = doc.get_dictionary(page_id)?;
        let xobjects = page.get(b"Resources")?.as_dict()?.get(b"XObject")?.as_dict()?;

        let image_id = xobjects
            .iter()
            .find_map(|(_, value)| value.as_reference().ok())
            .ok_or_else(|| Error::General(format!("Page {} has no image", page_num)))?;

        let image = doc.get_object(image_id)?.as_stream()?;
        let width = image.dict.get(b"Width")?.as_i64()?;
        let height = image.dict.get(b"Height")?.as_i64()?;
        sizes.push((width as u32, height as u32));
    }

    Ok(sizes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_pages_nonexistent_file() {
        let result = count_pages(Path::new("nonexistent.pdf"));
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), Error::FileNotFound(_)));
    }

    #[test]
    fn test_page_image_sizes_nonexistent_file() {
        let result = page_image_sizes(Path::new("nonexistent.pdf"));
        assert!(matches!(result, Err(Error::FileNotFound(_))));
    }

    // Tests against generated PDFs live in assemble.rs and tests/
}
