//! Page geometry for image pages

/// Simple length type in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Length(pub f64);

impl Length {
    /// Create a length from millimeters
    pub fn from_mm(mm: f64) -> Self {
        Length(mm)
    }

    /// Create a length from inches
    pub fn from_inches(inches: f64) -> Self {
        Length(inches * 25.4)
    }

    /// Create a length from a pixel count at the given resolution (dots per inch)
    pub fn from_pixels(pixels: u32, dpi: f32) -> Self {
        Self::from_inches(f64::from(pixels) / f64::from(dpi))
    }

    /// Get the value in millimeters
    pub fn mm(&self) -> f64 {
        self.0
    }

    /// Get the value in points (1/72 inch)
    pub fn pt(&self) -> f64 {
        self.0 * 72.0 / 25.4
    }
}

/// Page dimensions
#[derive(Debug, Clone, Copy)]
pub struct PageDimensions {
    pub width: Length,
    pub height: Length,
}

impl PageDimensions {
    /// A page exactly covering an image of `width` × `height` pixels
    ///
    /// At 100 DPI a pixel is 0.72pt.
    pub fn for_image(width: u32, height: u32, dpi: f32) -> Self {
        Self {
            width: Length::from_pixels(width, dpi),
            height: Length::from_pixels(height, dpi),
        }
    }

    /// MediaBox extent in points, as written into the PDF
    pub fn points(&self) -> (f32, f32) {
        (self.width.pt() as f32, self.height.pt() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_conversions() {
        let len = Length::from_inches(1.0);
        assert!((len.mm() - 25.4).abs() < 0.01);
        assert!((len.pt() - 72.0).abs() < 0.01);
    }

    #[test]
    fn test_pixels_at_100_dpi() {
        let len = Length::from_pixels(100, 100.0);
        assert!((len.pt() - 72.0).abs() < 0.001);
    }

    #[test]
    fn test_page_for_screenshot() {
        let page = PageDimensions::for_image(1920, 1080, 100.0);
        let (width, height) = page.points();
        assert!((width - 1382.4).abs() < 0.01);
        assert!((height - 777.6).abs() < 0.01);
    }

    #[test]
    fn test_higher_resolution_shrinks_page() {
        let low = PageDimensions::for_image(300, 300, 100.0).points();
        let high = PageDimensions::for_image(300, 300, 300.0).points();
        assert!((high.0 - 72.0).abs() < 0.01);
        assert!(high.0 < low.0);
    }
}
