//! Current-source tracking: file-loaded vs hand-drawn.

use std::path::PathBuf;

use image::{DynamicImage, GrayImage};

use crate::error::AsciiError;

/// Whichever raster is the active basis for rendering.
///
/// Exactly one variant is active at a time: selecting a file source
/// replaces a previous drawing wholesale and vice versa. File sources
/// keep only the path and are re-decoded on every render; drawn sources
/// keep the captured grayscale raster.
#[derive(Debug, Clone, Default)]
pub enum Source {
    /// No source selected yet.
    #[default]
    None,
    /// A file-backed raster, decoded on demand.
    File(PathBuf),
    /// A raster captured from the drawing canvas.
    Drawn(GrayImage),
}

impl Source {
    /// Replace the current source with a file path.
    pub fn set_file(&mut self, path: PathBuf) {
        *self = Source::File(path);
    }

    /// Replace the current source with a drawn raster.
    pub fn set_drawn(&mut self, raster: GrayImage) {
        *self = Source::Drawn(raster);
    }

    /// Whether any source is selected.
    pub fn is_none(&self) -> bool {
        matches!(self, Source::None)
    }

    /// Obtain the source raster.
    ///
    /// # Errors
    /// [`AsciiError::NoSource`] when nothing is selected, or
    /// [`AsciiError::Unreadable`] when the file cannot be decoded.
    pub fn load(&self) -> Result<DynamicImage, AsciiError> {
        match self {
            Source::None => Err(AsciiError::NoSource),
            Source::File(path) => image::open(path).map_err(|source| AsciiError::Unreadable {
                path: path.clone(),
                source,
            }),
            Source::Drawn(raster) => Ok(DynamicImage::ImageLuma8(raster.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        let source = Source::default();
        assert!(source.is_none());
        assert!(matches!(source.load(), Err(AsciiError::NoSource)));
    }

    #[test]
    fn test_drawn_replaces_file() {
        let mut source = Source::File(PathBuf::from("/tmp/photo.png"));
        source.set_drawn(GrayImage::from_pixel(2, 2, image::Luma([0])));
        assert!(matches!(source, Source::Drawn(_)));
    }

    #[test]
    fn test_file_replaces_drawn() {
        let mut source = Source::Drawn(GrayImage::from_pixel(2, 2, image::Luma([0])));
        source.set_file(PathBuf::from("/tmp/photo.png"));
        assert!(matches!(source, Source::File(_)));
    }

    #[test]
    fn test_drawn_loads_as_luma() {
        let source = Source::Drawn(GrayImage::from_pixel(3, 1, image::Luma([200])));
        let raster = source.load().unwrap();
        assert_eq!(raster.to_luma8().get_pixel(0, 0).0[0], 200);
    }
}
