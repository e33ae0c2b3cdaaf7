use crate::domain::image::Image as DomainImage;
use crate::domain::image_processor_trait::ImageProcessor;
use super::error::InfrastructureError;
use image::{GenericImageView, ImageFormat as InnerImageFormat};
use log::debug;
use std::io::Cursor;

pub struct DefaultImageProcessor;

impl DefaultImageProcessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DefaultImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageProcessor for DefaultImageProcessor {
    fn decode(&self, image_bytes: &[u8]) -> Result<DomainImage, InfrastructureError> {
        // The extension may lie (logo.PNG that is really a JPEG), so sniff the bytes
        let reader = image::io::Reader::new(Cursor::new(image_bytes))
            .with_guessed_format()
            .map_err(InfrastructureError::IoError)?;
        let source_format = reader.format();
        let decoded = reader.decode().map_err(InfrastructureError::ImageLibError)?;
        let (width, height) = decoded.dimensions();
        debug!(
            "decoded {:?} image, color type {:?}, {}x{}",
            source_format,
            decoded.color(),
            width,
            height
        );

        // RGB, grayscale, palette, 16-bit... all become RGBA8 with A=255 where missing
        Ok(DomainImage::new(decoded.to_rgba8(), source_format))
    }

    fn encode_png(&self, image: &DomainImage) -> Result<Vec<u8>, InfrastructureError> {
        // PNG has no zero-width or zero-height images
        if image.width() == 0 || image.height() == 0 {
            return Err(InfrastructureError::ImageProcessingError(format!(
                "cannot encode a {}x{} image as PNG",
                image.width(),
                image.height()
            )));
        }
        // Encode into memory first; storage decides how the bytes reach disk
        let mut buffer = Cursor::new(Vec::new());
        image
            .pixels
            .write_to(&mut buffer, InnerImageFormat::Png)
            .map_err(InfrastructureError::ImageLibError)?;
        Ok(buffer.into_inner())
    }
}
