use crate::domain::image::Image as DomainImage;
use crate::infrastructure::error::InfrastructureError;

// Codec seam: bytes in, RGBA pixels out, and back to lossless bytes
#[cfg_attr(test, mockall::automock)]
pub trait ImageProcessor {
    /// Guesses the container format from the bytes and promotes to RGBA8.
    fn decode(&self, image_bytes: &[u8]) -> Result<DomainImage, InfrastructureError>;

    /// Always PNG so alpha survives exactly.
    fn encode_png(&self, image: &DomainImage) -> Result<Vec<u8>, InfrastructureError>;
}
