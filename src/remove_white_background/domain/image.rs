use image::{ImageFormat, RgbaImage};

// Decoded pixels, always RGBA8 regardless of what the source stored
pub struct Image {
    pub pixels: RgbaImage,
    pub source_format: Option<ImageFormat>,
}

impl Image {
    pub fn new(pixels: RgbaImage, source_format: Option<ImageFormat>) -> Self {
        Self {
            pixels,
            source_format,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }
}
