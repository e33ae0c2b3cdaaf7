use crate::domain::threshold::Threshold;
use image::{Rgba, RgbaImage};

/// What every background pixel is rewritten to.
pub const TRANSPARENT_WHITE: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Alpha is ignored; only the colour channels decide.
pub fn is_background(pixel: &Rgba<u8>, threshold: Threshold) -> bool {
    let t = threshold.value();
    let [r, g, b, _] = pixel.0;
    r > t && g > t && b > t
}

/// Rewrites background pixels to [`TRANSPARENT_WHITE`] in place and returns
/// how many were rewritten. Each pixel is judged on its own values only.
pub fn make_background_transparent(img: &mut RgbaImage, threshold: Threshold) -> u64 {
    let mut converted = 0;
    for pixel in img.pixels_mut() {
        if is_background(pixel, threshold) {
            *pixel = TRANSPARENT_WHITE;
            converted += 1;
        }
    }
    converted
}
