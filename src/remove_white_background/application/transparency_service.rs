use std::path::Path;
use std::sync::Arc;

use image::ImageFormat;
use log::{debug, info, warn};

use super::error::ApplicationError;
use crate::domain::background::make_background_transparent;
use crate::domain::file_storage_trait::FileStorage;
use crate::domain::image_processor_trait::ImageProcessor;
use crate::domain::report::ConversionReport;
use crate::domain::threshold::Threshold;
use crate::infrastructure::error::InfrastructureError;

pub struct BackgroundRemovalService {
    image_processor: Arc<dyn ImageProcessor + Send + Sync>,
    file_storage: Arc<dyn FileStorage + Send + Sync>,
}

impl BackgroundRemovalService {
    pub fn new(
        image_processor: Arc<dyn ImageProcessor + Send + Sync>,
        file_storage: Arc<dyn FileStorage + Send + Sync>,
    ) -> Self {
        Self {
            image_processor,
            file_storage,
        }
    }

    /// Decode `input`, make every near-white pixel transparent and write the
    /// result to `output` as PNG. `input` is never modified.
    pub fn convert(
        &self,
        input: &Path,
        output: &Path,
        threshold: Threshold,
    ) -> Result<ConversionReport, ApplicationError> {
        info!(
            "converting {} -> {} (threshold {})",
            input.display(),
            output.display(),
            threshold.value()
        );

        // Checked up front so a missing input never reaches the processor or the output dir
        if !self.file_storage.exists(input) {
            return Err(ApplicationError::NotFound(input.to_path_buf()));
        }

        let decode_error = |source: InfrastructureError| ApplicationError::Decode {
            path: input.to_path_buf(),
            source,
        };
        // Read failures count as decode failures: the input exists but is unusable
        let bytes = self.file_storage.read_image(input).map_err(decode_error)?;
        let mut image = self.image_processor.decode(&bytes).map_err(decode_error)?;
        if let Some(by_extension) = mismatched_extension(input, image.source_format) {
            warn!(
                "{} looks like {:?} by extension but contains {:?} data",
                input.display(),
                by_extension,
                image.source_format
            );
        }

        let transparent_pixels = make_background_transparent(&mut image.pixels, threshold);
        debug!(
            "{} of {} pixels classified as background ({:?} source)",
            transparent_pixels,
            u64::from(image.width()) * u64::from(image.height()),
            image.source_format
        );

        // From here on nothing is on disk yet, so every failure is a write failure
        let write_error = |source: InfrastructureError| ApplicationError::Write {
            path: output.to_path_buf(),
            source,
        };
        let encoded = self.image_processor.encode_png(&image).map_err(write_error)?;
        self.file_storage.save_image(output, &encoded).map_err(write_error)?;

        Ok(ConversionReport {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            width: image.width(),
            height: image.height(),
            threshold,
            transparent_pixels,
        })
    }
}

/// The format the file name claims, when it disagrees with what was decoded.
fn mismatched_extension(input: &Path, detected: Option<ImageFormat>) -> Option<ImageFormat> {
    let by_extension = ImageFormat::from_path(input).ok()?;
    match detected {
        Some(format) if format != by_extension => Some(by_extension),
        _ => None,
    }
}
