pub mod background;
pub mod error;
pub mod file_storage_trait;
pub mod image;
pub mod image_processor_trait;
pub mod report;
pub mod threshold;
