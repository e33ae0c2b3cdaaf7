use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Image processing failed: {0}")]
    ImageProcessingError(String),

    #[error("File storage error: {0}")]
    FileStorageError(String),

    #[error("Underlying image library error")]
    ImageLibError(#[from] image::ImageError),

    #[error("Underlying I/O error")]
    IoError(#[from] std::io::Error),
}

impl From<tempfile::PersistError> for InfrastructureError {
    fn from(err: tempfile::PersistError) -> Self {
        InfrastructureError::IoError(err.error)
    }
}
