use crate::infrastructure::error::InfrastructureError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Input file not found: {}", .0.display())]
    NotFound(PathBuf),

    // Unreadable, corrupt or unsupported input
    #[error("Failed to decode input image {}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: InfrastructureError,
    },

    // Encoding, directory creation or the final rename failed
    #[error("Failed to write output image {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: InfrastructureError,
    },
}
