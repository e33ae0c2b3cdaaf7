use crate::infrastructure::error::InfrastructureError;
use std::path::Path;

#[cfg_attr(test, mockall::automock)]
pub trait FileStorage {
    fn exists(&self, path: &Path) -> bool;

    fn read_image(&self, path: &Path) -> Result<Vec<u8>, InfrastructureError>;

    /// Creates missing parent directories and replaces `path` atomically;
    /// a failed save never leaves a partial file behind.
    fn save_image(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError>;
}
