use crate::domain::file_storage_trait::FileStorage;
use super::error::InfrastructureError;
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::Path;

pub struct LocalFileStorage;

impl LocalFileStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFileStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl FileStorage for LocalFileStorage {
    // A directory counts as existing; reading it fails later as a decode error
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_image(&self, path: &Path) -> Result<Vec<u8>, InfrastructureError> {
        let data = fs::read(path).map_err(InfrastructureError::IoError)?;
        Ok(data)
    }

    fn save_image(&self, path: &Path, data: &[u8]) -> Result<(), InfrastructureError> {
        if path.file_name().is_none() {
            return Err(InfrastructureError::FileStorageError(format!(
                "output path has no file name: {}",
                path.display()
            )));
        }
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(InfrastructureError::IoError)?;

        // Remember the mode of the file being replaced so overwriting keeps it
        let existing_permissions = fs::metadata(path).ok().map(|m| m.permissions());
        if existing_permissions.is_some() {
            info!("overwriting existing {}", path.display());
        }

        // Temp file lives next to the target so the rename stays on one filesystem.
        // Dropping it on an early return deletes it.
        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // tempfile defaults to 0600; ask for 0666 and let the umask trim it like fs::write does
            builder.permissions(fs::Permissions::from_mode(0o666));
        }
        let mut tmp = builder.tempfile_in(dir).map_err(InfrastructureError::IoError)?;
        if let Some(permissions) = existing_permissions {
            tmp.as_file()
                .set_permissions(permissions)
                .map_err(InfrastructureError::IoError)?;
        }
        tmp.write_all(data).map_err(InfrastructureError::IoError)?;
        tmp.as_file().sync_all().map_err(InfrastructureError::IoError)?;
        debug!("renaming {} -> {}", tmp.path().display(), path.display());
        // PersistError hands the temp file back; converting it drops (and deletes) it
        tmp.persist(path)?;
        Ok(())
    }
}
