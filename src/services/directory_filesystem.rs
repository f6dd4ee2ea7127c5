use std::fs;
use std::io;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ScaffoldFilesystem;

/// `std::fs`-backed filesystem adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryFilesystem;

impl DirectoryFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ScaffoldFilesystem for DirectoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path).map_err(|err| {
            if err.kind() == io::ErrorKind::PermissionDenied {
                AppError::PermissionDenied(path.display().to_string())
            } else {
                AppError::DirectoryCreate {
                    path: path.display().to_string(),
                    reason: err.to_string(),
                }
            }
        })
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), AppError> {
        fs::write(path, contents).map_err(|err| {
            if err.kind() == io::ErrorKind::PermissionDenied {
                AppError::PermissionDenied(path.display().to_string())
            } else {
                AppError::FileWrite { path: path.display().to_string(), reason: err.to_string() }
            }
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}
