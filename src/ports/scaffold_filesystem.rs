//! File-system collaborator for scaffold materialization.
//!
//! The core depends only on these operations. Anything environment-specific
//! (project trees, watchers, refresh) lives behind an implementation of
//! this port, outside the crate.

use std::path::Path;

use crate::domain::AppError;

/// Port for the narrow set of file-system operations scaffolding needs.
pub trait ScaffoldFilesystem {
    /// Create a directory and all missing parent directories.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Write UTF-8 content to a file, truncating any existing file.
    fn write_file(&self, path: &Path, contents: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}
