use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::ScaffoldFilesystem;

/// In-memory filesystem for materializer tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<Mutex<BTreeMap<PathBuf, String>>>,
    directories: Arc<Mutex<BTreeSet<PathBuf>>>,
    failing_writes: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, making the path exist as a non-directory.
    pub fn add_file(&self, path: &Path, contents: &str) {
        self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
    }

    /// Make the next write to `path` fail.
    pub fn fail_write(&self, path: &Path) {
        self.failing_writes.lock().unwrap().insert(path.to_path_buf());
    }

    pub fn file(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn file_count(&self) -> usize {
        self.files.lock().unwrap().len()
    }

    pub fn directory_count(&self) -> usize {
        self.directories.lock().unwrap().len()
    }
}

impl ScaffoldFilesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        if self.files.lock().unwrap().contains_key(path) {
            return Err(AppError::DirectoryCreate {
                path: path.display().to_string(),
                reason: "path exists and is not a directory".to_string(),
            });
        }
        let mut directories = self.directories.lock().unwrap();
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<(), AppError> {
        if self.failing_writes.lock().unwrap().contains(path) {
            return Err(AppError::FileWrite {
                path: path.display().to_string(),
                reason: "injected write failure".to_string(),
            });
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
            || self.directories.lock().unwrap().contains(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.directories.lock().unwrap().contains(path)
    }
}
