use std::io;

use thiserror::Error;

/// Library-wide error type for recomp operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration issue.
    #[error("{0}")]
    Configuration(String),

    /// Component name is not a valid file-system segment.
    #[error(
        "Invalid component name '{0}': must be non-empty, alphanumeric with hyphens or underscores"
    )]
    InvalidName(String),

    /// Kind value did not match a known scaffold kind.
    #[error("Invalid kind '{0}': must be one of basic, with-style, with-style-and-story")]
    InvalidKind(String),

    /// Referenced template is not registered.
    #[error("Template '{0}' is not registered")]
    TemplateNotFound(String),

    /// Template body failed to render.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Two templates were registered under the same name.
    #[error("Template '{0}' is already registered")]
    DuplicateTemplate(String),

    /// Component directory could not be created.
    #[error("Failed to create directory '{path}': {reason}")]
    DirectoryCreate { path: String, reason: String },

    /// Access to the target path was denied.
    #[error("Permission denied for '{0}'")]
    PermissionDenied(String),

    /// A planned file could not be written.
    #[error("Failed to write '{path}': {reason}")]
    FileWrite { path: String, reason: String },

    /// Scaffold finished with per-file failures.
    #[error("{failed} of {planned} files could not be created")]
    ScaffoldIncomplete { failed: usize, planned: usize },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON encoding error.
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidName(_)
            | AppError::InvalidKind(_)
            | AppError::TemplateRender { .. }
            | AppError::TomlParse(_)
            | AppError::Json(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateNotFound(_) => io::ErrorKind::NotFound,
            AppError::DuplicateTemplate(_) => io::ErrorKind::AlreadyExists,
            AppError::PermissionDenied(_) => io::ErrorKind::PermissionDenied,
            AppError::DirectoryCreate { .. }
            | AppError::FileWrite { .. }
            | AppError::ScaffoldIncomplete { .. } => io::ErrorKind::Other,
        }
    }
}
