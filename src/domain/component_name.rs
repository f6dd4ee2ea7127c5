use std::fmt;

use super::AppError;

/// A validated component name.
///
/// Guarantees:
/// - Non-empty
/// - Contains only alphanumeric characters, `-`, or `_`
/// - No path separators or traversal components (/, \, ., ..)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName(String);

impl ComponentName {
    pub fn new(name: &str) -> Result<Self, AppError> {
        if is_valid_name(name) {
            Ok(ComponentName(name.to_string()))
        } else {
            Err(AppError::InvalidName(name.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    if name.contains('/') || name.contains('\\') {
        return false;
    }
    if name == "." || name == ".." {
        return false;
    }
    name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}
