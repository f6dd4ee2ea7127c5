//! recomp: scaffold React component directories from named templates.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::path::Path;

use app::AppContext;
use services::{DirectoryFilesystem, builtin_templates};

pub use app::materializer::{FailurePolicy, FileFailure, ScaffoldResult};
pub use domain::{
    AppError, ComponentName, Kind, ScaffoldPlanItem, TemplateDescriptor, TemplateStore, resolve,
};

/// Scaffold a component directory under `base` using the built-in templates.
///
/// This is the single entry point external callers invoke. Validation
/// happens before any I/O; per-file failures are reported through
/// `ScaffoldResult::failures` rather than raised.
pub fn scaffold(base: &Path, name: &str, kind: Kind) -> Result<ScaffoldResult, AppError> {
    let templates = builtin_templates::store()?;
    let ctx = AppContext::new(DirectoryFilesystem::new(), templates);
    app::commands::scaffold::execute(&ctx, base, name, kind, FailurePolicy::Collect)
}
