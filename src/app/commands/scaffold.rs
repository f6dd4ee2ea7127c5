//! Scaffold command implementation.

use std::path::Path;

use serde::Serialize;

use crate::app::AppContext;
use crate::app::materializer::{self, FailurePolicy, ScaffoldResult};
use crate::domain::{AppError, ComponentName, Kind, resolve};
use crate::ports::ScaffoldFilesystem;

/// Execute a scaffold: validate the name, resolve the plan, materialize it.
///
/// The name is validated before any file-system access. Per-file failures
/// surface through `ScaffoldResult::failures`, never as a raised error.
pub fn execute<F: ScaffoldFilesystem>(
    ctx: &AppContext<F>,
    base: &Path,
    name: &str,
    kind: Kind,
    policy: FailurePolicy,
) -> Result<ScaffoldResult, AppError> {
    let name = ComponentName::new(name)?;
    let plan = resolve(kind, &name);
    materializer::materialize(ctx, base, name.as_str(), &plan, policy)
}

/// Machine-readable view of a `ScaffoldResult`.
#[derive(Debug, Serialize)]
pub struct ScaffoldReport {
    pub directory: String,
    pub created: Vec<String>,
    pub failures: Vec<ReportedFailure>,
}

#[derive(Debug, Serialize)]
pub struct ReportedFailure {
    pub file: String,
    pub error: String,
}

impl ScaffoldReport {
    pub fn from_result(result: &ScaffoldResult) -> Self {
        ScaffoldReport {
            directory: result.directory_path.display().to_string(),
            created: result.created_files.clone(),
            failures: result
                .failures
                .iter()
                .map(|failure| ReportedFailure {
                    file: failure.file.clone(),
                    error: failure.error.to_string(),
                })
                .collect(),
        }
    }
}
