//! Renders planned files and writes them under the component directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::domain::plan::NAME_VARIABLE;
use crate::domain::{AppError, ScaffoldPlanItem};
use crate::ports::ScaffoldFilesystem;

/// What to do when a planned file fails to render or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure and keep materializing sibling files.
    #[default]
    Collect,
    /// Record the failure and skip the remaining plan items.
    Abort,
}

/// A per-file failure recorded during materialization.
#[derive(Debug)]
pub struct FileFailure {
    pub file: String,
    pub error: AppError,
}

/// Outcome of a scaffold operation.
#[derive(Debug)]
pub struct ScaffoldResult {
    /// Path of the created component directory.
    pub directory_path: PathBuf,
    /// Final file names written, in plan order.
    pub created_files: Vec<String>,
    /// Per-file failures, in plan order.
    pub failures: Vec<FileFailure>,
}

impl ScaffoldResult {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Create `base/name` and write each plan item into it.
///
/// Directory creation failures are fatal and abort before any file write.
/// Render and write failures are recorded per file; `policy` decides
/// whether siblings are still written. Already-written files are never
/// rolled back; the caller inspects `failures` to decide remediation.
pub fn materialize<F: ScaffoldFilesystem>(
    ctx: &AppContext<F>,
    base: &Path,
    name: &str,
    plan: &[ScaffoldPlanItem],
    policy: FailurePolicy,
) -> Result<ScaffoldResult, AppError> {
    let directory = base.join(name);
    if ctx.filesystem().exists(&directory) && !ctx.filesystem().is_dir(&directory) {
        return Err(AppError::DirectoryCreate {
            path: directory.display().to_string(),
            reason: "path exists and is not a directory".to_string(),
        });
    }
    // Idempotent: a pre-existing directory is accepted silently, and
    // missing parent segments are created recursively.
    ctx.filesystem().create_dir_all(&directory)?;

    let mut result = ScaffoldResult {
        directory_path: directory.clone(),
        created_files: Vec::new(),
        failures: Vec::new(),
    };

    for item in plan {
        match write_item(ctx, &directory, item) {
            Ok(file_name) => result.created_files.push(file_name),
            Err((file, error)) => {
                result.failures.push(FileFailure { file, error });
                if policy == FailurePolicy::Abort {
                    break;
                }
            }
        }
    }

    Ok(result)
}

fn write_item<F: ScaffoldFilesystem>(
    ctx: &AppContext<F>,
    directory: &Path,
    item: &ScaffoldPlanItem,
) -> Result<String, (String, AppError)> {
    let descriptor = match ctx.templates().get(&item.template_name) {
        Some(descriptor) => descriptor,
        None => {
            return Err((
                item.relative_path.clone(),
                AppError::TemplateNotFound(item.template_name.clone()),
            ));
        }
    };
    let file_name = format!("{}.{}", item.relative_path, descriptor.extension);

    // NAME defaults to the logical file name; plan overrides win.
    let mut variables = BTreeMap::new();
    variables.insert(NAME_VARIABLE.to_string(), item.relative_path.clone());
    variables.extend(item.variable_overrides.clone());

    let contents = ctx
        .templates()
        .render(&item.template_name, &variables)
        .map_err(|err| (file_name.clone(), err))?;

    ctx.filesystem()
        .write_file(&directory.join(&file_name), &contents)
        .map_err(|err| (file_name.clone(), err))?;

    Ok(file_name)
}
