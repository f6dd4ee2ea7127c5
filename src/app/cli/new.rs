//! New-component command implementation.

use std::path::Path;

use dialoguer::Select;

use crate::app::AppContext;
use crate::app::commands::scaffold::{self, ScaffoldReport};
use crate::app::config::ScaffoldConfig;
use crate::domain::{AppError, Kind};
use crate::services::DirectoryFilesystem;

pub fn run_new(dir: &Path, name: &str, kind_arg: Option<&str>, json: bool) -> Result<(), AppError> {
    let config = ScaffoldConfig::load(dir)?;

    let kind = match kind_arg {
        Some(value) => {
            Kind::from_arg(value).ok_or_else(|| AppError::InvalidKind(value.to_string()))?
        }
        None => match config.default_kind()? {
            Some(kind) => kind,
            None => match prompt_kind()? {
                Some(kind) => kind,
                // Selection dismissed; nothing to do.
                None => return Ok(()),
            },
        },
    };

    let templates = config.template_store(dir)?;
    let ctx = AppContext::new(DirectoryFilesystem::new(), templates);
    let result = scaffold::execute(&ctx, dir, name, kind, config.failure_policy()?)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ScaffoldReport::from_result(&result))?);
    } else {
        println!(
            "✅ Created {}/ ({} files)",
            result.directory_path.display(),
            result.created_files.len()
        );
        for failure in &result.failures {
            eprintln!("⚠️  {}: {}", failure.file, failure.error);
        }
    }

    if result.is_complete() {
        Ok(())
    } else {
        Err(AppError::ScaffoldIncomplete {
            failed: result.failures.len(),
            planned: result.created_files.len() + result.failures.len(),
        })
    }
}

fn prompt_kind() -> Result<Option<Kind>, AppError> {
    let items: Vec<&str> = Kind::ALL.iter().map(|kind| kind.display_name()).collect();
    let selection = Select::new()
        .with_prompt("Select kind")
        .items(&items)
        .default(0)
        .interact_opt()
        .map_err(|err| AppError::Configuration(format!("Failed to select kind: {}", err)))?;

    Ok(selection.map(|index| Kind::ALL[index]))
}
