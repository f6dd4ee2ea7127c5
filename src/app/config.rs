//! Optional `recomp.toml` configuration in the target directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::app::materializer::FailurePolicy;
use crate::domain::{AppError, Kind, TemplateStore};
use crate::services::builtin_templates;

pub const CONFIG_FILENAME: &str = "recomp.toml";

/// Per-project scaffold configuration.
///
/// All fields are optional; a missing file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScaffoldConfig {
    /// Kind used when none is given on the command line.
    pub default_kind: Option<String>,
    /// Failure policy: "collect" (default) or "abort".
    pub on_error: Option<String>,
    /// Directory of `<template>.j2` files overriding built-in bodies.
    pub templates: Option<PathBuf>,
}

impl ScaffoldConfig {
    /// Load configuration from `dir/recomp.toml`, defaulting when absent.
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let path = dir.join(CONFIG_FILENAME);
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)?;
        Ok(toml::from_str(&contents)?)
    }

    pub fn default_kind(&self) -> Result<Option<Kind>, AppError> {
        match &self.default_kind {
            Some(value) => Kind::from_arg(value)
                .map(Some)
                .ok_or_else(|| AppError::InvalidKind(value.clone())),
            None => Ok(None),
        }
    }

    pub fn failure_policy(&self) -> Result<FailurePolicy, AppError> {
        match self.on_error.as_deref() {
            None | Some("collect") | Some("continue") => Ok(FailurePolicy::Collect),
            Some("abort") => Ok(FailurePolicy::Abort),
            Some(other) => Err(AppError::Configuration(format!(
                "Invalid on_error value '{}': must be 'collect' or 'abort'",
                other
            ))),
        }
    }

    /// Build the template store: built-ins plus any configured overrides.
    pub fn template_store(&self, dir: &Path) -> Result<TemplateStore, AppError> {
        let mut store = builtin_templates::store()?;
        if let Some(overrides) = &self.templates {
            apply_overrides(&mut store, &dir.join(overrides))?;
        }
        Ok(store)
    }
}

fn apply_overrides(store: &mut TemplateStore, dir: &Path) -> Result<(), AppError> {
    if !dir.is_dir() {
        return Err(AppError::Configuration(format!(
            "Template override directory '{}' does not exist",
            dir.display()
        )));
    }

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            paths.push(path);
        }
    }
    // sort for determinism
    paths.sort();

    for path in paths {
        let name = override_template_name(&path).ok_or_else(|| {
            AppError::Configuration(format!(
                "Unexpected file '{}' in template override directory: expected '<template>.j2'",
                path.display()
            ))
        })?;
        let body = fs::read_to_string(&path)?;
        store.override_body(&name, body)?;
    }
    Ok(())
}

fn override_template_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    file_name.strip_suffix(".j2").map(str::to_string)
}
