//! Named templates and the registry they render from.
//!
//! The store is built once at startup and read-only afterward; rendering is
//! pure and safe to share across callers.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior};

use super::AppError;

/// A named template with its target file extension and variable contract.
#[derive(Debug, Clone)]
pub struct TemplateDescriptor {
    /// Identifier plan items refer to.
    pub name: String,
    /// Extension appended to the logical file name at materialization.
    pub extension: String,
    /// Template source text.
    pub body: String,
    /// Variables that must be bound for rendering to succeed.
    pub required_variables: BTreeSet<String>,
}

/// Registry of named templates.
#[derive(Debug, Default)]
pub struct TemplateStore {
    templates: BTreeMap<String, TemplateDescriptor>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template. Fails if the name is already taken.
    pub fn register(&mut self, descriptor: TemplateDescriptor) -> Result<(), AppError> {
        if self.templates.contains_key(&descriptor.name) {
            return Err(AppError::DuplicateTemplate(descriptor.name));
        }
        self.templates.insert(descriptor.name.clone(), descriptor);
        Ok(())
    }

    /// Replace the body of an already-registered template.
    pub fn override_body(&mut self, name: &str, body: String) -> Result<(), AppError> {
        match self.templates.get_mut(name) {
            Some(descriptor) => {
                descriptor.body = body;
                Ok(())
            }
            None => Err(AppError::TemplateNotFound(name.to_string())),
        }
    }

    pub fn get(&self, name: &str) -> Option<&TemplateDescriptor> {
        self.templates.get(name)
    }

    /// Registered template names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    /// Render a template against the given variables.
    ///
    /// Required variables are checked up front so a missing binding fails
    /// even when the body does not reference it.
    pub fn render(
        &self,
        name: &str,
        variables: &BTreeMap<String, String>,
    ) -> Result<String, AppError> {
        let descriptor =
            self.get(name).ok_or_else(|| AppError::TemplateNotFound(name.to_string()))?;

        for required in &descriptor.required_variables {
            if !variables.contains_key(required) {
                return Err(AppError::TemplateRender {
                    template: name.to_string(),
                    reason: format!("missing required variable '{}'", required),
                });
            }
        }

        environment().render_str(&descriptor.body, variables).map_err(|err| {
            AppError::TemplateRender { template: name.to_string(), reason: err.to_string() }
        })
    }
}

fn environment() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env
    })
}
