//! Built-in templates embedded in the binary.

use std::collections::BTreeSet;

use crate::domain::plan::{
    COMPONENT_TEMPLATE, INDEX_TEMPLATE, NAME_VARIABLE, STORY_TEMPLATE, STYLESHEET_TEMPLATE,
};
use crate::domain::{AppError, TemplateDescriptor, TemplateStore};

struct BuiltinTemplate {
    name: &'static str,
    extension: &'static str,
    body: &'static str,
    requires_name: bool,
}

static BUILTIN_TEMPLATES: [BuiltinTemplate; 4] = [
    BuiltinTemplate {
        name: INDEX_TEMPLATE,
        extension: "ts",
        body: include_str!("templates/index.ts.j2"),
        requires_name: true,
    },
    BuiltinTemplate {
        name: COMPONENT_TEMPLATE,
        extension: "tsx",
        body: include_str!("templates/component.tsx.j2"),
        requires_name: true,
    },
    BuiltinTemplate {
        name: STYLESHEET_TEMPLATE,
        extension: "css",
        body: include_str!("templates/stylesheet.css.j2"),
        requires_name: false,
    },
    BuiltinTemplate {
        name: STORY_TEMPLATE,
        extension: "tsx",
        body: include_str!("templates/story.tsx.j2"),
        requires_name: true,
    },
];

/// Build a template store holding the built-in templates.
pub fn store() -> Result<TemplateStore, AppError> {
    let mut store = TemplateStore::new();
    for template in &BUILTIN_TEMPLATES {
        let mut required = BTreeSet::new();
        if template.requires_name {
            required.insert(NAME_VARIABLE.to_string());
        }
        store.register(TemplateDescriptor {
            name: template.name.to_string(),
            extension: template.extension.to_string(),
            body: template.body.to_string(),
            required_variables: required,
        })?;
    }
    Ok(store)
}
