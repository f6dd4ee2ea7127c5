//! Scaffold plans: which files a kind produces, and in what order.

use std::collections::BTreeMap;

use super::{ComponentName, Kind};

pub const INDEX_TEMPLATE: &str = "index";
pub const COMPONENT_TEMPLATE: &str = "component";
pub const STYLESHEET_TEMPLATE: &str = "stylesheet";
pub const STORY_TEMPLATE: &str = "story";

pub const CSS_MODULE_SUFFIX: &str = ".module";
pub const STORYBOOK_SUFFIX: &str = ".stories";

/// Variable templates interpolate the component name through.
pub const NAME_VARIABLE: &str = "NAME";

/// One file scheduled for materialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlanItem {
    /// Logical file name; the template's extension is appended on write.
    pub relative_path: String,
    /// Template to render.
    pub template_name: String,
    /// Bindings layered over the item's default variables.
    pub variable_overrides: BTreeMap<String, String>,
}

impl ScaffoldPlanItem {
    fn new(relative_path: impl Into<String>, template_name: &str) -> Self {
        ScaffoldPlanItem {
            relative_path: relative_path.into(),
            template_name: template_name.to_string(),
            variable_overrides: BTreeMap::new(),
        }
    }

    fn with_name_override(mut self, name: &ComponentName) -> Self {
        self.variable_overrides.insert(NAME_VARIABLE.to_string(), name.as_str().to_string());
        self
    }
}

/// Resolve the ordered list of files to materialize for a scaffold.
///
/// Files are created in this order, so a failure leaves a predictable
/// partial state. The index and component files are always planned; the
/// stylesheet and story depend on the kind.
pub fn resolve(kind: Kind, name: &ComponentName) -> Vec<ScaffoldPlanItem> {
    let mut items = vec![
        ScaffoldPlanItem::new("index", INDEX_TEMPLATE).with_name_override(name),
        ScaffoldPlanItem::new(name.as_str(), COMPONENT_TEMPLATE),
    ];

    if matches!(kind, Kind::WithStyle | Kind::WithStyleAndStory) {
        items.push(ScaffoldPlanItem::new(
            format!("{}{}", name.as_str(), CSS_MODULE_SUFFIX),
            STYLESHEET_TEMPLATE,
        ));
    }

    if kind == Kind::WithStyleAndStory {
        items.push(
            ScaffoldPlanItem::new(
                format!("{}{}", name.as_str(), STORYBOOK_SUFFIX),
                STORY_TEMPLATE,
            )
            .with_name_override(name),
        );
    }

    items
}
