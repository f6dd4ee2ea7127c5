mod component_name;
mod error;
mod kind;
pub mod plan;
mod template;

pub use component_name::ComponentName;
pub use error::AppError;
pub use kind::Kind;
pub use plan::{ScaffoldPlanItem, resolve};
pub use template::{TemplateDescriptor, TemplateStore};
