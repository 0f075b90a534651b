pub mod casing;
pub mod error;
pub mod module_path;
pub mod template_set_id;
pub mod template_vars;

pub use error::AppError;
pub use module_path::ModulePath;
pub use template_set_id::TemplateSetId;
pub use template_vars::TemplateVars;
