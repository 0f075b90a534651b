//! prefab: Materialize module boilerplate from per-project template sets.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::PathBuf;

use app::commands::generate;
use services::MinijinjaRenderer;

pub use app::config::{PrefabConfig, RenderSettings};
pub use domain::{AppError, ModulePath, TemplateSetId, TemplateVars};
pub use ports::{OverwritePolicy, RenderSummary, TemplateRenderer};

/// Default directory searched for template sets.
pub const DEFAULT_TEMPLATES_DIR: &str = ".prefab";

/// Options for [`generate`].
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory holding the template sets.
    pub templates_root: PathBuf,
    /// Directory rendered files are written into.
    pub output_root: PathBuf,
    /// Overwrite existing files regardless of configuration.
    pub force: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            templates_root: PathBuf::from(DEFAULT_TEMPLATES_DIR),
            output_root: PathBuf::from("."),
            force: false,
        }
    }
}

/// Derive the template variable mapping for a dotted module path.
///
/// Total over all inputs: any string, including the empty one, yields the
/// complete fixed-key mapping.
pub fn derive_variables(module_path: &str) -> TemplateVars {
    TemplateVars::derive(&ModulePath::parse(module_path))
}

/// Render a template set for a dotted module path.
///
/// The set is looked up under `options.templates_root`; rendered files land
/// under `options.output_root`. Existing files are skipped unless `force` is
/// set or the configuration in the templates root enables overwriting.
pub fn generate(
    template_set: &str,
    module_path: &str,
    options: GenerateOptions,
) -> Result<RenderSummary, AppError> {
    let set = TemplateSetId::new(template_set)?;
    let path = ModulePath::parse(module_path);

    let config = PrefabConfig::load(&options.templates_root)?;
    let overwrite = if options.force { OverwritePolicy::Always } else { config.overwrite_policy() };

    let renderer = MinijinjaRenderer::new(options.templates_root, options.output_root);
    generate::execute(&renderer, &set, &path, overwrite)
}
