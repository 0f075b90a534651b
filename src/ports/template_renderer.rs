use crate::domain::{AppError, TemplateSetId, TemplateVars};

/// How the renderer treats files that already exist in the output tree.
///
/// Rendering into an existing directory tree is always permitted; the
/// policy only governs individual files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverwritePolicy {
    /// Overwrite existing files with freshly rendered content.
    Always,
    /// Leave existing files untouched and record them as skipped.
    #[default]
    IfMissing,
}

/// Outcome of one render pass. Paths are relative to the output root.
#[derive(Debug, Clone, Default)]
pub struct RenderSummary {
    /// Files written, in render order.
    pub written: Vec<String>,
    /// Files left untouched because they already existed.
    pub skipped: Vec<String>,
}

impl RenderSummary {
    /// Total number of files the pass visited.
    pub fn total(&self) -> usize {
        self.written.len() + self.skipped.len()
    }
}

/// Port for the template rendering engine.
///
/// The engine owns everything behind this boundary: locating the template
/// set, substituting variables into file paths and contents, writing the
/// result to disk, and honoring the overwrite policy. It never prompts.
/// The variable mapping is consumed verbatim; the engine adds no keys of
/// its own.
pub trait TemplateRenderer {
    /// Render the template set into the output tree.
    ///
    /// A missing set surfaces as `AppError::TemplateSetNotFound`; write
    /// failures surface as `AppError::Io`.
    fn render(
        &self,
        set: &TemplateSetId,
        vars: &TemplateVars,
        overwrite: OverwritePolicy,
    ) -> Result<RenderSummary, AppError>;
}
