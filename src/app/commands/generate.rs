//! Generate command implementation for rendering a template set.

use crate::domain::{AppError, ModulePath, TemplateSetId, TemplateVars};
use crate::ports::{OverwritePolicy, RenderSummary, TemplateRenderer};

/// Execute the generate command.
///
/// Derives the variable mapping for `module_path` and hands it to the
/// renderer unchanged; the renderer owns everything from there.
pub fn execute<R: TemplateRenderer>(
    renderer: &R,
    set: &TemplateSetId,
    module_path: &ModulePath,
    overwrite: OverwritePolicy,
) -> Result<RenderSummary, AppError> {
    let vars = TemplateVars::derive(module_path);
    renderer.render(set, &vars, overwrite)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    struct RecordingRenderer {
        calls: RefCell<Vec<(String, TemplateVars, OverwritePolicy)>>,
        fail: bool,
    }

    impl RecordingRenderer {
        fn new(fail: bool) -> Self {
            Self { calls: RefCell::new(Vec::new()), fail }
        }
    }

    impl TemplateRenderer for RecordingRenderer {
        fn render(
            &self,
            set: &TemplateSetId,
            vars: &TemplateVars,
            overwrite: OverwritePolicy,
        ) -> Result<RenderSummary, AppError> {
            self.calls.borrow_mut().push((set.as_str().to_string(), vars.clone(), overwrite));
            if self.fail {
                return Err(AppError::PathEscapesOutput("../escape".to_string()));
            }
            let mut summary = RenderSummary::default();
            summary.written.push("generated.txt".to_string());
            Ok(summary)
        }
    }

    #[test]
    fn forwards_derived_variables_verbatim() {
        let renderer = RecordingRenderer::new(false);
        let set = TemplateSetId::new("gomod").unwrap();
        let module_path = ModulePath::parse("cmd.myservice.worker");

        let summary = execute(&renderer, &set, &module_path, OverwritePolicy::Always).unwrap();

        assert_eq!(summary.written, vec!["generated.txt".to_string()]);
        let calls = renderer.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (seen_set, seen_vars, seen_policy) = &calls[0];
        assert_eq!(seen_set, "gomod");
        assert_eq!(*seen_vars, TemplateVars::derive(&module_path));
        assert_eq!(*seen_policy, OverwritePolicy::Always);
    }

    #[test]
    fn renderer_errors_pass_through() {
        let renderer = RecordingRenderer::new(true);
        let set = TemplateSetId::new("gomod").unwrap();
        let module_path = ModulePath::parse("widget");

        let result = execute(&renderer, &set, &module_path, OverwritePolicy::IfMissing);

        assert!(matches!(result, Err(AppError::PathEscapesOutput(_))));
    }
}
