use std::fs;
use std::path::{Component, Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior};

use crate::domain::{AppError, TemplateSetId, TemplateVars};
use crate::ports::{OverwritePolicy, RenderSummary, TemplateRenderer};

/// Filesystem-backed template renderer.
///
/// Template sets are directories under a sets root; set `id` resolves to
/// `<root>/<id>/`. Every relative path in the set and every UTF-8 file body
/// is itself a minijinja template rendered with the derived variables;
/// non-UTF-8 files are copied byte for byte. Results land under the output
/// root, which rendered paths may not escape.
pub struct MinijinjaRenderer {
    sets_root: PathBuf,
    output_root: PathBuf,
    env: Environment<'static>,
}

/// One entry of a template set, in template space.
struct TemplateEntry {
    /// Path relative to the set directory, `/`-separated.
    rel_path: String,
    /// Absolute location of the entry on disk.
    source: PathBuf,
    is_dir: bool,
}

impl MinijinjaRenderer {
    /// Create a renderer reading sets from `sets_root` and writing under
    /// `output_root`.
    pub fn new(sets_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        let mut env = Environment::new();
        // Undefined variables are render errors, not silent blanks.
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { sets_root: sets_root.into(), output_root: output_root.into(), env }
    }

    fn set_dir(&self, set: &TemplateSetId) -> PathBuf {
        self.sets_root.join(set.as_str())
    }

    fn render_str(
        &self,
        template: &str,
        vars: &TemplateVars,
        origin: &str,
    ) -> Result<String, AppError> {
        self.env.render_str(template, vars).map_err(|e| AppError::TemplateRender {
            path: origin.to_string(),
            reason: e.to_string(),
        })
    }

    /// Join a rendered relative path under the output root.
    ///
    /// Absolute paths and `..` components are rejected so a set can never
    /// write outside the output tree.
    fn target_path(&self, rendered_rel: &str) -> Result<PathBuf, AppError> {
        let rel = Path::new(rendered_rel);
        for component in rel.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                _ => return Err(AppError::PathEscapesOutput(rendered_rel.to_string())),
            }
        }
        Ok(self.output_root.join(rel))
    }
}

impl TemplateRenderer for MinijinjaRenderer {
    fn render(
        &self,
        set: &TemplateSetId,
        vars: &TemplateVars,
        overwrite: OverwritePolicy,
    ) -> Result<RenderSummary, AppError> {
        let set_dir = self.set_dir(set);
        if !set_dir.is_dir() {
            return Err(AppError::TemplateSetNotFound {
                name: set.as_str().to_string(),
                root: self.sets_root.display().to_string(),
            });
        }

        let mut entries = Vec::new();
        collect_entries(&set_dir, "", &mut entries)?;

        let mut summary = RenderSummary::default();
        for entry in entries {
            let rendered_rel = self.render_str(&entry.rel_path, vars, &entry.rel_path)?;
            let target = self.target_path(&rendered_rel)?;

            if entry.is_dir {
                fs::create_dir_all(&target)?;
                continue;
            }

            if overwrite == OverwritePolicy::IfMissing && target.exists() {
                summary.skipped.push(rendered_rel);
                continue;
            }

            let raw = fs::read(&entry.source)?;
            let output = match String::from_utf8(raw) {
                Ok(text) => self.render_str(&text, vars, &entry.rel_path)?.into_bytes(),
                Err(not_utf8) => not_utf8.into_bytes(),
            };

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&target, output)?;
            summary.written.push(rendered_rel);
        }

        Ok(summary)
    }
}

/// Walk a set directory, recording entries depth-first in sorted order so
/// directories precede their contents.
fn collect_entries(
    dir: &Path,
    prefix: &str,
    entries: &mut Vec<TemplateEntry>,
) -> Result<(), AppError> {
    let mut children: Vec<fs::DirEntry> = fs::read_dir(dir)?.collect::<Result<_, _>>()?;
    children.sort_by_key(|child| child.file_name());

    for child in children {
        let name = child.file_name();
        let name = name
            .to_str()
            .ok_or_else(|| AppError::NonUnicodePath(child.path().display().to_string()))?;
        let rel_path =
            if prefix.is_empty() { name.to_string() } else { format!("{}/{}", prefix, name) };
        let source = child.path();

        if child.file_type()?.is_dir() {
            entries.push(TemplateEntry { rel_path: rel_path.clone(), source: source.clone(), is_dir: true });
            collect_entries(&source, &rel_path, entries)?;
        } else {
            entries.push(TemplateEntry { rel_path, source, is_dir: false });
        }
    }

    Ok(())
}
