use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;

use super::{manifest::ManifestEntry, operation::RenderedFile};

/// Renders manifest entries against one parameter context.
pub struct TemplateProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,

    /// Other
    output_root: &'a Path,
    parameters: &'a serde_json::Value,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        output_root: &'a Path,
        parameters: &'a serde_json::Value,
    ) -> Self {
        Self { engine, output_root, parameters }
    }

    /// Validates that a rendered output path is a usable relative path.
    ///
    /// Every `/`-separated part must be a plain, non-empty name, so a
    /// parameter that renders empty (or contains `..`) cannot move the output
    /// outside the target directory.
    ///
    /// # Examples
    ///
    /// Valid: `src/lib/FieldType/MyField/Type.php`
    ///
    /// Invalid: `src/lib/FieldType//Type.php` (empty part)
    fn has_valid_rendered_path_parts(rendered_path: &str) -> bool {
        rendered_path.split('/').all(|part| {
            !part.is_empty()
                && matches!(Path::new(part).components().next(), Some(Component::Normal(_)))
                && Path::new(part).components().count() == 1
        })
    }

    /// Renders an entry's output path pattern into a path under the output root.
    fn render_target_path(&self, entry: &ManifestEntry) -> Result<PathBuf> {
        let rendered = self.engine.render(entry.output, self.parameters)?;

        if !Self::has_valid_rendered_path_parts(&rendered) {
            return Err(Error::Other(anyhow::anyhow!(
                "Output path '{}' rendered from '{}' is not valid",
                rendered,
                entry.output
            )));
        }

        Ok(rendered.split('/').fold(self.output_root.to_path_buf(), |path, part| path.join(part)))
    }

    /// Renders an entry's template and its output location.
    ///
    /// # Arguments
    /// * `entry` - The manifest entry to process
    ///
    /// # Returns
    /// * `Result<RenderedFile>` - The content and where it goes
    pub fn process(&self, entry: &ManifestEntry) -> Result<RenderedFile> {
        let target = self.render_target_path(entry)?;
        let content = self.engine.render_template(entry.template, self.parameters)?;
        Ok(RenderedFile { target, content })
    }
}
