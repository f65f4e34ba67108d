use super::filters::*;
use crate::{error::Result, renderer::interface::TemplateRenderer, skeleton};
use log::debug;
use minijinja::{AutoEscape, Environment, ErrorKind};
use std::path::{Path, PathBuf};

/// MiniJinja-based template rendering engine.
///
/// Skeleton templates are resolved lazily by name: first in the optional
/// override directory, then among the templates compiled into the binary.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer backed by the built-in skeleton only.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Creates a renderer whose templates can be overridden from `dir`.
    ///
    /// A template is taken from `dir/<template id>` when that file exists,
    /// otherwise the built-in version is used.
    pub fn with_skeleton_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self::build(Some(dir.into()))
    }

    fn build(skeleton_dir: Option<PathBuf>) -> Self {
        let mut env = Environment::new();
        // Generated PHP, YAML and Twig must come out verbatim.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);

        env.set_loader(move |name| load_template(skeleton_dir.as_deref(), name));

        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("pascal_case", to_pascal_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("underscore", to_underscored);
        env.add_filter("identifier", to_identifier);

        Self { env }
    }
}

fn load_template(
    skeleton_dir: Option<&Path>,
    name: &str,
) -> Result<Option<String>, minijinja::Error> {
    if let Some(dir) = skeleton_dir {
        let candidate = dir.join(name);
        if candidate.is_file() {
            debug!("Loading template override: {}", candidate.display());
            return std::fs::read_to_string(&candidate).map(Some).map_err(|e| {
                minijinja::Error::new(
                    ErrorKind::InvalidOperation,
                    format!("cannot read template '{}'", candidate.display()),
                )
                .with_source(e)
            });
        }
    }
    Ok(skeleton::lookup(name).map(str::to_owned))
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(self.env.render_str(template, context)?)
    }

    fn render_template(&self, name: &str, context: &serde_json::Value) -> Result<String> {
        let template = self.env.get_template(name)?;
        Ok(template.render(context)?)
    }
}
