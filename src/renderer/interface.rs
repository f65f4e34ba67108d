use crate::error::Result;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders an inline template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template source, e.g. an output path pattern
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered string
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;

    /// Renders a skeleton template identified by name.
    ///
    /// # Arguments
    /// * `name` - Template id, e.g. `fieldtype/src/lib/FieldType/Type.php.j2`
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered file content
    fn render_template(&self, name: &str, context: &serde_json::Value) -> Result<String>;
}
