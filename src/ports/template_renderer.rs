use crate::domain::{AppError, Configuration, TemplateVariant};

/// Trait for rendering a template variant.
///
/// Keeps the template engine out of the command layer.
pub trait TemplateRenderer {
    /// Render `variant` with `config` substituted verbatim.
    fn render(&self, config: &Configuration, variant: TemplateVariant)
    -> Result<String, AppError>;
}
