use include_dir::{Dir, include_dir};

use crate::domain::{AppError, TemplateVariant};

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Embedded template text for `variant`.
pub fn template_source(variant: TemplateVariant) -> Result<&'static str, AppError> {
    TEMPLATES_DIR
        .get_file(variant.asset_name())
        .and_then(|file| file.contents_utf8())
        .ok_or_else(|| AppError::TemplateMissing(variant.asset_name().to_string()))
}
