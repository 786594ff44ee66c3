use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use std::sync::OnceLock;

use crate::adapters::assets::makefile_templates::template_source;
use crate::domain::{AppError, Configuration, TemplateVariant};
use crate::ports::TemplateRenderer;

/// Template renderer using Minijinja.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinijinjaTemplateRenderer;

impl MinijinjaTemplateRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for MinijinjaTemplateRenderer {
    fn render(
        &self,
        config: &Configuration,
        variant: TemplateVariant,
    ) -> Result<String, AppError> {
        let env = environment()?;
        let template = env
            .get_template(variant.asset_name())
            .map_err(|err| template_render_error(variant, err))?;
        template.render(config).map_err(|err| template_render_error(variant, err))
    }
}

static ENV: OnceLock<Environment<'static>> = OnceLock::new();

fn environment() -> Result<&'static Environment<'static>, AppError> {
    if let Some(env) = ENV.get() {
        return Ok(env);
    }

    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_auto_escape_callback(|_| AutoEscape::None);

    for variant in TemplateVariant::ALL {
        env.add_template(variant.asset_name(), template_source(variant)?)
            .map_err(|err| template_render_error(variant, err))?;
    }

    Ok(ENV.get_or_init(|| env))
}

fn template_render_error(variant: TemplateVariant, err: impl std::fmt::Display) -> AppError {
    AppError::TemplateRender { template: variant.asset_name().to_string(), reason: err.to_string() }
}
