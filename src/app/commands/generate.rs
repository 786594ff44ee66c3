use std::io::Write;

use crate::app::AppContext;
use crate::domain::{AppError, Configuration, OUTPUT_FILE, TemplateVariant};
use crate::ports::{OutputStore, Prompter, TemplateRenderer};

pub const APPLICATION_PROMPT: &str = "Please enter the name of your application:";
pub const REGISTRY_PROMPT: &str = "Please enter the url of registry, e.g. docker user:";

/// Result of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOutcome {
    pub path: String,
    pub variant: TemplateVariant,
    pub config: Configuration,
    pub bytes_written: usize,
}

/// Execute the generate command.
///
/// The output file is created before any prompt so an unwritable directory
/// fails without asking the user anything.
pub fn execute<S, R, P>(
    ctx: &AppContext<S, R>,
    prompter: &mut P,
    variant: TemplateVariant,
) -> Result<GenerateOutcome, AppError>
where
    S: OutputStore,
    R: TemplateRenderer,
    P: Prompter,
{
    let mut output = ctx.output().create(OUTPUT_FILE)?;
    tracing::debug!(path = OUTPUT_FILE, "opened output file");

    let application = prompter.ask(APPLICATION_PROMPT)?;
    let registry = prompter.ask(REGISTRY_PROMPT)?;
    let config = Configuration { application, registry };

    let rendered = ctx.renderer().render(&config, variant)?;
    output.write_all(rendered.as_bytes())?;
    output.flush()?;
    tracing::debug!(%variant, bytes = rendered.len(), "wrote rendered template");

    Ok(GenerateOutcome {
        path: OUTPUT_FILE.to_string(),
        variant,
        config,
        bytes_written: rendered.len(),
    })
}
