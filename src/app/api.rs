//! Public library API wiring the real adapters.

use crate::adapters::template::MinijinjaTemplateRenderer;
use crate::adapters::terminal_prompter::TerminalPrompter;
use crate::adapters::workspace_filesystem::FilesystemOutputStore;
use crate::app::AppContext;
use crate::app::commands::generate::{self, GenerateOutcome};
use crate::domain::{AppError, Configuration, TemplateVariant};
use crate::ports::TemplateRenderer;

/// Render `variant` with `config` in memory.
pub fn render(config: &Configuration, variant: TemplateVariant) -> Result<String, AppError> {
    MinijinjaTemplateRenderer::new().render(config, variant)
}

/// Prompt on the standard streams and write `Makefile` in the current directory.
pub fn generate(variant: TemplateVariant) -> Result<GenerateOutcome, AppError> {
    let store = FilesystemOutputStore::current()?;
    let ctx = AppContext::new(store, MinijinjaTemplateRenderer::new());
    let mut prompter = TerminalPrompter::new();

    generate::execute(&ctx, &mut prompter, variant)
}
