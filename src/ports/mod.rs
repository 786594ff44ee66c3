mod output_store;
mod prompter;
mod template_renderer;

pub use output_store::OutputStore;
pub use prompter::Prompter;
pub use template_renderer::TemplateRenderer;
