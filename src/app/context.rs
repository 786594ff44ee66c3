use crate::ports::{OutputStore, TemplateRenderer};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: OutputStore, R: TemplateRenderer> {
    output: S,
    renderer: R,
}

impl<S: OutputStore, R: TemplateRenderer> AppContext<S, R> {
    /// Create a new application context.
    pub fn new(output: S, renderer: R) -> Self {
        Self { output, renderer }
    }

    /// Get a reference to the output store.
    pub fn output(&self) -> &S {
        &self.output
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
