use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for mkgen operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The output file could not be created or truncated.
    #[error("Unable to create '{}': {source}", .path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template variant name is not recognised.
    #[error("Invalid template variant '{name}': must be one of {expected}")]
    InvalidVariant { name: String, expected: String },

    /// Embedded template asset is missing from the binary.
    #[error("Template asset '{0}' is not embedded")]
    TemplateMissing(String),

    /// Template engine failed to render.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// The user interrupted an interactive prompt.
    #[error("Prompt cancelled")]
    PromptCancelled,
}

impl AppError {
    pub fn output_create<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        AppError::OutputCreate { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers matching on I/O semantics.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::OutputCreate { source, .. } => source.kind(),
            AppError::InvalidVariant { .. } => io::ErrorKind::InvalidInput,
            AppError::TemplateMissing(_) => io::ErrorKind::NotFound,
            AppError::TemplateRender { .. } => io::ErrorKind::InvalidData,
            AppError::PromptCancelled => io::ErrorKind::Interrupted,
        }
    }
}
