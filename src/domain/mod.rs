pub mod configuration;
pub mod error;
pub mod variant;

pub use configuration::Configuration;
pub use error::AppError;
pub use variant::TemplateVariant;

/// Name of the generated file, relative to the working directory.
pub const OUTPUT_FILE: &str = "Makefile";
