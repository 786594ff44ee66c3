//! mkgen: interactively scaffold a Makefile for a Go project.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


pub use app::api::{generate, render};
pub use app::commands::generate::{APPLICATION_PROMPT, GenerateOutcome, REGISTRY_PROMPT};
pub use domain::{AppError, Configuration, OUTPUT_FILE, TemplateVariant};
