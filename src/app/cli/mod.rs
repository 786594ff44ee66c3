//! CLI Adapter.

mod logging;

use crate::domain::{AppError, TemplateVariant};
use clap::Parser;

#[derive(Parser)]
#[command(name = "mkgen")]
#[command(version)]
#[command(
    about = "Generate a Makefile for a Go project in the current directory",
    long_about = "Prompts for the application name and container registry, then writes \
                  ./Makefile from the selected template, replacing any existing file."
)]
struct Cli {
    /// Template layout to render (multi, single)
    #[arg(short = 't', long, default_value = "multi")]
    variant: String,
    /// List available template layouts and exit
    #[arg(long, conflicts_with = "variant")]
    list_variants: bool,
    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = if cli.list_variants { run_list_variants() } else { run_generate(&cli.variant) };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(variant: &str) -> Result<(), AppError> {
    let variant: TemplateVariant = variant.parse()?;
    tracing::debug!(%variant, "generating Makefile");

    let outcome = crate::app::api::generate(variant)?;
    println!("✅ Wrote {} ({})", outcome.path, outcome.variant.description());
    Ok(())
}

fn run_list_variants() -> Result<(), AppError> {
    println!("Available variants:");
    for variant in TemplateVariant::ALL {
        let marker = if variant == TemplateVariant::default() { " (default)" } else { "" };
        println!("  {} - {}{}", variant.name(), variant.description(), marker);
    }
    Ok(())
}
