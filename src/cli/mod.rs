//! CLI argument parsing for promptform.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// Promptform: build small AI apps from a form, a prompt template, and
/// generation settings.
///
/// An app is authored in five steps: name it, build its input form,
/// write a prompt template referencing the fields by placeholder,
/// tune generation settings, then preview and run it.
#[derive(Parser, Debug)]
#[command(name = "promptform")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptform.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run an interactive authoring session.
    ///
    /// Walks the five wizard steps on stdin/stdout and finishes by
    /// rendering the prompt with the entered values and running the
    /// mock generation backend.
    Wizard(WizardArgs),

    /// Print the canonical placeholder token for a field label.
    ///
    /// Useful for writing templates by hand: `promptform token
    /// "Customer Name"` prints `{customer_name}`.
    Token(TokenArgs),
}

/// Arguments for the `wizard` command.
#[derive(Parser, Debug)]
pub struct WizardArgs {
    /// Print the authored app summary as JSON at the Preview step.
    #[arg(long)]
    pub summary: bool,
}

/// Arguments for the `token` command.
#[derive(Parser, Debug)]
pub struct TokenArgs {
    /// Field label to derive the token from.
    pub label: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
