//! Promptform: a core for building small AI apps from three parts.
//!
//! An app is a dynamic input form (up to five fields), a prompt template
//! that references those fields through `{snake_case}` placeholder
//! tokens, and a set of generation settings. Authoring walks a five-step
//! wizard; at the end the template is rendered with the entered values
//! and handed to a generation backend.
//!
//! The library layers are:
//! - [`field`] and [`form`]: the form schema and its pure editing
//!   operations.
//! - [`prompt`]: placeholder derivation, the template record, and the
//!   total best-effort renderer.
//! - [`settings`]: the model choice and clamped sampling knobs.
//! - [`wizard`]: the step machine tying the above together.
//! - [`generate`]: the backend seam and a mock implementation.

pub mod cli;
pub mod commands;
pub mod error;
pub mod exit_codes;
pub mod field;
pub mod form;
pub mod generate;
pub mod prompt;
pub mod settings;
pub mod wizard;
