//! Prompt templating subsystem.
//!
//! This module provides:
//!
//! - **Placeholder**: the codec deriving `{snake_case_token}` placeholders
//!   from field labels and inserting them into templates
//! - **Template**: the authored prompt text with soft validation against
//!   a form schema
//! - **Render**: substitution of concrete field values into a template
//!
//! # Placeholder Syntax
//!
//! Templates reference fields by token:
//!
//! ```text
//! Act as a support specialist at {your_company_name}.
//! Write a reply to {customer_name} about {brief_description_of_the_issue}.
//! ```
//!
//! Tokens are derived from field labels, not stable ids, so renaming a
//! field changes its token. The derivation lives entirely in
//! `placeholder` so an id-keyed scheme would be a local change.

mod placeholder;
mod render;
mod template;

pub use placeholder::{insert, token_for};
pub use render::render;
pub use template::{CHAR_LIMIT, PromptTemplate};
