//! Authored prompt template text.

use super::placeholder::token_for;
use crate::form::FormSchema;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Advisory character limit for a prompt template.
///
/// The reference experience shows `count / 700` in the editor; the model
/// never blocks or truncates text beyond the limit.
pub const CHAR_LIMIT: usize = 700;

/// Well-formed token spans: brace-delimited, non-empty, no nesting.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^{}]+\}").expect("Invalid token regex"));

/// The prompt template authored in the ConfigurePrompt step.
///
/// A plain string with zero or more embedded placeholder tokens.
/// Validity against a [`FormSchema`] is a soft constraint: a template
/// referencing unknown tokens can still be saved and rendered; the
/// unknown tokens simply stay literal (see [`unknown_tokens`]).
///
/// [`unknown_tokens`]: PromptTemplate::unknown_tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    /// Create an empty template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the template text. Never truncates or rejects.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The template text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Character count, as shown against [`CHAR_LIMIT`] in the editor.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the template has no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Characters left before the advisory limit; zero once exceeded.
    pub fn remaining(&self) -> usize {
        CHAR_LIMIT.saturating_sub(self.char_count())
    }

    /// Whether the text exceeds the advisory limit.
    pub fn over_limit(&self) -> bool {
        self.char_count() > CHAR_LIMIT
    }

    /// All well-formed token spans in the text, in order of appearance.
    pub fn tokens(&self) -> Vec<String> {
        TOKEN
            .find_iter(&self.text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Tokens with no matching field in `schema`.
    ///
    /// A soft, observable condition the caller may surface as a warning;
    /// rendering leaves these tokens literal rather than failing.
    pub fn unknown_tokens(&self, schema: &FormSchema) -> Vec<String> {
        let known: Vec<String> = schema
            .fields()
            .iter()
            .map(|f| token_for(&f.label))
            .collect();

        self.tokens()
            .into_iter()
            .filter(|t| !known.contains(t))
            .collect()
    }
}

impl std::fmt::Display for PromptTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
