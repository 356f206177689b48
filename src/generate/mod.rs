//! Generation boundary.
//!
//! The core treats generation as an opaque collaborator: it hands over a
//! fully rendered prompt and the authored [`GenerationSettings`] and gets
//! back text or an error. Provider request/response shapes are not
//! inspected here. The one guarantee callers rely on is isolation: a
//! failed generation never touches authoring state.
//!
//! [`MockGenerator`] stands in for a real backend, echoing the rendered
//! prompt the way the reference implementation's stub endpoint does.

use crate::settings::GenerationSettings;
use thiserror::Error;

/// Error returned by the generation boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The backend failed (network, provider rejection, etc.).
    #[error("generation request failed: {reason}")]
    Provider {
        /// Additional context about the failure.
        reason: String,
    },
}

impl GenerationError {
    /// Convenience constructor for provider failures.
    pub fn provider(reason: impl Into<String>) -> Self {
        Self::Provider {
            reason: reason.into(),
        }
    }
}

/// The opaque generation collaborator.
///
/// Implementations receive the rendered prompt (placeholders already
/// substituted) and the authored settings. One request is in flight per
/// preview action; the core defines no cancellation semantics.
pub trait Generator {
    /// Generate text for the rendered prompt.
    fn generate(
        &self,
        prompt: &str,
        settings: &GenerationSettings,
    ) -> Result<String, GenerationError>;
}

/// A backend stand-in that echoes the rendered prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockGenerator;

impl Generator for MockGenerator {
    fn generate(
        &self,
        prompt: &str,
        _settings: &GenerationSettings,
    ) -> Result<String, GenerationError> {
        Ok(format!("Generated content based on prompt:\n\n{}", prompt))
    }
}
