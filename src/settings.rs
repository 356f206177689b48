//! Generation settings authored in the ConfigureSettings step.
//!
//! A flat record consumed opaquely by the generation backend. Fields are
//! independently mutable with no cross-field invariants; setters clamp
//! values into their provider-documented domains so out-of-range input
//! degrades gracefully instead of erroring.

use serde::{Deserialize, Serialize};

/// Supported model identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Model {
    /// GPT 3.5 Turbo (default).
    #[default]
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    /// GPT 4.
    #[serde(rename = "gpt-4")]
    Gpt4,
    /// GPT 4 Turbo.
    #[serde(rename = "gpt-4-turbo")]
    Gpt4Turbo,
}

impl Model {
    /// All supported models, in menu order.
    pub const ALL: [Model; 3] = [Model::Gpt35Turbo, Model::Gpt4, Model::Gpt4Turbo];

    /// The provider identifier string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Gpt35Turbo => "gpt-3.5-turbo",
            Model::Gpt4 => "gpt-4",
            Model::Gpt4Turbo => "gpt-4-turbo",
        }
    }

    /// Parse a model from its provider identifier.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "gpt-3.5-turbo" => Some(Self::Gpt35Turbo),
            "gpt-4" => Some(Self::Gpt4),
            "gpt-4-turbo" => Some(Self::Gpt4Turbo),
            _ => None,
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sampling parameters for the generation backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Model identifier.
    pub model: Model,

    /// Sampling temperature, clamped to [0, 2].
    pub temperature: f64,

    /// Nucleus sampling probability mass, clamped to [0, 1].
    pub top_p: f64,

    /// Frequency penalty, clamped to [0, 2].
    pub frequency_penalty: f64,

    /// Presence penalty, clamped to [0, 2].
    pub presence_penalty: f64,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            model: Model::default(),
            temperature: 1.0,
            top_p: 1.0,
            frequency_penalty: 0.0,
            presence_penalty: 0.0,
        }
    }
}

impl GenerationSettings {
    /// Set the model identifier.
    pub fn set_model(&mut self, model: Model) {
        self.model = model;
    }

    /// Set the temperature, clamped to [0, 2].
    pub fn set_temperature(&mut self, value: f64) {
        self.temperature = value.clamp(0.0, 2.0);
    }

    /// Set top-p, clamped to [0, 1].
    pub fn set_top_p(&mut self, value: f64) {
        self.top_p = value.clamp(0.0, 1.0);
    }

    /// Set the frequency penalty, clamped to [0, 2].
    pub fn set_frequency_penalty(&mut self, value: f64) {
        self.frequency_penalty = value.clamp(0.0, 2.0);
    }

    /// Set the presence penalty, clamped to [0, 2].
    pub fn set_presence_penalty(&mut self, value: f64) {
        self.presence_penalty = value.clamp(0.0, 2.0);
    }
}
