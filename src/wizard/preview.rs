//! Preview-time rendering and generation.

use super::WizardState;
use crate::generate::{GenerationError, Generator};
use crate::prompt;
use serde_json::{Value, json};
use std::collections::HashMap;

impl WizardState {
    /// Render the final prompt from the current template, form, and the
    /// values entered in the preview form (keyed by field label).
    ///
    /// Total and best-effort: tokens referencing deleted fields stay
    /// literal.
    pub fn rendered_prompt(&self, values: &HashMap<String, String>) -> String {
        prompt::render(self.template.as_str(), &self.form, values)
    }

    /// Render the prompt and run it through the generation backend.
    ///
    /// Takes `&self`: a failed generation cannot mutate the app name,
    /// form, template, or settings.
    pub fn run(
        &self,
        generator: &dyn Generator,
        values: &HashMap<String, String>,
    ) -> Result<String, GenerationError> {
        let rendered = self.rendered_prompt(values);
        generator.generate(&rendered, &self.settings)
    }

    /// JSON summary of the authored app, shown at the Preview step.
    pub fn summary(&self) -> Value {
        json!({
            "app_name": self.app_name,
            "fields": self.form.fields(),
            "prompt_template": self.template,
            "settings": self.settings,
        })
    }
}
