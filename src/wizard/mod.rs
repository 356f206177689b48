//! Authoring wizard state machine.
//!
//! The wizard sequences app authoring through five steps:
//!
//! ```text
//! NameApp -> BuildForm -> ConfigurePrompt -> ConfigureSettings -> Preview
//! ```
//!
//! The step is a rendering cursor, not an access gate: jumping to an
//! arbitrary step is allowed and never clears any authored state. The
//! "Next" guards of the reference experience are advisory presentation
//! policy exposed via [`WizardState::can_advance`]; the machine itself
//! permits every forward transition unconditionally.
//!
//! [`WizardState`] exclusively owns the four pieces of authored state
//! (app name, form schema, prompt template, generation settings) and is
//! the only place they are mutated, which keeps every transition unit
//! testable without a rendering environment.

use crate::form::FormSchema;
use crate::prompt::PromptTemplate;
use crate::settings::GenerationSettings;
use serde::{Deserialize, Serialize};

mod editing;
mod preview;
#[cfg(test)]
mod tests;

/// The five authoring steps, in their strict linear order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Name the app.
    NameApp,
    /// Build the input form.
    BuildForm,
    /// Author the prompt template.
    ConfigurePrompt,
    /// Tune generation settings.
    ConfigureSettings,
    /// Fill the form and run generation. Terminal.
    Preview,
}

impl Step {
    /// All steps, in order.
    pub const ALL: [Step; 5] = [
        Step::NameApp,
        Step::BuildForm,
        Step::ConfigurePrompt,
        Step::ConfigureSettings,
        Step::Preview,
    ];

    /// The following step; [`Step::Preview`] is terminal and returns
    /// itself.
    pub fn next(self) -> Self {
        match self {
            Step::NameApp => Step::BuildForm,
            Step::BuildForm => Step::ConfigurePrompt,
            Step::ConfigurePrompt => Step::ConfigureSettings,
            Step::ConfigureSettings => Step::Preview,
            Step::Preview => Step::Preview,
        }
    }

    /// 1-based position for display ("3. Configure Prompt").
    pub fn number(&self) -> usize {
        Step::ALL.iter().position(|s| s == self).expect("step in ALL") + 1
    }

    /// Human-readable step title.
    pub fn title(&self) -> &'static str {
        match self {
            Step::NameApp => "Name App",
            Step::BuildForm => "Build Form",
            Step::ConfigurePrompt => "Configure Prompt",
            Step::ConfigureSettings => "Settings",
            Step::Preview => "Preview",
        }
    }
}

impl Default for Step {
    fn default() -> Self {
        Step::NameApp
    }
}

/// One authoring session's complete state.
///
/// Exclusively owned by the session; never persisted or shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    step: Step,
    app_name: String,
    form: FormSchema,
    template: PromptTemplate,
    settings: GenerationSettings,
}

impl WizardState {
    /// Start a fresh session at the NameApp step with an empty form,
    /// empty template, and default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently active step.
    pub fn step(&self) -> Step {
        self.step
    }

    /// The authored app name.
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The authored form schema.
    pub fn form(&self) -> &FormSchema {
        &self.form
    }

    /// The authored prompt template.
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// The authored generation settings.
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Mutable access to generation settings; all mutation goes through
    /// the record's clamping setters.
    pub fn settings_mut(&mut self) -> &mut GenerationSettings {
        &mut self.settings
    }

    /// Advisory guard for enabling the "Next" action at the current step.
    ///
    /// Presentation policy only; [`advance`](Self::advance) does not
    /// consult it.
    pub fn can_advance(&self) -> bool {
        match self.step {
            Step::NameApp => !self.app_name.is_empty(),
            Step::BuildForm => !self.form.is_empty(),
            Step::ConfigurePrompt => !self.template.is_empty(),
            Step::ConfigureSettings => true,
            Step::Preview => false,
        }
    }

    /// Move forward exactly one step, saturating at Preview.
    /// Unconditional; guards are the presentation layer's concern.
    pub fn advance(&mut self) {
        self.step = self.step.next();
    }

    /// Jump directly to an arbitrary step.
    ///
    /// Switching steps never clears the app name, form, template, or
    /// settings.
    pub fn goto(&mut self, step: Step) {
        self.step = step;
    }
}
