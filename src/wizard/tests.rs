//! Tests for the wizard state machine.

use crate::field::{FieldKind, FieldPatch};
use crate::form::{MAX_FIELDS, MoveDirection};
use crate::generate::{GenerationError, Generator, MockGenerator};
use crate::settings::{GenerationSettings, Model};
use crate::wizard::{Step, WizardState};
use std::collections::HashMap;

/// A backend stand-in that always fails.
struct FailingGenerator;

impl Generator for FailingGenerator {
    fn generate(
        &self,
        _prompt: &str,
        _settings: &GenerationSettings,
    ) -> Result<String, GenerationError> {
        Err(GenerationError::provider("backend unavailable"))
    }
}

/// An authored session: one short-text field "Customer name" and a
/// greeting template, parked at Preview.
fn authored_session() -> WizardState {
    let mut wizard = WizardState::new();
    wizard.set_app_name("Customer care email generator");

    let id = wizard.add_field(FieldKind::ShortText).unwrap();
    wizard.update_field(id, FieldPatch::label("Customer name"));

    wizard.set_template("Hello {customer_name}!");
    wizard.goto(Step::Preview);
    wizard
}

fn values_of(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Step navigation
// ============================================================================

#[test]
fn new_session_starts_at_name_app_with_empty_state() {
    let wizard = WizardState::new();
    assert_eq!(wizard.step(), Step::NameApp);
    assert!(wizard.app_name().is_empty());
    assert!(wizard.form().is_empty());
    assert!(wizard.template().is_empty());
    assert_eq!(*wizard.settings(), GenerationSettings::default());
}

#[test]
fn advance_walks_the_strict_linear_order() {
    let mut wizard = WizardState::new();
    let mut visited = vec![wizard.step()];
    for _ in 0..4 {
        wizard.advance();
        visited.push(wizard.step());
    }
    assert_eq!(visited, Step::ALL);
}

#[test]
fn advance_saturates_at_preview() {
    let mut wizard = WizardState::new();
    wizard.goto(Step::Preview);
    wizard.advance();
    assert_eq!(wizard.step(), Step::Preview);
}

#[test]
fn advance_is_unconditional_even_when_guard_fails() {
    // The machine permits the transition; the guard is presentation
    // policy.
    let mut wizard = WizardState::new();
    assert!(!wizard.can_advance());
    wizard.advance();
    assert_eq!(wizard.step(), Step::BuildForm);
}

#[test]
fn goto_jumps_anywhere_without_clearing_state() {
    let mut wizard = authored_session();
    let name = wizard.app_name().to_string();
    let form = wizard.form().clone();
    let template = wizard.template().clone();
    let settings = wizard.settings().clone();

    for step in Step::ALL {
        wizard.goto(step);
        assert_eq!(wizard.step(), step);
        assert_eq!(wizard.app_name(), name);
        assert_eq!(*wizard.form(), form);
        assert_eq!(*wizard.template(), template);
        assert_eq!(*wizard.settings(), settings);
    }
}

#[test]
fn step_numbers_and_titles() {
    assert_eq!(Step::NameApp.number(), 1);
    assert_eq!(Step::Preview.number(), 5);
    assert_eq!(Step::ConfigurePrompt.title(), "Configure Prompt");
}

// ============================================================================
// Advisory guards
// ============================================================================

#[test]
fn name_app_guard_requires_a_name() {
    let mut wizard = WizardState::new();
    assert!(!wizard.can_advance());
    wizard.set_app_name("My app");
    assert!(wizard.can_advance());
}

#[test]
fn build_form_guard_requires_a_field() {
    let mut wizard = WizardState::new();
    wizard.set_app_name("My app");
    wizard.advance();
    assert!(!wizard.can_advance());

    wizard.add_field(FieldKind::ShortText);
    assert!(wizard.can_advance());
}

#[test]
fn configure_prompt_guard_requires_template_text() {
    let mut wizard = WizardState::new();
    wizard.goto(Step::ConfigurePrompt);
    assert!(!wizard.can_advance());

    wizard.set_template("Write something nice.");
    assert!(wizard.can_advance());
}

#[test]
fn settings_step_always_passes_and_preview_is_terminal() {
    let mut wizard = WizardState::new();
    wizard.goto(Step::ConfigureSettings);
    assert!(wizard.can_advance());

    wizard.goto(Step::Preview);
    assert!(!wizard.can_advance());
}

// ============================================================================
// Editing passthroughs
// ============================================================================

#[test]
fn add_field_routes_focus_via_returned_id() {
    let mut wizard = WizardState::new();
    let id = wizard.add_field(FieldKind::Dropdown).unwrap();
    assert_eq!(wizard.form().get(id).unwrap().kind, FieldKind::Dropdown);
}

#[test]
fn add_field_beyond_cap_returns_none() {
    let mut wizard = WizardState::new();
    for _ in 0..MAX_FIELDS {
        assert!(wizard.add_field(FieldKind::ShortText).is_some());
    }
    assert!(wizard.add_field(FieldKind::ShortText).is_none());
    assert_eq!(wizard.form().len(), MAX_FIELDS);
}

#[test]
fn field_edits_flow_through_to_the_form() {
    let mut wizard = WizardState::new();
    let a = wizard.add_field(FieldKind::ShortText).unwrap();
    let b = wizard.add_field(FieldKind::Dropdown).unwrap();

    wizard.update_field(a, FieldPatch::label("Tone"));
    wizard.update_option(b, 0, "Formal");
    wizard.append_option(b);
    wizard.update_option(b, 1, "Casual");
    wizard.move_field(1, MoveDirection::Up);

    assert_eq!(wizard.form().position(b), Some(0));
    assert_eq!(wizard.form().get(a).unwrap().label, "Tone");
    assert_eq!(
        wizard.form().get(b).unwrap().options.as_deref(),
        Some(&["Formal".to_string(), "Casual".to_string()][..])
    );

    wizard.remove_field(a);
    assert_eq!(wizard.form().len(), 1);
}

#[test]
fn insert_placeholder_appends_the_field_token() {
    let mut wizard = WizardState::new();
    let id = wizard.add_field(FieldKind::ShortText).unwrap();
    wizard.update_field(id, FieldPatch::label("Customer name"));

    wizard.set_template("Hello");
    wizard.insert_placeholder(id);
    assert_eq!(wizard.template().as_str(), "Hello {customer_name}");
}

#[test]
fn insert_placeholder_for_removed_field_is_a_no_op() {
    let mut wizard = WizardState::new();
    let id = wizard.add_field(FieldKind::ShortText).unwrap();
    wizard.remove_field(id);

    wizard.set_template("Hello");
    wizard.insert_placeholder(id);
    assert_eq!(wizard.template().as_str(), "Hello");
}

#[test]
fn settings_edits_clamp_through_the_record() {
    let mut wizard = WizardState::new();
    wizard.settings_mut().set_model(Model::Gpt4);
    wizard.settings_mut().set_temperature(5.0);

    assert_eq!(wizard.settings().model, Model::Gpt4);
    assert_eq!(wizard.settings().temperature, 2.0);
}

// ============================================================================
// Preview and generation
// ============================================================================

#[test]
fn scenario_a_value_substitution() {
    let wizard = authored_session();
    let out = wizard.rendered_prompt(&values_of(&[("Customer name", "Ana")]));
    assert_eq!(out, "Hello Ana!");
}

#[test]
fn scenario_b_missing_value_renders_empty() {
    let wizard = authored_session();
    let out = wizard.rendered_prompt(&HashMap::new());
    assert_eq!(out, "Hello !");
}

#[test]
fn scenario_c_deleted_field_token_stays_literal() {
    let mut wizard = authored_session();
    let id = wizard.form().fields()[0].id;
    wizard.remove_field(id);

    let out = wizard.rendered_prompt(&values_of(&[("Customer name", "Ana")]));
    assert_eq!(out, "Hello {customer_name}!");
}

#[test]
fn run_feeds_the_rendered_prompt_to_the_generator() {
    let wizard = authored_session();
    let out = wizard
        .run(&MockGenerator, &values_of(&[("Customer name", "Ana")]))
        .unwrap();
    assert_eq!(out, "Generated content based on prompt:\n\nHello Ana!");
}

#[test]
fn failed_generation_leaves_authoring_state_untouched() {
    let wizard = authored_session();
    let snapshot = wizard.clone();

    let result = wizard.run(&FailingGenerator, &HashMap::new());
    assert!(matches!(result, Err(GenerationError::Provider { .. })));
    assert_eq!(wizard, snapshot);
}

#[test]
fn summary_reflects_all_authored_state() {
    let wizard = authored_session();
    let summary = wizard.summary();

    assert_eq!(summary["app_name"], "Customer care email generator");
    assert_eq!(summary["prompt_template"], "Hello {customer_name}!");
    assert_eq!(summary["fields"][0]["label"], "Customer name");
    assert_eq!(summary["settings"]["model"], "gpt-3.5-turbo");
}
