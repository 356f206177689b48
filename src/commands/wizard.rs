//! Implementation of the `promptform wizard` command.
//!
//! An interactive authoring session that drives [`WizardState`] through
//! its five steps with a small line-based command language, then renders
//! the prompt with the entered values and runs the generation backend.
//!
//! The session loop is parameterized over `BufRead`/`Write` so tests can
//! feed it a scripted transcript without a terminal.

use crate::cli::WizardArgs;
use crate::error::{PromptformError, Result};
use crate::field::{FieldId, FieldKind, FieldPatch};
use crate::form::{MAX_FIELDS, MoveDirection};
use crate::generate::{Generator, MockGenerator};
use crate::prompt::{CHAR_LIMIT, token_for};
use crate::settings::Model;
use crate::wizard::{Step, WizardState};
use std::collections::HashMap;
use std::io::{BufRead, Write};

/// Execute the `promptform wizard` command.
pub fn cmd_wizard(args: WizardArgs) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();

    run_session(&mut input, &mut output, &MockGenerator, args.summary)
}

/// Run one authoring session from `input` to `output`.
pub fn run_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    generator: &dyn Generator,
    show_summary: bool,
) -> Result<()> {
    let mut wizard = WizardState::new();

    loop {
        let step = wizard.step();
        header(output, step)?;
        match step {
            Step::NameApp => step_name(input, output, &mut wizard)?,
            Step::BuildForm => step_form(input, output, &mut wizard)?,
            Step::ConfigurePrompt => step_prompt(input, output, &mut wizard)?,
            Step::ConfigureSettings => step_settings(input, output, &mut wizard)?,
            Step::Preview => {
                return step_preview(input, output, &wizard, generator, show_summary);
            }
        }
    }
}

fn header<W: Write>(output: &mut W, step: Step) -> Result<()> {
    writeln!(output).map_err(io_err)?;
    writeln!(output, "== {}. {} ==", step.number(), step.title()).map_err(io_err)
}

fn step_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    wizard: &mut WizardState,
) -> Result<()> {
    loop {
        let line = prompt_line(input, output, "Name of the app: ")?;
        wizard.set_app_name(line);
        if wizard.can_advance() {
            wizard.advance();
            return Ok(());
        }
        writeln!(output, "An app name is required.").map_err(io_err)?;
    }
}

fn step_form<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    wizard: &mut WizardState,
) -> Result<()> {
    writeln!(
        output,
        "Commands: add <kind> | label <n> <text> | default <n> <text> | hint <n> <text>"
    )
    .map_err(io_err)?;
    writeln!(
        output,
        "          addopt <n> | opt <n> <i> <text> | up <n> | down <n> | rm <n> | done"
    )
    .map_err(io_err)?;
    writeln!(output, "Kinds: text paragraph dropdown radio checkbox").map_err(io_err)?;

    loop {
        list_fields(output, wizard)?;
        let line = prompt_line(input, output, "form> ")?;
        let (cmd, rest) = split_command(&line);

        match cmd {
            "" => {}
            "add" => match FieldKind::from_str(rest) {
                Some(kind) => {
                    if wizard.add_field(kind).is_none() {
                        writeln!(output, "Element limit reached ({0}/{0}).", MAX_FIELDS)
                            .map_err(io_err)?;
                    }
                }
                None => writeln!(output, "Unknown field kind '{}'.", rest).map_err(io_err)?,
            },
            "label" | "default" | "hint" => {
                let Some((id, text)) = indexed_arg(wizard, rest) else {
                    writeln!(output, "No such field.").map_err(io_err)?;
                    continue;
                };
                let patch = match cmd {
                    "label" => FieldPatch::label(text),
                    "default" => FieldPatch::default_value(text),
                    _ => FieldPatch::placeholder_hint(text),
                };
                wizard.update_field(id, patch);
            }
            "addopt" => match field_id_at(wizard, rest) {
                Some(id) => wizard.append_option(id),
                None => writeln!(output, "No such field.").map_err(io_err)?,
            },
            "opt" => {
                let Some((id, rest)) = indexed_arg(wizard, rest) else {
                    writeln!(output, "No such field.").map_err(io_err)?;
                    continue;
                };
                match rest.split_once(' ') {
                    Some((i, text)) => match i.parse::<usize>() {
                        Ok(i) if i >= 1 => wizard.update_option(id, i - 1, text),
                        _ => writeln!(output, "Usage: opt <n> <i> <text>").map_err(io_err)?,
                    },
                    None => writeln!(output, "Usage: opt <n> <i> <text>").map_err(io_err)?,
                }
            }
            "up" | "down" => match rest.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    let direction = if cmd == "up" {
                        MoveDirection::Up
                    } else {
                        MoveDirection::Down
                    };
                    wizard.move_field(n - 1, direction);
                }
                _ => writeln!(output, "Usage: {} <n>", cmd).map_err(io_err)?,
            },
            "rm" => match field_id_at(wizard, rest) {
                Some(id) => wizard.remove_field(id),
                None => writeln!(output, "No such field.").map_err(io_err)?,
            },
            "done" => {
                if wizard.can_advance() {
                    wizard.advance();
                    return Ok(());
                }
                writeln!(output, "Add at least one field before continuing.").map_err(io_err)?;
            }
            _ => writeln!(output, "Unknown command '{}'.", cmd).map_err(io_err)?,
        }
    }
}

fn step_prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    wizard: &mut WizardState,
) -> Result<()> {
    writeln!(output, "Commands: insert <n> | text <template> | done").map_err(io_err)?;

    loop {
        writeln!(output, "Elements:").map_err(io_err)?;
        for (i, field) in wizard.form().fields().iter().enumerate() {
            writeln!(
                output,
                "  {}. {} -> {}",
                i + 1,
                display_label(&field.label),
                token_for(&field.label)
            )
            .map_err(io_err)?;
        }
        writeln!(
            output,
            "Your prompt ({} / {}):",
            wizard.template().char_count(),
            CHAR_LIMIT
        )
        .map_err(io_err)?;
        writeln!(output, "  {}", wizard.template()).map_err(io_err)?;

        let line = prompt_line(input, output, "prompt> ")?;
        let (cmd, rest) = split_command(&line);

        match cmd {
            "" => {}
            "insert" => match field_id_at(wizard, rest) {
                Some(id) => wizard.insert_placeholder(id),
                None => writeln!(output, "No such field.").map_err(io_err)?,
            },
            "text" => wizard.set_template(rest),
            "done" => {
                if wizard.can_advance() {
                    wizard.advance();
                    return Ok(());
                }
                writeln!(output, "Write a prompt before continuing.").map_err(io_err)?;
            }
            _ => writeln!(output, "Unknown command '{}'.", cmd).map_err(io_err)?,
        }
    }
}

fn step_settings<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    wizard: &mut WizardState,
) -> Result<()> {
    writeln!(
        output,
        "Commands: model <id> | temperature <v> | top_p <v> | frequency <v> | presence <v> | done"
    )
    .map_err(io_err)?;

    loop {
        let settings = wizard.settings();
        writeln!(output, "  Model:             {}", settings.model).map_err(io_err)?;
        writeln!(output, "  Temperature:       {}", settings.temperature).map_err(io_err)?;
        writeln!(output, "  Top P:             {}", settings.top_p).map_err(io_err)?;
        writeln!(output, "  Frequency penalty: {}", settings.frequency_penalty).map_err(io_err)?;
        writeln!(output, "  Presence penalty:  {}", settings.presence_penalty).map_err(io_err)?;

        let line = prompt_line(input, output, "settings> ")?;
        let (cmd, rest) = split_command(&line);

        match cmd {
            "" => {}
            "model" => match Model::from_str(rest) {
                Some(model) => wizard.settings_mut().set_model(model),
                None => {
                    let choices: Vec<&str> = Model::ALL.iter().map(|m| m.as_str()).collect();
                    writeln!(output, "Unknown model. Choices: {}", choices.join(", "))
                        .map_err(io_err)?;
                }
            },
            "temperature" | "top_p" | "frequency" | "presence" => match rest.parse::<f64>() {
                Ok(value) => {
                    let settings = wizard.settings_mut();
                    match cmd {
                        "temperature" => settings.set_temperature(value),
                        "top_p" => settings.set_top_p(value),
                        "frequency" => settings.set_frequency_penalty(value),
                        _ => settings.set_presence_penalty(value),
                    }
                }
                Err(_) => writeln!(output, "Usage: {} <number>", cmd).map_err(io_err)?,
            },
            "done" => {
                wizard.advance();
                return Ok(());
            }
            _ => writeln!(output, "Unknown command '{}'.", cmd).map_err(io_err)?,
        }
    }
}

fn step_preview<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    wizard: &WizardState,
    generator: &dyn Generator,
    show_summary: bool,
) -> Result<()> {
    writeln!(output, "App: {}", wizard.app_name()).map_err(io_err)?;

    if show_summary {
        let summary = serde_json::to_string_pretty(&wizard.summary())
            .map_err(|e| PromptformError::UserError(format!("failed to serialize summary: {}", e)))?;
        writeln!(output, "{}", summary).map_err(io_err)?;
    }

    let unknown = wizard.template().unknown_tokens(wizard.form());
    if !unknown.is_empty() {
        writeln!(
            output,
            "Warning: no matching field for {}",
            unknown.join(", ")
        )
        .map_err(io_err)?;
    }

    // Collect values keyed by field label. EOF stops collection early;
    // unfilled fields fall back to their defaults at render time.
    let fields: Vec<(String, Option<String>)> = wizard
        .form()
        .fields()
        .iter()
        .map(|f| (f.label.clone(), f.default_value.clone()))
        .collect();

    let mut values: HashMap<String, String> = HashMap::new();
    for (label, default_value) in fields {
        let prompt = match &default_value {
            Some(d) => format!("{} [{}]: ", display_label(&label), d),
            None => format!("{}: ", display_label(&label)),
        };
        write!(output, "{}", prompt).map_err(io_err)?;
        output.flush().map_err(io_err)?;

        let mut line = String::new();
        if input.read_line(&mut line).map_err(io_err)? == 0 {
            break;
        }
        let value = line.trim_end_matches(['\r', '\n']);
        if !value.is_empty() {
            values.insert(label, value.to_string());
        }
    }

    writeln!(output).map_err(io_err)?;
    writeln!(output, "Output:").map_err(io_err)?;
    let text = wizard.run(generator, &values)?;
    writeln!(output, "{}", text).map_err(io_err)?;

    Ok(())
}

/// Print the current fields with 1-based positions and the element count.
fn list_fields<W: Write>(output: &mut W, wizard: &WizardState) -> Result<()> {
    writeln!(
        output,
        "Fields ({}/{}):",
        wizard.form().len(),
        MAX_FIELDS
    )
    .map_err(io_err)?;
    for (i, field) in wizard.form().fields().iter().enumerate() {
        writeln!(
            output,
            "  {}. {} ({})",
            i + 1,
            display_label(&field.label),
            field.kind.title()
        )
        .map_err(io_err)?;
        if let Some(options) = &field.options {
            for (j, option) in options.iter().enumerate() {
                writeln!(output, "       option {}: {}", j + 1, option).map_err(io_err)?;
            }
        }
    }
    Ok(())
}

/// Write `prompt`, read one line, and strip the trailing newline.
/// EOF ends the session with a user error.
fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt).map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let mut line = String::new();
    if input.read_line(&mut line).map_err(io_err)? == 0 {
        return Err(PromptformError::UserError(
            "session ended before the app was completed".to_string(),
        ));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Split a command line into its first word and the remainder.
fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line.trim(), ""),
    }
}

/// Resolve a 1-based display position to a field id.
fn field_id_at(wizard: &WizardState, arg: &str) -> Option<FieldId> {
    let n = arg.parse::<usize>().ok().filter(|&n| n >= 1)?;
    wizard.form().fields().get(n - 1).map(|f| f.id)
}

/// Parse `"<n> <text>"` into the field id at position n and the text.
fn indexed_arg<'a>(wizard: &WizardState, rest: &'a str) -> Option<(FieldId, &'a str)> {
    let (n, text) = rest.split_once(' ')?;
    let id = field_id_at(wizard, n)?;
    Some((id, text))
}

fn display_label(label: &str) -> &str {
    if label.is_empty() { "Untitled Field" } else { label }
}

fn io_err(e: std::io::Error) -> PromptformError {
    PromptformError::UserError(format!("terminal i/o failed: {}", e))
}
