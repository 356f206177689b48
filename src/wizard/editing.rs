//! Editing passthroughs for the authored state.
//!
//! Each mutation delegates to the owned value's own pure operation and
//! replaces the owned value with the result, so the wizard inherits the
//! no-op behavior of invalid edits. Any step's editor may be used at any
//! time; the active step does not gate edits.

use super::WizardState;
use crate::field::{FieldId, FieldKind, FieldPatch};
use crate::form::MoveDirection;
use crate::prompt;

impl WizardState {
    /// Set the app name.
    pub fn set_app_name(&mut self, name: impl Into<String>) {
        self.app_name = name.into();
    }

    /// Add a field to the form.
    ///
    /// Returns the new field's id so the caller can focus its editor, or
    /// `None` when the form is at capacity (the form is unchanged).
    pub fn add_field(&mut self, kind: FieldKind) -> Option<FieldId> {
        let (form, id) = self.form.add(kind);
        self.form = form;
        id
    }

    /// Apply a partial update to a field. Unknown ids are a no-op.
    pub fn update_field(&mut self, id: FieldId, patch: FieldPatch) {
        self.form = self.form.update(id, patch);
    }

    /// Remove a field. Unknown ids are a no-op.
    pub fn remove_field(&mut self, id: FieldId) {
        self.form = self.form.remove(id);
    }

    /// Reorder a field by neighbor swap. Boundary-safe no-op.
    pub fn move_field(&mut self, index: usize, direction: MoveDirection) {
        self.form = self.form.move_field(index, direction);
    }

    /// Append an empty option row to a choice field.
    pub fn append_option(&mut self, id: FieldId) {
        self.form = self.form.append_option(id);
    }

    /// Set one option on a choice field.
    pub fn update_option(&mut self, id: FieldId, idx: usize, value: impl Into<String>) {
        self.form = self.form.update_option(id, idx, value);
    }

    /// Replace the prompt template text.
    pub fn set_template(&mut self, text: impl Into<String>) {
        self.template.set(text);
    }

    /// Append the placeholder token for the field matching `id` to the
    /// template, as the editor's badge click does. Unknown ids are a
    /// no-op.
    pub fn insert_placeholder(&mut self, id: FieldId) {
        if let Some(field) = self.form.get(id) {
            let text = prompt::insert(self.template.as_str(), &field.label);
            self.template.set(text);
        }
    }
}
