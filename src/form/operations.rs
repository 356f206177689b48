//! Pure edit operations on a form schema.
//!
//! Every operation returns a new [`FormSchema`] value. Invalid inputs
//! (unknown id, out-of-range index, form at capacity) return the schema
//! unchanged; nothing here can fail.

use super::{FormSchema, MAX_FIELDS};
use crate::field::{FieldId, FieldKind, FieldPatch, FieldSchema};
use serde::{Deserialize, Serialize};

/// Direction for a neighbor-swap reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveDirection {
    /// Swap with the previous field.
    Up,
    /// Swap with the next field.
    Down,
}

impl FormSchema {
    /// Append a new field of the given kind.
    ///
    /// Returns the updated schema and the id of the created field so the
    /// caller can route focus to its editor. At the [`MAX_FIELDS`] cap
    /// the schema is returned unchanged and the id is `None`.
    pub fn add(&self, kind: FieldKind) -> (Self, Option<FieldId>) {
        if self.fields.len() >= MAX_FIELDS {
            return (self.clone(), None);
        }

        let id = FieldId(self.next_id);
        let mut next = self.clone();
        next.next_id += 1;
        next.fields.push(FieldSchema::new(id, kind));
        (next, Some(id))
    }

    /// Apply a partial update to the field matching `id`.
    ///
    /// Never alters the field's `id` or `kind`. An options patch is
    /// ignored for kinds without options, preserving the options
    /// invariant. Unknown ids are a no-op.
    pub fn update(&self, id: FieldId, patch: FieldPatch) -> Self {
        let mut next = self.clone();
        if let Some(field) = next.fields.iter_mut().find(|f| f.id == id) {
            if let Some(label) = patch.label {
                field.label = label;
            }
            if let Some(hint) = patch.placeholder_hint {
                field.placeholder_hint = Some(hint);
            }
            if let Some(value) = patch.default_value {
                field.default_value = Some(value);
            }
            if let Some(options) = patch.options {
                if field.kind.has_options() {
                    field.options = Some(options);
                }
            }
        }
        next
    }

    /// Remove the field matching `id`. Unknown ids are a no-op; other
    /// fields keep their ids.
    pub fn remove(&self, id: FieldId) -> Self {
        let mut next = self.clone();
        next.fields.retain(|f| f.id != id);
        next
    }

    /// Swap the field at `index` with its neighbor in `direction`.
    ///
    /// Boundary-safe: moving the first field up, the last field down, or
    /// an out-of-range index is a no-op.
    pub fn move_field(&self, index: usize, direction: MoveDirection) -> Self {
        let neighbor = match direction {
            MoveDirection::Up => index.checked_sub(1),
            MoveDirection::Down => index.checked_add(1),
        };

        match neighbor {
            Some(n) if index < self.fields.len() && n < self.fields.len() => {
                let mut next = self.clone();
                next.fields.swap(index, n);
                next
            }
            _ => self.clone(),
        }
    }

    /// Append an empty option row to the field matching `id`.
    ///
    /// No-op if the field is absent or its kind has no options.
    pub fn append_option(&self, id: FieldId) -> Self {
        let mut next = self.clone();
        if let Some(field) = next.fields.iter_mut().find(|f| f.id == id) {
            if let Some(options) = field.options.as_mut() {
                options.push(String::new());
            }
        }
        next
    }

    /// Set the option at `idx` on the field matching `id`.
    ///
    /// No-op if the field is absent, has no options, or `idx` is out of
    /// range.
    pub fn update_option(&self, id: FieldId, idx: usize, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(field) = next.fields.iter_mut().find(|f| f.id == id) {
            if let Some(options) = field.options.as_mut() {
                if let Some(slot) = options.get_mut(idx) {
                    *slot = value.into();
                }
            }
        }
        next
    }
}
