//! Form schema model for promptform.
//!
//! A [`FormSchema`] is the ordered collection of fields an app author has
//! built so far. Field order is meaningful: it is the render order of the
//! final input form and the order placeholder badges appear in the
//! template editor.
//!
//! All edits are expressed as pure transformations: operations take the
//! schema by reference and return a new value, so every edit is a
//! discrete, replayable transition and invalid edits degrade to no-ops
//! instead of faults (see `operations`).

use crate::field::{FieldId, FieldSchema};
use serde::{Deserialize, Serialize};

mod operations;
#[cfg(test)]
mod tests;

pub use operations::MoveDirection;

/// Hard cap on the number of fields in one form.
pub const MAX_FIELDS: usize = 5;

/// An ordered collection of user-defined fields with stable identities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    /// The fields, in render order.
    fields: Vec<FieldSchema>,

    /// Next id to assign; incremented on every successful add so ids are
    /// never reused, even after deletions.
    next_id: u64,
}

impl FormSchema {
    /// Create an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// The fields in render order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Number of fields currently in the form.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the form has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether the form is at the [`MAX_FIELDS`] cap.
    pub fn is_full(&self) -> bool {
        self.fields.len() >= MAX_FIELDS
    }

    /// Look up a field by id.
    pub fn get(&self, id: FieldId) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Position of a field in render order.
    pub fn position(&self, id: FieldId) -> Option<usize> {
        self.fields.iter().position(|f| f.id == id)
    }
}
