//! Prompt rendering by placeholder substitution.
//!
//! Rendering is best-effort and total: every token that maps to a current
//! field is replaced everywhere it occurs; tokens with no matching field
//! are left literal. Templates may legitimately reference fields that
//! were deleted after authoring, so an unknown token is an observable
//! condition, never an error.

use super::placeholder::token_for;
use crate::form::FormSchema;
use std::collections::HashMap;

/// Render a final prompt from a template, a form schema, and the values
/// entered at run time.
///
/// For every field in `schema` the canonical token is derived and all of
/// its literal occurrences in `template` are replaced with, in order of
/// preference: `values[label]`, the field's `default_value`, or the
/// empty string.
///
/// Two fields whose labels collide on the same token are resolved with a
/// last-matching-field-wins policy: the field latest in render order
/// supplies the substitution.
///
/// The degenerate token `{}` (empty label) never matches a field and
/// stays literal.
///
/// Replacement proceeds in field order. A substituted value that itself
/// contains a later field's token is expanded by that later
/// replacement; the output is a pure function of template, schema, and
/// values.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use promptform::field::{FieldKind, FieldPatch};
/// use promptform::form::FormSchema;
/// use promptform::prompt::render;
///
/// let (form, id) = FormSchema::new().add(FieldKind::ShortText);
/// let form = form.update(id.unwrap(), FieldPatch::label("Customer name"));
///
/// let mut values = HashMap::new();
/// values.insert("Customer name".to_string(), "Ana".to_string());
///
/// let out = render("Hello {customer_name}!", &form, &values);
/// assert_eq!(out, "Hello Ana!");
/// ```
pub fn render(template: &str, schema: &FormSchema, values: &HashMap<String, String>) -> String {
    // Ordered token -> substitution list. Field order fixes the
    // replacement order: substituted values may themselves contain
    // token-shaped text, so the order must be deterministic. On a token
    // collision the earlier entry is dropped (last matching field wins).
    let mut substitutions: Vec<(String, String)> = Vec::new();

    for field in schema.fields() {
        let token = token_for(&field.label);
        if token == "{}" {
            continue;
        }

        let value = values
            .get(&field.label)
            .cloned()
            .or_else(|| field.default_value.clone())
            .unwrap_or_default();

        substitutions.retain(|(t, _)| *t != token);
        substitutions.push((token, value));
    }

    let mut result = template.to_string();
    for (token, value) in &substitutions {
        result = result.replace(token, value);
    }
    result
}
