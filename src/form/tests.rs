//! Tests for form schema operations.

use crate::field::{FieldId, FieldKind, FieldPatch};
use crate::form::{FormSchema, MAX_FIELDS, MoveDirection};

/// Build a form with `n` short-text fields labeled "Field 0".."Field n-1".
fn form_with_fields(n: usize) -> FormSchema {
    let mut form = FormSchema::new();
    for i in 0..n {
        let (next, id) = form.add(FieldKind::ShortText);
        let id = id.expect("add under cap must succeed");
        form = next.update(id, FieldPatch::label(format!("Field {}", i)));
    }
    form
}

#[test]
fn new_form_is_empty() {
    let form = FormSchema::new();
    assert!(form.is_empty());
    assert_eq!(form.len(), 0);
    assert!(!form.is_full());
}

#[test]
fn add_appends_with_fresh_id() {
    let form = FormSchema::new();
    let (form, a) = form.add(FieldKind::ShortText);
    let (form, b) = form.add(FieldKind::Dropdown);

    assert_eq!(form.len(), 2);
    assert_ne!(a.unwrap(), b.unwrap());
    assert_eq!(form.fields()[0].kind, FieldKind::ShortText);
    assert_eq!(form.fields()[1].kind, FieldKind::Dropdown);
}

#[test]
fn add_at_cap_is_a_no_op() {
    let form = form_with_fields(MAX_FIELDS);
    assert!(form.is_full());

    let (next, id) = form.add(FieldKind::Paragraph);
    assert!(id.is_none());
    assert_eq!(next, form);
    assert_eq!(next.len(), MAX_FIELDS);
}

#[test]
fn ids_are_never_reused_after_removal() {
    let form = FormSchema::new();
    let (form, a) = form.add(FieldKind::ShortText);
    let a = a.unwrap();

    let form = form.remove(a);
    assert!(form.is_empty());

    let (form, b) = form.add(FieldKind::ShortText);
    assert_ne!(b.unwrap(), a);
    assert_eq!(form.len(), 1);
}

#[test]
fn update_patches_label_without_touching_identity() {
    let form = FormSchema::new();
    let (form, id) = form.add(FieldKind::ShortText);
    let id = id.unwrap();

    let form = form.update(id, FieldPatch::label("Customer name"));
    let field = form.get(id).unwrap();
    assert_eq!(field.label, "Customer name");
    assert_eq!(field.id, id);
    assert_eq!(field.kind, FieldKind::ShortText);
}

#[test]
fn update_unknown_id_is_a_no_op() {
    let form = form_with_fields(2);
    let next = form.update(FieldId(999), FieldPatch::label("ghost"));
    assert_eq!(next, form);
}

#[test]
fn update_options_ignored_for_non_choice_kind() {
    let form = FormSchema::new();
    let (form, id) = form.add(FieldKind::ShortText);
    let id = id.unwrap();

    let patch = FieldPatch {
        options: Some(vec!["a".to_string()]),
        ..Default::default()
    };
    let form = form.update(id, patch);
    assert!(form.get(id).unwrap().options.is_none());
}

#[test]
fn remove_drops_only_the_matching_field() {
    let form = form_with_fields(3);
    let victim = form.fields()[1].id;
    let survivors: Vec<_> = [form.fields()[0].id, form.fields()[2].id].to_vec();

    let form = form.remove(victim);
    assert_eq!(form.len(), 2);
    assert!(form.get(victim).is_none());
    for id in survivors {
        assert!(form.get(id).is_some());
    }
}

#[test]
fn remove_unknown_id_is_a_no_op() {
    let form = form_with_fields(2);
    let next = form.remove(FieldId(999));
    assert_eq!(next, form);
}

#[test]
fn move_swaps_neighbors() {
    let form = form_with_fields(3);
    let labels = |f: &FormSchema| -> Vec<String> {
        f.fields().iter().map(|x| x.label.clone()).collect()
    };

    let down = form.move_field(0, MoveDirection::Down);
    assert_eq!(labels(&down), vec!["Field 1", "Field 0", "Field 2"]);

    let up = form.move_field(2, MoveDirection::Up);
    assert_eq!(labels(&up), vec!["Field 0", "Field 2", "Field 1"]);
}

#[test]
fn move_at_boundaries_is_a_no_op() {
    let form = form_with_fields(3);

    assert_eq!(form.move_field(0, MoveDirection::Up), form);
    assert_eq!(form.move_field(2, MoveDirection::Down), form);
    assert_eq!(form.move_field(10, MoveDirection::Up), form);
    assert_eq!(form.move_field(10, MoveDirection::Down), form);
}

#[test]
fn move_on_empty_form_is_a_no_op() {
    let form = FormSchema::new();
    assert_eq!(form.move_field(0, MoveDirection::Down), form);
}

#[test]
fn append_and_update_options() {
    let form = FormSchema::new();
    let (form, id) = form.add(FieldKind::Dropdown);
    let id = id.unwrap();

    // Seeded with one empty option.
    assert_eq!(form.get(id).unwrap().options.as_deref(), Some(&[String::new()][..]));

    let form = form.update_option(id, 0, "Small");
    let form = form.append_option(id);
    let form = form.update_option(id, 1, "Large");

    assert_eq!(
        form.get(id).unwrap().options.as_deref(),
        Some(&["Small".to_string(), "Large".to_string()][..])
    );
}

#[test]
fn option_edits_on_non_choice_field_are_no_ops() {
    let form = FormSchema::new();
    let (form, id) = form.add(FieldKind::Paragraph);
    let id = id.unwrap();

    let next = form.append_option(id);
    assert_eq!(next, form);
    let next = form.update_option(id, 0, "x");
    assert_eq!(next, form);
}

#[test]
fn update_option_out_of_range_is_a_no_op() {
    let form = FormSchema::new();
    let (form, id) = form.add(FieldKind::Dropdown);
    let id = id.unwrap();

    let next = form.update_option(id, 5, "x");
    assert_eq!(next, form);
}

#[test]
fn operations_do_not_mutate_the_original() {
    let form = form_with_fields(2);
    let snapshot = form.clone();

    let _ = form.add(FieldKind::ShortText);
    let _ = form.remove(form.fields()[0].id);
    let _ = form.move_field(0, MoveDirection::Down);
    let _ = form.update(form.fields()[1].id, FieldPatch::label("changed"));

    assert_eq!(form, snapshot);
}

#[test]
fn position_tracks_render_order() {
    let form = form_with_fields(3);
    let id = form.fields()[2].id;
    assert_eq!(form.position(id), Some(2));

    let form = form.move_field(2, MoveDirection::Up);
    assert_eq!(form.position(id), Some(1));
}
