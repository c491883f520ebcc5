//! Property tests for the ordered field-list editor

use proptest::prelude::*;
use recipeshare_model::ListEditor;

#[derive(Debug, Clone)]
enum Op {
    Append,
    UpdateAt(usize, String),
    RemoveAt(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Append),
        (0usize..8, "[a-z ]{0,6}").prop_map(|(index, value)| Op::UpdateAt(index, value)),
        (0usize..8).prop_map(Op::RemoveAt),
    ]
}

/// Straight-line mirror of the documented editor semantics.
fn apply_mirror(slots: &mut Vec<String>, op: &Op) {
    match op {
        Op::Append => slots.push(String::new()),
        Op::UpdateAt(index, value) => {
            if *index < slots.len() {
                slots[*index] = value.clone();
            }
        }
        Op::RemoveAt(index) => {
            if slots.len() > 1 && *index < slots.len() {
                slots.remove(*index);
            }
        }
    }
}

proptest! {
    // Any operation sequence: length never drops below 1, slots match the
    // mirror after every step (which pins relative order of untouched
    // elements), and the revision ticks once per operation.
    #[test]
    fn editor_tracks_mirror_semantics(ops in proptest::collection::vec(op_strategy(), 0..40)) {
        let mut editor: ListEditor<String> = ListEditor::new();
        let mut mirror = vec![String::new()];

        for (step, op) in ops.iter().enumerate() {
            match op {
                Op::Append => editor.append(),
                Op::UpdateAt(index, value) => editor.update_at(*index, value.clone()),
                Op::RemoveAt(index) => editor.remove_at(*index),
            }
            apply_mirror(&mut mirror, op);

            prop_assert!(editor.len() >= 1);
            prop_assert_eq!(editor.slots(), mirror.as_slice());
            prop_assert_eq!(editor.revision(), (step as u64) + 1);
        }
    }

    #[test]
    fn filled_drops_blanks_and_preserves_order(
        values in proptest::collection::vec("[a-z]{0,4}| {0,3}", 1..12)
    ) {
        let editor = ListEditor::with_values(values.clone());
        let filled = editor.filled();

        prop_assert!(filled.iter().all(|value| !value.trim().is_empty()));
        let expected: Vec<String> = values
            .into_iter()
            .filter(|value| !value.trim().is_empty())
            .collect();
        prop_assert_eq!(filled, expected);
    }
}

#[test]
fn remove_at_on_single_slot_editor_is_noop() {
    let mut editor = ListEditor::with_values(vec!["only".to_string()]);
    editor.remove_at(0);
    assert_eq!(editor.len(), 1);
    assert_eq!(editor.slots(), &["only".to_string()]);
}
