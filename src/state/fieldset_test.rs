use serde_json::json;

use super::*;

fn booty_fieldset() -> FieldSetState {
    FieldSetState::new(
        "booty",
        "Booty",
        FieldSetKind::SplitSearch {
            collection: "resources",
            display_key: "name",
        },
        DEFAULT_TRIGGERS,
    )
}

// =============================================================
// Commit key gating
// =============================================================

#[test]
fn default_triggers_accept_enter_and_comma() {
    assert!(is_commit_key("Enter", DEFAULT_TRIGGERS));
    assert!(is_commit_key(",", DEFAULT_TRIGGERS));
}

#[test]
fn default_triggers_reject_other_keys() {
    assert!(!is_commit_key("a", DEFAULT_TRIGGERS));
    assert!(!is_commit_key("Tab", DEFAULT_TRIGGERS));
    assert!(!is_commit_key("Escape", DEFAULT_TRIGGERS));
}

#[test]
fn empty_triggers_accept_any_key() {
    assert!(is_commit_key("x", &[]));
    assert!(is_commit_key("Enter", &[]));
}

// =============================================================
// Entry lifecycle
// =============================================================

#[test]
fn push_literal_uses_text_as_payload() {
    let mut fieldset = booty_fieldset();
    fieldset.push_literal("Redjack");

    assert_eq!(fieldset.entries.len(), 1);
    assert_eq!(fieldset.entries[0].label, "Redjack");
    assert_eq!(
        fieldset.entries[0].payload_value().unwrap(),
        json!("Redjack")
    );
}

#[test]
fn push_document_labels_from_display_key() {
    let mut fieldset = booty_fieldset();
    let doc = json!({"name": "Quantanium", "sell": []});
    fieldset.push_document(&doc, "name");

    assert_eq!(fieldset.entries[0].label, "Quantanium");
    assert_eq!(fieldset.entries[0].payload_value().unwrap(), doc);
}

#[test]
fn push_quantified_wraps_payload_and_label() {
    let mut fieldset = booty_fieldset();
    let doc = json!({"name": "Quantanium"});
    fieldset.push_quantified(&doc, "name", 50);

    assert_eq!(fieldset.entries[0].label, "Quantanium (50 SCU)");
    assert_eq!(
        fieldset.entries[0].payload_value().unwrap(),
        json!({"resource": {"name": "Quantanium"}, "amount": 50})
    );
}

#[test]
fn remove_entry_deletes_only_that_entry() {
    let mut fieldset = booty_fieldset();
    fieldset.push_literal("one");
    fieldset.push_literal("two");

    let first = fieldset.entries[0].id;
    fieldset.remove_entry(first);

    assert_eq!(fieldset.entries.len(), 1);
    assert_eq!(fieldset.entries[0].label, "two");
}

#[test]
fn remove_entry_twice_is_a_no_op() {
    let mut fieldset = booty_fieldset();
    fieldset.push_literal("one");

    let id = fieldset.entries[0].id;
    fieldset.remove_entry(id);
    fieldset.remove_entry(id);

    assert!(fieldset.entries.is_empty());
}

// =============================================================
// Display labels
// =============================================================

#[test]
fn display_label_renders_strings_verbatim() {
    assert_eq!(display_label(&json!({"name": "Gold"}), "name"), "Gold");
}

#[test]
fn display_label_renders_non_strings_as_json() {
    assert_eq!(display_label(&json!({"name": 7}), "name"), "7");
}

#[test]
fn display_label_falls_back_on_missing_key() {
    assert_eq!(display_label(&json!({}), "name"), "unknown");
}
