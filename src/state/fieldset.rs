#[cfg(test)]
#[path = "fieldset_test.rs"]
mod fieldset_test;

use serde_json::{Value, json};

use crate::state::entry::ResultEntry;

/// Commit keys used by every field-set input unless overridden.
pub const DEFAULT_TRIGGERS: &[&str] = &["Enter", ","];

/// How a field-set turns committed text into an entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldSetKind {
    /// The raw text is both label and payload; no network call.
    Local,
    /// Look the text up in a backend collection; the hit document becomes
    /// the payload and its `display_key` field the label.
    Search {
        collection: &'static str,
        display_key: &'static str,
    },
    /// Parse an "amount of resource" phrase first and look up only the
    /// resource; payload is `{resource, amount}`.
    SplitSearch {
        collection: &'static str,
        display_key: &'static str,
    },
}

/// A named group of result entries plus the input used to add new ones.
///
/// `name` becomes the JSON key of the collected payload array on submission.
#[derive(Clone, Debug)]
pub struct FieldSetState {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldSetKind,
    pub triggers: &'static [&'static str],
    pub entries: Vec<ResultEntry>,
    pub searching: bool,
    pub error: Option<String>,
}

impl FieldSetState {
    pub fn new(
        name: &'static str,
        label: &'static str,
        kind: FieldSetKind,
        triggers: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            label,
            kind,
            triggers,
            entries: Vec::new(),
            searching: false,
            error: None,
        }
    }

    /// Add a local entry whose payload is the text itself.
    pub fn push_literal(&mut self, text: &str) {
        self.entries.push(ResultEntry::new(
            text.to_owned(),
            &Value::String(text.to_owned()),
        ));
    }

    /// Add an entry for a catalog document.
    pub fn push_document(&mut self, doc: &Value, display_key: &str) {
        self.entries
            .push(ResultEntry::new(display_label(doc, display_key), doc));
    }

    /// Add a quantified booty entry: label `"{name} ({amount} SCU)"`,
    /// payload `{resource, amount}`.
    pub fn push_quantified(&mut self, doc: &Value, display_key: &str, amount: i64) {
        let label = format!("{} ({amount} SCU)", display_label(doc, display_key));
        let payload = json!({ "resource": doc, "amount": amount });
        self.entries.push(ResultEntry::new(label, &payload));
    }

    /// Remove the entry with `id`. Removing an absent id is a no-op.
    pub fn remove_entry(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }
}

/// Whether a key event should commit the input's text.
///
/// An empty trigger list commits on any key.
pub fn is_commit_key(key: &str, triggers: &[&str]) -> bool {
    triggers.is_empty() || triggers.contains(&key)
}

/// Human-readable label for a catalog document.
///
/// String fields render verbatim, other values via their JSON text; a
/// missing key falls back to a placeholder rather than failing the search.
pub fn display_label(doc: &Value, key: &str) -> String {
    match doc.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "unknown".to_owned(),
    }
}
