#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use serde_json::{Map, Value};

use crate::state::fieldset::{DEFAULT_TRIGGERS, FieldSetKind, FieldSetState};

/// Top-level form state: every field-set plus the submit bracket.
#[derive(Clone, Debug)]
pub struct ReportState {
    pub fieldsets: Vec<FieldSetState>,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Default for ReportState {
    fn default() -> Self {
        Self {
            fieldsets: default_fieldsets(),
            submitting: false,
            error: None,
        }
    }
}

impl ReportState {
    /// Reset the form after a successful submission: every entry and error
    /// is dropped, the field-set definitions stay.
    pub fn clear_entries(&mut self) {
        for fieldset in &mut self.fieldsets {
            fieldset.entries.clear();
            fieldset.error = None;
        }
    }
}

/// The report form's field-sets, in submission order.
pub fn default_fieldsets() -> Vec<FieldSetState> {
    vec![
        FieldSetState::new(
            "crew",
            "Crew",
            FieldSetKind::Search {
                collection: "members",
                display_key: "nick",
            },
            DEFAULT_TRIGGERS,
        ),
        FieldSetState::new(
            "routes",
            "Route",
            FieldSetKind::Search {
                collection: "locations",
                display_key: "name",
            },
            DEFAULT_TRIGGERS,
        ),
        FieldSetState::new(
            "target_ships",
            "Target ship",
            FieldSetKind::Search {
                collection: "ships",
                display_key: "Name",
            },
            DEFAULT_TRIGGERS,
        ),
        FieldSetState::new("target_names", "Target names", FieldSetKind::Local, DEFAULT_TRIGGERS),
        FieldSetState::new(
            "booty",
            "Booty",
            FieldSetKind::SplitSearch {
                collection: "resources",
                display_key: "name",
            },
            DEFAULT_TRIGGERS,
        ),
        FieldSetState::new(
            "last_hit",
            "Last hit",
            FieldSetKind::Search {
                collection: "members",
                display_key: "nick",
            },
            DEFAULT_TRIGGERS,
        ),
    ]
}

/// Assemble the submission document: one payload array per field-set (empty
/// field-sets contribute empty arrays) plus `screenshot_url`.
///
/// # Errors
///
/// Returns an error if any stored entry payload fails to deserialize.
pub fn build_document(
    fieldsets: &[FieldSetState],
    screenshot_url: &str,
) -> serde_json::Result<Value> {
    let mut body = Map::new();

    for fieldset in fieldsets {
        let payloads = fieldset
            .entries
            .iter()
            .map(super::entry::ResultEntry::payload_value)
            .collect::<serde_json::Result<Vec<Value>>>()?;
        body.insert(fieldset.name.to_owned(), Value::Array(payloads));
    }

    body.insert(
        "screenshot_url".to_owned(),
        Value::String(screenshot_url.to_owned()),
    );

    Ok(Value::Object(body))
}
