#[cfg(test)]
#[path = "entry_test.rs"]
mod entry_test;

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value;

static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(1);

/// A single result box: a display label plus the serialized JSON payload it
/// was created with.
///
/// The payload is stored as text and never mutated in place; replacement
/// means remove-and-recreate. Deserializing [`ResultEntry::payload_value`]
/// always yields exactly the creation value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultEntry {
    pub id: u64,
    pub label: String,
    payload: String,
}

impl ResultEntry {
    /// Create an entry for `payload`, serializing it for later retrieval.
    pub fn new(label: String, payload: &Value) -> Self {
        Self {
            id: NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed),
            label,
            payload: payload.to_string(),
        }
    }

    /// Deserialize the stored payload back into the value this entry was
    /// created with.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored text is not valid JSON; entries
    /// created through [`ResultEntry::new`] always round-trip cleanly.
    pub fn payload_value(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.payload)
    }
}
