//! Wire types for the backend API.
//!
//! Catalog search results stay opaque `serde_json::Value`s since their shape
//! differs per collection; only the endpoints with a fixed shape get structs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A crew member as returned by `GET /current_crew`.
///
/// Discord members without a nickname come back as `null`; any additional
/// fields (id, etc.) are kept so the document stays intact.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct CrewMember {
    #[serde(default)]
    pub nick: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl CrewMember {
    /// Roster display name, with a fallback for members without a nick.
    pub fn display_name(&self) -> String {
        self.nick.clone().unwrap_or_else(|| "unknown".to_owned())
    }
}

/// Response from `PUT /upload/sc`.
#[derive(Clone, Debug, Deserialize)]
pub struct UploadResponse {
    pub image_url: String,
}
