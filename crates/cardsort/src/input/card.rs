//! The card record as it appears in a bulk export.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single card from the export.
///
/// The record is kept as an open-ended JSON object so that every field of the
/// source, including ones this crate never looks at, is written back out
/// unchanged and in its original order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardRecord(Map<String, Value>);

impl CardRecord {
    /// Wrap a JSON object as a card record.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// The display name, if the record has a string `name`.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// The type line, or `""` when missing.
    pub fn type_line(&self) -> &str {
        self.0
            .get("type_line")
            .and_then(Value::as_str)
            .unwrap_or("")
    }

    /// Top-level color letters. Non-string entries are skipped.
    pub fn colors(&self) -> impl Iterator<Item = &str> {
        color_letters(self.0.get("colors"))
    }

    /// Color letters of every face, in face order. Empty when the card has no
    /// `card_faces`.
    pub fn face_colors(&self) -> impl Iterator<Item = &str> {
        self.0
            .get("card_faces")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .flat_map(|face| color_letters(face.get("colors")))
    }

    /// Look up any field by name.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Borrow the underlying JSON object.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the record, returning the JSON object.
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for CardRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn color_letters(value: Option<&Value>) -> impl Iterator<Item = &str> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}
