//! Reads a bulk export into memory.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::card::CardRecord;
use crate::error::{CardSortError, Result};

/// Loads a whole card export at once.
///
/// Bulk exports are read into memory in one go; there is no streaming mode.
#[derive(Debug, Clone, Default)]
pub struct Loader;

impl Loader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }

    /// Read and parse the export at `path`, returning cards in file order.
    ///
    /// Returns [`CardSortError::InputNotFound`] when the file does not exist,
    /// before anything is read.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Vec<CardRecord>> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CardSortError::InputNotFound {
                path: path.to_path_buf(),
            });
        }

        let contents = fs::read(path).map_err(|e| CardSortError::io(path, e))?;

        self.parse_bytes(&contents).map_err(|e| e.in_file(path))
    }

    /// Parse an in-memory export.
    ///
    /// The top-level value must be an array and every element an object.
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<CardRecord>> {
        let document: Value = serde_json::from_slice(bytes)
            .map_err(|e| CardSortError::json(PathBuf::new(), e))?;

        let elements = match document {
            Value::Array(elements) => elements,
            other => {
                return Err(CardSortError::Parse {
                    path: PathBuf::new(),
                    message: format!(
                        "expected a top-level array of cards, found {}",
                        kind_of(&other)
                    ),
                });
            }
        };

        elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| match element {
                Value::Object(fields) => Ok(CardRecord::new(fields)),
                other => Err(CardSortError::Parse {
                    path: PathBuf::new(),
                    message: format!(
                        "card at index {} is {}, expected an object",
                        index,
                        kind_of(&other)
                    ),
                }),
            })
            .collect()
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
