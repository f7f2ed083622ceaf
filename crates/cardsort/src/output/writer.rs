//! One pretty-printed JSON file per card.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::classify::Classification;
use crate::error::{CardSortError, Result};
use crate::input::CardRecord;
use crate::sanitize::sanitize_name;

/// File stem used for cards without a `name`.
pub const UNKNOWN_CARD: &str = "Unknown_Card";

/// Spaces per indentation level in written files.
pub const DEFAULT_INDENT: usize = 4;

/// The file name a card is written under: sanitized name plus `.json`.
pub fn file_name_for(card: &CardRecord) -> String {
    let stem = card.name().unwrap_or(UNKNOWN_CARD);
    format!("{}.json", sanitize_name(stem))
}

/// Writes cards into the classification tree.
#[derive(Debug, Clone)]
pub struct Writer {
    indent: Vec<u8>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::with_indent(DEFAULT_INDENT)
    }
}

impl Writer {
    /// Create a writer using 4-space indentation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with a custom indentation width.
    pub fn with_indent(spaces: usize) -> Self {
        Self {
            indent: vec![b' '; spaces],
        }
    }

    /// Write `card` under `root` in the folder for `classification`.
    ///
    /// Missing directories are created. An existing file with the same name
    /// is overwritten. Returns the path written.
    pub fn write(
        &self,
        root: impl AsRef<Path>,
        classification: &Classification,
        card: &CardRecord,
    ) -> Result<PathBuf> {
        let dir = classification.directory(root);
        fs::create_dir_all(&dir).map_err(|e| CardSortError::io(&dir, e))?;

        let path = dir.join(file_name_for(card));
        let file = File::create(&path).map_err(|e| CardSortError::io(&path, e))?;

        let mut writer = BufWriter::new(file);
        self.encode(&mut writer, card, &path)?;
        writer.flush().map_err(|e| CardSortError::io(&path, e))?;

        Ok(path)
    }

    /// Serialize `card` into `out`. `path` is only used for error reporting.
    fn encode<W: Write>(&self, out: W, card: &CardRecord, path: &Path) -> Result<()> {
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut serializer = Serializer::with_formatter(out, formatter);

        card.serialize(&mut serializer).map_err(|e| {
            if e.is_io() {
                CardSortError::io(path, e.into())
            } else {
                CardSortError::json(path, e)
            }
        })
    }
}
