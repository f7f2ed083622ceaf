//! Deriving the color / super-type / sub-type folders for a card.

mod colors;
mod type_line;

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::input::CardRecord;

pub use colors::{COLORLESS, color_folder};
pub use type_line::{
    NO_SUBTYPE, NORMAL, SUBTYPE_SEPARATOR, SUPERTYPES, subtype_folder, supertype_folder,
};

/// The three folder names a card is filed under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Classification {
    /// Sorted color letters, or `Colorless`.
    pub color: String,
    /// Recognized supertypes joined by spaces, or `Normal`.
    pub supertype: String,
    /// Sanitized subtypes with `_` for spaces, or `No_Subtype`.
    pub subtype: String,
}

impl Classification {
    /// Classify a single card.
    pub fn of(card: &CardRecord) -> Self {
        let type_line = card.type_line();

        Self {
            color: color_folder(card),
            supertype: supertype_folder(type_line),
            subtype: subtype_folder(type_line),
        }
    }

    /// The directory for this classification under `root`.
    pub fn directory(&self, root: impl AsRef<Path>) -> PathBuf {
        root.as_ref()
            .join(&self.color)
            .join(&self.supertype)
            .join(&self.subtype)
    }
}
