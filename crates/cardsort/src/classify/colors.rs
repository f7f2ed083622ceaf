use std::collections::BTreeSet;

use crate::input::CardRecord;

/// Folder used when a card has no colors at all.
pub const COLORLESS: &str = "Colorless";

/// The color folder for a card.
///
/// Top-level `colors` win; the union of face colors is only consulted when
/// those are empty. Letters are deduplicated and sorted.
pub fn color_folder(card: &CardRecord) -> String {
    let mut letters: BTreeSet<&str> = card.colors().collect();
    if letters.is_empty() {
        letters = card.face_colors().collect();
    }

    if letters.is_empty() {
        COLORLESS.to_string()
    } else {
        letters.into_iter().collect()
    }
}
