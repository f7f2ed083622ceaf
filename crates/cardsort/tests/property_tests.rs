//! Property-based tests for the classifier and sanitizer.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p cardsort --test property_tests
//! PROPTEST_CASES=10000 cargo test -p cardsort --test property_tests
//! ```

use std::collections::BTreeSet;

use proptest::prelude::*;
use serde_json::json;

use cardsort::classify::{
    SUBTYPE_SEPARATOR, SUPERTYPES, color_folder, subtype_folder, supertype_folder,
};
use cardsort::{CardRecord, Classification, sanitize_name};

// =============================================================================
// Test Strategies
// =============================================================================

fn color_letter() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("W".to_string()),
        Just("U".to_string()),
        Just("B".to_string()),
        Just("R".to_string()),
        Just("G".to_string()),
    ]
}

fn color_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(color_letter(), 0..6)
}

/// Type-line words that never contain a supertype name.
fn plain_words() -> impl Strategy<Value = String> {
    "(Creature|Instant|Sorcery|Artifact|Land|Enchantment)( (Creature|Artifact|Land)){0,2}"
}

fn card(value: serde_json::Value) -> CardRecord {
    serde_json::from_value(value).unwrap()
}

fn expected_colors(letters: &[String]) -> String {
    letters.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect()
}

// =============================================================================
// Color Folder
// =============================================================================

proptest! {
    #[test]
    fn colors_sorted_and_deduplicated(colors in color_list(), faces in color_list()) {
        prop_assume!(!colors.is_empty());
        let record = card(json!({ "colors": colors, "card_faces": [{ "colors": faces }] }));

        prop_assert_eq!(color_folder(&record), expected_colors(&colors));
    }

    #[test]
    fn face_colors_used_when_top_level_empty(
        first in color_list(),
        second in color_list(),
    ) {
        prop_assume!(!first.is_empty() || !second.is_empty());
        let record = card(json!({
            "colors": [],
            "card_faces": [{ "colors": first }, { "colors": second }]
        }));
        let union: Vec<String> = first.iter().chain(second.iter()).cloned().collect();

        prop_assert_eq!(color_folder(&record), expected_colors(&union));
    }

    #[test]
    fn color_folder_never_empty(colors in color_list(), faces in color_list()) {
        let record = card(json!({ "colors": colors, "card_faces": [{ "colors": faces }] }));
        let folder = color_folder(&record);

        prop_assert!(!folder.is_empty());
        if colors.is_empty() && faces.is_empty() {
            prop_assert_eq!(folder, "Colorless");
        }
    }
}

// =============================================================================
// Type Line
// =============================================================================

proptest! {
    #[test]
    fn no_supertype_means_normal(types in plain_words()) {
        prop_assert_eq!(supertype_folder(&types), "Normal");
    }

    #[test]
    fn supertypes_follow_vocabulary_order(
        picks in prop::collection::vec(0..SUPERTYPES.len(), 1..4),
        types in plain_words(),
    ) {
        // Build the line in reverse vocabulary order.
        let chosen: BTreeSet<usize> = picks.into_iter().collect();
        let mut words: Vec<&str> = chosen.iter().rev().map(|&i| SUPERTYPES[i]).collect();
        words.push(&types);
        let line = words.join(" ");

        let expected: Vec<&str> = chosen.iter().map(|&i| SUPERTYPES[i]).collect();
        prop_assert_eq!(supertype_folder(&line), expected.join(" "));
    }

    #[test]
    fn subtype_is_text_after_first_separator(
        types in plain_words(),
        subtypes in "[A-Za-z ]{1,30}",
    ) {
        let line = format!("{types}{SUBTYPE_SEPARATOR}{subtypes}");

        prop_assert_eq!(subtype_folder(&line), subtypes.replace(' ', "_"));
    }

    #[test]
    fn no_separator_means_no_subtype(types in plain_words()) {
        prop_assert_eq!(subtype_folder(&types), "No_Subtype");
    }

    #[test]
    fn classification_is_deterministic(
        colors in color_list(),
        types in plain_words(),
        name in "[A-Za-z<>:?/ ]{0,20}",
    ) {
        let record = card(json!({ "name": name, "colors": colors, "type_line": types }));

        prop_assert_eq!(Classification::of(&record), Classification::of(&record.clone()));
    }
}

// =============================================================================
// Sanitizer
// =============================================================================

proptest! {
    #[test]
    fn sanitized_has_no_illegal_chars(input in "\\PC{0,50}") {
        let clean = sanitize_name(&input);

        prop_assert!(!clean.chars().any(|c| r#"\/*?:"<>|"#.contains(c)));
    }

    #[test]
    fn sanitize_keeps_other_chars_in_order(input in "\\PC{0,50}") {
        let expected: String = input
            .chars()
            .filter(|c| !r#"\/*?:"<>|"#.contains(*c))
            .collect();

        prop_assert_eq!(sanitize_name(&input), expected);
    }

    #[test]
    fn sanitize_is_idempotent(input in "\\PC{0,50}") {
        let once = sanitize_name(&input);
        prop_assert_eq!(sanitize_name(&once), once.clone());
    }
}
