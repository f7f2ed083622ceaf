use crate::sanitize::sanitize_name;

/// Supertypes recognized in a type line, in the order they are reported.
pub const SUPERTYPES: [&str; 6] = ["Basic", "Legendary", "Snow", "World", "Ongoing", "Elite"];

/// Folder used when no supertype is found.
pub const NORMAL: &str = "Normal";

/// Folder used when the type line has no subtypes.
pub const NO_SUBTYPE: &str = "No_Subtype";

/// Separates types from subtypes: space, em dash (U+2014), space.
pub const SUBTYPE_SEPARATOR: &str = " \u{2014} ";

/// The supertype folder for a type line.
///
/// Matching is by substring and the result follows [`SUPERTYPES`] order,
/// not the order the words appear in the line.
pub fn supertype_folder(type_line: &str) -> String {
    let found: Vec<&str> = SUPERTYPES
        .iter()
        .copied()
        .filter(|s| type_line.contains(*s))
        .collect();

    if found.is_empty() {
        NORMAL.to_string()
    } else {
        found.join(" ")
    }
}

/// The subtype folder for a type line.
///
/// Everything after the first separator, spaces turned into underscores,
/// then sanitized.
pub fn subtype_folder(type_line: &str) -> String {
    match type_line.split_once(SUBTYPE_SEPARATOR) {
        Some((_, subtypes)) => sanitize_name(&subtypes.replace(' ', "_")),
        None => NO_SUBTYPE.to_string(),
    }
}
