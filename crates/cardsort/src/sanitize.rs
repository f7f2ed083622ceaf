//! Filesystem-safe path segments.

use once_cell::sync::Lazy;
use regex::Regex;

// Characters rejected by at least one common filesystem.
static ILLEGAL_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[\\/*?:"<>|]"#).unwrap());

/// Remove every character that is illegal in a file or folder name.
///
/// Only `\ / * ? : " < > |` are stripped; spaces, underscores and any other
/// unicode are left as they are.
pub fn sanitize_name(name: &str) -> String {
    ILLEGAL_CHARS.replace_all(name, "").into_owned()
}
