//! Writing classified cards to disk.

mod writer;

pub use writer::{DEFAULT_INDENT, UNKNOWN_CARD, Writer, file_name_for};
