//! Loading card exports.

mod card;
mod loader;

pub use card::CardRecord;
pub use loader::Loader;
