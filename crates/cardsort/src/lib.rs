//! cardsort: file a bulk trading-card export into a directory tree.
//!
//! Each card in a JSON export (such as a Scryfall "oracle cards" bulk file) is
//! written to its own pretty-printed file at
//! `<root>/<colors>/<supertypes>/<subtypes>/<name>.json`.
//!
//! # Example
//!
//! ```no_run
//! use cardsort::{Organizer, OrganizerConfig};
//!
//! let organizer = Organizer::with_config(OrganizerConfig {
//!     input: "oracle-cards.json".into(),
//!     output_root: "Scryfall_Organized".into(),
//!     ..Default::default()
//! });
//! let report = organizer.run().unwrap();
//!
//! println!("Cards written: {}", report.cards_written);
//! ```

pub mod classify;
pub mod error;
pub mod input;
pub mod output;
pub mod sanitize;

mod organizer;

pub use crate::organizer::{
    DEFAULT_INPUT, DEFAULT_OUTPUT_ROOT, OrganizeReport, Organizer, OrganizerConfig, WrittenCard,
};
pub use classify::Classification;
pub use error::{CardSortError, Result};
pub use input::{CardRecord, Loader};
pub use output::Writer;
pub use sanitize::sanitize_name;
