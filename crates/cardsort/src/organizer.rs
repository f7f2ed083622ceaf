//! Main Organizer struct and public API.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::classify::Classification;
use crate::error::Result;
use crate::input::{CardRecord, Loader};
use crate::output::{DEFAULT_INDENT, Writer};

/// Default export file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "oracle-cards.json";

/// Default output folder, relative to the working directory.
pub const DEFAULT_OUTPUT_ROOT: &str = "Scryfall_Organized";

/// Configuration for an organize run.
#[derive(Debug, Clone)]
pub struct OrganizerConfig {
    /// Path to the bulk export.
    pub input: PathBuf,
    /// Root of the output tree.
    pub output_root: PathBuf,
    /// Spaces per indentation level in written files.
    pub indent: usize,
}

impl Default for OrganizerConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            indent: DEFAULT_INDENT,
        }
    }
}

/// A card that has just been written.
#[derive(Debug, Clone, Copy)]
pub struct WrittenCard<'a> {
    /// Position of the card in the export.
    pub index: usize,
    pub card: &'a CardRecord,
    pub classification: &'a Classification,
    pub path: &'a Path,
}

/// Summary of a completed run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizeReport {
    /// Root the tree was written under.
    pub output_root: PathBuf,
    /// Number of files written. Cards sharing a destination each count.
    pub cards_written: usize,
    /// Number of distinct leaf directories used.
    pub directories: usize,
    /// Cards per color folder.
    pub by_color: BTreeMap<String, usize>,
}

/// Sorts a bulk export into a color / super-type / sub-type tree.
///
/// Cards are processed one at a time in file order. The first failure stops
/// the run; whatever was already written stays on disk.
pub struct Organizer {
    config: OrganizerConfig,
    loader: Loader,
    writer: Writer,
}

impl Default for Organizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Organizer {
    /// Create an organizer with default configuration.
    pub fn new() -> Self {
        Self::with_config(OrganizerConfig::default())
    }

    /// Create an organizer with custom configuration.
    pub fn with_config(config: OrganizerConfig) -> Self {
        let writer = Writer::with_indent(config.indent);

        Self {
            config,
            loader: Loader::new(),
            writer,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &OrganizerConfig {
        &self.config
    }

    /// Classify a card without writing anything.
    pub fn classify(&self, card: &CardRecord) -> Classification {
        Classification::of(card)
    }

    /// Where `card` would be written.
    pub fn destination(&self, card: &CardRecord) -> PathBuf {
        self.classify(card)
            .directory(&self.config.output_root)
            .join(crate::output::file_name_for(card))
    }

    /// Load the configured export and write every card.
    pub fn run(&self) -> Result<OrganizeReport> {
        self.run_with(|_| {})
    }

    /// Like [`run`](Self::run), calling `on_written` after each card.
    pub fn run_with<F>(&self, on_written: F) -> Result<OrganizeReport>
    where
        F: FnMut(WrittenCard<'_>),
    {
        let cards = self.loader.load_file(&self.config.input)?;
        self.organize(&cards, on_written)
    }

    /// Write already-loaded cards under the configured output root.
    pub fn organize<F>(&self, cards: &[CardRecord], mut on_written: F) -> Result<OrganizeReport>
    where
        F: FnMut(WrittenCard<'_>),
    {
        let root = &self.config.output_root;
        let mut report = OrganizeReport {
            output_root: root.clone(),
            ..Default::default()
        };
        let mut directories = BTreeSet::new();

        for (index, card) in cards.iter().enumerate() {
            let classification = self.classify(card);
            let path = self.writer.write(root, &classification, card)?;

            on_written(WrittenCard {
                index,
                card,
                classification: &classification,
                path: &path,
            });

            report.cards_written += 1;
            *report.by_color.entry(classification.color.clone()).or_default() += 1;
            directories.insert(classification);
        }

        report.directories = directories.len();
        Ok(report)
    }
}
