//! CLI argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use cardsort::{DEFAULT_INPUT, DEFAULT_OUTPUT_ROOT};

/// cardsort: file a bulk card export into a color / type directory tree
#[derive(Parser)]
#[command(name = "cardsort")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON card export
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Root folder for the organized tree
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_ROOT)]
    pub output: PathBuf,

    /// Print every card's destination as it is written
    #[arg(short, long)]
    pub verbose: bool,
}
