//! Organize command - load an export and write the card tree.

use std::path::{Path, PathBuf};

use cardsort::{CardSortError, OrganizeReport, Organizer, OrganizerConfig};
use colored::Colorize;

pub fn run(
    input: PathBuf,
    output: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let organizer = Organizer::with_config(OrganizerConfig {
        input,
        output_root: output,
        ..Default::default()
    });

    println!("Reading dataset... this may take a moment.");

    let result = organizer.run_with(|written| {
        if verbose {
            let name = written.card.name().unwrap_or("?");
            println!(
                "  {} {} {}",
                "•".dimmed(),
                name,
                relative_to(written.path, &organizer.config().output_root)
                    .display()
                    .to_string()
                    .cyan()
            );
        }
    });

    match result {
        Ok(report) => print_summary(&report),
        // Nothing was read or written; report it and stop without failing.
        Err(e @ CardSortError::InputNotFound { .. }) => {
            println!("{} {}", "Error:".red().bold(), e);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn print_summary(report: &OrganizeReport) {
    let root = std::path::absolute(&report.output_root)
        .unwrap_or_else(|_| report.output_root.clone());

    println!(
        "{} Data organized into: {}",
        "Success!".green().bold(),
        root.display().to_string().cyan()
    );
    println!(
        "  {} cards in {} folders",
        report.cards_written.to_string().white().bold(),
        report.directories.to_string().white().bold()
    );
    for (color, count) in &report.by_color {
        println!("  {:<10} {}", color, count);
    }
}

fn relative_to<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
