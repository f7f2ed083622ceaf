//! cardsort CLI - file a bulk card export into a directory tree.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use colored::Colorize;

fn main() {
    let cli = Cli::parse();

    let result = commands::organize::run(cli.input, cli.output, cli.verbose);

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
