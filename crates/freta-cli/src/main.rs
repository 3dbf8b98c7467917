//! Freta - bus charter (fretamento) request registry and reporting
//!
//! A CLI tool that registers transport requests, exports formatted
//! documents, and summarizes the published operations feed.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
