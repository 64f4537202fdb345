// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// The interface is deliberately tiny: one positional argument naming the
// file that contains the URLs to monitor, plus an optional --json flag.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "url-monitor",
    version = "0.1.0",
    about = "Monitor a list of URLs: status codes, redirects, and referenced images",
    long_about = "url-monitor reads a file containing one URL per line, issues a GET \
                  request for each, follows redirects up to a fixed bound, and for HTML \
                  pages checks that every referenced image is reachable."
)]
pub struct Cli {
    /// File containing the URLs to check, one per line
    ///
    /// This is a positional argument (required, no flag needed)
    pub urls_file: PathBuf,

    /// Output the report as JSON instead of text blocks
    ///
    /// This is an optional flag: --json
    /// #[arg(long)] creates a flag from the field name
    #[arg(long)]
    pub json: bool,
}
