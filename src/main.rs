// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Read the URL list file (the one fatal error if it's unreadable)
// 3. Resolve each target sequentially, printing its report as it completes
// 4. Exit with proper code (0 = all healthy, 1 = broken URLs, 2 = error)
//
// The targets are processed strictly one at a time, in file order, and
// within a target every request completes before the next begins. That
// keeps the report a deterministic transcript: original target, redirect
// hops, referenced images, in that order.
//
// Rust concepts used:
// - async/await: The HTTP client is async; we await each request in turn
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle parse results
// =============================================================================

// Module declarations - tells Rust about our other source files
mod checker; // src/checker/ - resolution engine and image extraction
mod cli; //     src/cli.rs   - command-line parsing
mod input; //   src/input.rs - URL list file reading
mod report; //  src/report.rs - report entries and formatting

// Import items we need from our modules
use clap::error::ErrorKind;
use clap::Parser; // Parser trait enables the try_parse() method
use cli::Cli;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // The only error that lands here is the input-file read;
            // print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = every checked URL healthy (also: usage shown, nothing checked)
//   Ok(1) = at least one broken URL found
//   Err = input file could not be read
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // A wrong argument count is a benign early return with a usage line,
    // not a hard failure - nothing gets checked in that case
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            // --help and --version keep their normal clap output
            e.print()?;
            return Ok(0);
        }
        Err(_) => {
            println!("Usage: url-monitor <urls-file>");
            return Ok(0);
        }
    };

    // Read the URL list - the one place a failure aborts the run
    let targets = input::read_targets(&cli.urls_file)?;

    // One shared client for every request (connection pooling)
    let client = checker::build_client()?;

    let mut all_entries = Vec::new();

    // Strictly sequential: one target at a time, in file order
    for (index, target) in targets.iter().enumerate() {
        let entries = checker::resolve_target(&client, target).await;

        if !cli.json {
            // Each target's report is printed as soon as it completes;
            // targets are separated by a blank line like any other block
            if index > 0 {
                println!();
            }
            print!("{}", report::format_report(&entries));
        }

        all_entries.extend(entries);
    }

    if cli.json {
        // Serialize the full ordered report and print it
        let json_output = serde_json::to_string_pretty(&all_entries)?;
        println!("{}", json_output);
    }

    // Count how many checked URLs came back broken
    let broken_count = all_entries.iter().filter(|entry| !entry.is_ok()).count();

    if broken_count > 0 {
        Ok(1) // Exit code 1 = broken URLs found
    } else {
        Ok(0) // Exit code 0 = all good
    }
}
