// src/input.rs
// =============================================================================
// This module reads the URL list from the input file.
//
// The contract is intentionally literal:
// - One target per line, preserved in file order
// - No deduplication and no trimming beyond what line-reading does
// - Blank lines are kept: they get checked like any other target and
//   therefore show up in the report as Network Error
//
// A missing or unreadable file is the ONE fatal error in this tool - no
// partial report is produced for it. Everything downstream converts its
// failures into report entries instead.
// =============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

// Reads the targets from the URL list file
//
// Parameters:
//   path: the file named on the command line
//
// Returns: the lines of the file, in order, as owned Strings
pub fn read_targets(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Error reading file: {}", path.display()))?;

    // str::lines() strips the line terminator (\n or \r\n) and nothing else
    Ok(contents.lines().map(|line| line.to_string()).collect())
}
