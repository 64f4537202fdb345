// src/report.rs
// =============================================================================
// This module defines the report produced by the resolution engine.
//
// A report is an ordered sequence of entries. Each entry describes the
// outcome of checking exactly one URL: the original target, one redirect
// hop, or one referenced image. Text output renders each entry as a small
// block of lines, with blocks separated by a blank line:
//
//   URL: http://example.com/page.html
//   Status: 200 OK
//
//   Referenced URL: http://example.com/logo.png
//   Status: 200 OK
//
// The exact line formats matter - they are the tool's public contract and
// the tests below pin them down literally.
//
// Rust concepts:
// - Enums with data: Each entry kind carries different fields
// - Serde derives: The same types also serialize to JSON for --json
// =============================================================================

use reqwest::StatusCode;
use serde::Serialize;

// The outcome of one HTTP exchange, as far as the report cares
//
// #[derive(Serialize)] lets us convert to JSON for --json output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckStatus {
    /// The server answered with this HTTP status code
    Http { code: u16 },
    /// The request itself failed (malformed URL, DNS failure, connection
    /// refused, timeout) - no status code exists for this node
    NetworkError,
}

impl CheckStatus {
    /// Renders the literal `Status:` line for this outcome
    ///
    /// Examples:
    ///   Http { code: 200 } -> "Status: 200 OK"
    ///   NetworkError       -> "Status: Network Error"
    pub fn status_line(&self) -> String {
        match self {
            CheckStatus::Http { code } => {
                format!("Status: {} {}", code, status_message(*code))
            }
            CheckStatus::NetworkError => "Status: Network Error".to_string(),
        }
    }

    /// A node is healthy when the server answered below the 4xx range
    /// (2xx success, or a 3xx hop that the engine then follows)
    pub fn is_ok(&self) -> bool {
        matches!(self, CheckStatus::Http { code } if *code < 400)
    }
}

// Looks up the reason phrase printed after the status code
//
// We use the canonical HTTP reason phrase where one exists ("OK",
// "Moved Permanently", "Not Found", ...) and fall back to a phrase for
// the status class when the code is nonstandard.
fn status_message(code: u16) -> &'static str {
    let canonical = StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason());

    match canonical {
        Some(reason) => reason,
        None => match code {
            200..=299 => "OK",
            300..=399 => "Moved Permanently",
            400..=499 => "Not Found",
            _ => "Server Error",
        },
    }
}

// One entry in the report - the outcome of checking exactly one URL
//
// The overall report is the ordered concatenation of these: original
// target first, its redirect chain in hop order, then its referenced
// images in document order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ReportEntry {
    /// The original target or one redirect hop
    Page {
        /// The URL this node checked
        url: String,
        /// Whether to echo the "URL:" line before the status line.
        /// True for the original target; redirect hops were already named
        /// by the previous block's "Redirected URL:" line.
        echo_url: bool,
        /// What the check observed
        #[serde(flatten)] // Merges the CheckStatus fields into this entry
        status: CheckStatus,
        /// Where a 3xx response pointed us next, if it did
        #[serde(skip_serializing_if = "Option::is_none")]
        redirect: Option<String>,
    },

    /// One referenced image, checked with a single flat GET
    Asset {
        url: String,
        #[serde(flatten)]
        status: CheckStatus,
    },

    /// The redirect chain ran past the hop bound; no request was made
    ExceededRedirects { url: String },
}

impl ReportEntry {
    /// Renders this entry as its block of output lines (no trailing newline)
    pub fn format_block(&self) -> String {
        match self {
            ReportEntry::Page {
                url,
                echo_url,
                status,
                redirect,
            } => {
                let mut lines = Vec::new();

                // The URL line is echoed for original targets, and also for
                // network errors so a failed redirect hop still names itself
                if *echo_url || *status == CheckStatus::NetworkError {
                    lines.push(format!("URL: {}", url));
                }

                lines.push(status.status_line());

                if let Some(location) = redirect {
                    lines.push(format!("Redirected URL: {}", location));
                }

                lines.join("\n")
            }

            ReportEntry::Asset { url, status } => {
                format!("Referenced URL: {}\n{}", url, status.status_line())
            }

            ReportEntry::ExceededRedirects { url } => {
                format!("Exceeded max redirects for: {}", url)
            }
        }
    }

    /// Helper method to check if this node came back healthy
    ///
    /// Used for the process exit code: any unhealthy entry means exit 1
    pub fn is_ok(&self) -> bool {
        match self {
            ReportEntry::Page { status, .. } | ReportEntry::Asset { status, .. } => {
                status.is_ok()
            }
            ReportEntry::ExceededRedirects { .. } => false,
        }
    }
}

// Joins entries into the full text report
//
// Blocks are separated by one blank line; the report ends with a newline.
pub fn format_report(entries: &[ReportEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let blocks: Vec<String> = entries.iter().map(|e| e.format_block()).collect();
    format!("{}\n", blocks.join("\n\n"))
}
