// src/checker/engine.rs
// =============================================================================
// This module is the resolution engine: it turns one target URL into an
// ordered sequence of report entries.
//
// How it works:
// 1. GET the URL with transport-level redirect following DISABLED - the
//    engine observes and controls every redirect itself
// 2. Classify the response:
//    - 3xx with a Location header: report the hop, follow it, repeat
//    - 2xx on the original target, when the URL looks like an HTML page:
//      extract the referenced images and flat-check each one
//    - anything else: report the status and stop
// 3. A transport failure (malformed URL, DNS, refused connection, timeout)
//    becomes a Network Error entry for that node only - it never aborts
//    the run or the processing of other targets
//
// Redirect chains are bounded by a hop count, not by cycle detection: two
// URLs redirecting to each other are only stopped by the hop limit. This
// is an intentional, known limitation.
//
// Rust concepts:
// - Loops with explicit state: The redirect chain is a loop carrying
//   (url, hop count, is-original) instead of a recursive call
// - async/await: Each HTTP request blocks this task until it resolves
// =============================================================================

use crate::checker::assets::extract_image_urls;
use crate::report::{CheckStatus, ReportEntry};
use anyhow::Result;
use reqwest::header::LOCATION;
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Maximum number of redirects followed for one target.
/// Exceeding it produces an "Exceeded max redirects" entry, not a request.
pub const MAX_REDIRECT_HOPS: usize = 5;

/// A 2xx page is only scanned for images when its URL path ends with this
/// suffix. This is a deliberately narrow literal test (matching the page
/// filename), not content-type negotiation.
pub const HTML_PAGE_SUFFIX: &str = ".html";

// Builds the HTTP client the engine uses for every request
//
// Two settings matter:
// - Policy::none(): redirects must be observed by the engine, never
//   followed silently by the transport
// - A 10 second timeout so a hung connection can't block the run forever
pub fn build_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .redirect(reqwest::redirect::Policy::none())
        .build()?;
    Ok(client)
}

// Resolves one target URL into its full report
//
// Parameters:
//   client: the shared no-redirect HTTP client
//   target: one line from the input file (checked as-is, no trimming)
//
// Returns: the ordered entries for this target - the original URL first,
// its redirect chain in hop order, then its referenced images in document
// order. Never fails: every failure mode becomes an entry.
pub async fn resolve_target(client: &Client, target: &str) -> Vec<ReportEntry> {
    let mut entries = Vec::new();

    // The redirect chain state: where we are, how many hops it took to get
    // here, and whether this is still the user's literal input
    let mut url = target.to_string();
    let mut hops: usize = 0;
    let mut is_original = true;

    loop {
        // Past the hop bound: report and stop WITHOUT issuing a request
        if hops > MAX_REDIRECT_HOPS {
            entries.push(ReportEntry::ExceededRedirects { url });
            break;
        }

        // One GET. A send error covers everything transport-level:
        // malformed URL (including blank input lines), DNS failure,
        // connection refused, timeout
        let response = match client.get(&url).send().await {
            Ok(response) => response,
            Err(_) => {
                entries.push(page_entry(url, is_original, CheckStatus::NetworkError, None));
                break;
            }
        };

        let code = response.status().as_u16();

        if response.status().is_redirection() {
            let location = response
                .headers()
                .get(LOCATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);

            match location {
                Some(location) => {
                    // Report the hop and follow the Location value literally.
                    // If it isn't an absolute URL the next iteration reports
                    // it as a network error.
                    entries.push(page_entry(
                        url,
                        is_original,
                        CheckStatus::Http { code },
                        Some(location.clone()),
                    ));
                    url = location;
                    hops += 1;
                    is_original = false;
                    continue;
                }
                None => {
                    // 3xx with nowhere to go: terminal entry
                    entries.push(page_entry(url, is_original, CheckStatus::Http { code }, None));
                    break;
                }
            }
        }

        // Image extraction applies only to a successful ORIGINAL target
        // whose URL matches the HTML page suffix
        if response.status().is_success() && is_original && is_html_page(&url) {
            // The response's resolved URL is the base for relative src values
            let page_url = response.url().clone();

            match response.text().await {
                Ok(body) => {
                    entries.push(page_entry(url, is_original, CheckStatus::Http { code }, None));

                    // One flat check per referenced image, in document order
                    for image_url in extract_image_urls(&body, &page_url) {
                        entries.push(check_asset(client, image_url).await);
                    }
                }
                Err(_) => {
                    // The status arrived but the body didn't: network error
                    entries.push(page_entry(url, is_original, CheckStatus::NetworkError, None));
                }
            }
            break;
        }

        // Every other status (2xx non-HTML, 4xx, 5xx) is terminal
        entries.push(page_entry(url, is_original, CheckStatus::Http { code }, None));
        break;
    }

    entries
}

// Checks one referenced image with a single flat GET
//
// Assets are leaves: no redirect following (the shared client already
// refuses to), no body read, no extraction of further references.
async fn check_asset(client: &Client, url: String) -> ReportEntry {
    match client.get(&url).send().await {
        Ok(response) => ReportEntry::Asset {
            url,
            status: CheckStatus::Http {
                code: response.status().as_u16(),
            },
        },
        Err(_) => ReportEntry::Asset {
            url,
            status: CheckStatus::NetworkError,
        },
    }
}

// The "is this an HTML page" heuristic: a literal suffix test on the URL's
// path component. Unparseable URLs never reach this point in practice
// (the request already failed), but answer false anyway.
fn is_html_page(url: &str) -> bool {
    Url::parse(url)
        .map(|u| u.path().ends_with(HTML_PAGE_SUFFIX))
        .unwrap_or(false)
}

fn page_entry(
    url: String,
    echo_url: bool,
    status: CheckStatus,
    redirect: Option<String>,
) -> ReportEntry {
    ReportEntry::Page {
        url,
        echo_url,
        status,
        redirect,
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why disable redirect following in the client?
//    - reqwest would normally follow 3xx responses itself, silently
//    - We need to SEE each hop to report it, so Policy::none() hands
//      every 3xx response back to the engine untouched
//
// 2. Why a loop instead of a recursive function?
//    - The redirect chain is linear: each hop fully replaces the previous
//      URL, so (url, hops, is_original) is all the state there is
//    - Recursive async functions in Rust need boxed futures; a loop
//      carrying the same three fields is simpler and reads better
//
// 3. Why does every failure become an entry instead of an error?
//    - Targets are independent: one dead URL must not stop the others
//    - The caller just prints whatever entries come back, so failures
//      have to be data, not control flow
// -----------------------------------------------------------------------------
