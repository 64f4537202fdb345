// src/checker/mod.rs
// =============================================================================
// This module contains all URL checking logic.
//
// Submodules:
// - engine: Drives the request/redirect/report loop for one target and
//   flat-checks referenced images
// - assets: Extracts image references from HTML pages
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod assets;
mod engine;

// Re-export public items from submodules
// This lets users write `checker::resolve_target()` instead of
// `checker::engine::resolve_target()`
pub use assets::extract_image_urls;
pub use engine::{build_client, resolve_target, HTML_PAGE_SUFFIX, MAX_REDIRECT_HOPS};
