//! Wax Listing
//!
//! Selection engine behind the "create listing" flow of the wax marketplace:
//! a read-only catalog snapshot (artist, album, release, item) and a resolver
//! that keeps a draft listing consistent with whatever the user picked.

pub mod catalog;
pub mod config;
pub mod listing;

// Re-export commonly used types for convenience
pub use catalog::{load_snapshot, CatalogSnapshot};
pub use listing::{ListingSession, SelectionError, SelectionResolver, SubmissionError};
