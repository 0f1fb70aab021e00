//! State module for tracking crawl progress
//!
//! The visited set only answers "was a fetch attempted?". This module keeps
//! the richer per-URL history next to it so that "attempted" and "succeeded"
//! stay distinguishable in the final report.
//!
//! # Components
//!
//! - `PageOutcome`: What happened when a page was fetched
//! - `FailureKind`: Category of a failed fetch
//! - `PageRecord`: One fetch attempt, in attempt order

mod page_state;

// Re-export main types
pub use page_state::{FailureKind, PageOutcome, PageRecord};
