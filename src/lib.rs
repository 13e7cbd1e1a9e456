//! Crawlstate: crawl lifecycle state classification
//!
//! This crate defines the closed set of lifecycle states a crawl job can be
//! in and classifies each state as active or inactive. States are produced
//! and transitioned by an external crawl-orchestration system; this crate
//! agrees with it on the exact wire labels and answers membership questions.

pub mod state;

use thiserror::Error;

/// Main error type for crawlstate operations
#[derive(Debug, Error)]
pub enum StateError {
    #[error("unknown crawl state label: {0}")]
    UnknownLabel(String),
}

/// Result type alias for crawlstate operations
pub type Result<T> = std::result::Result<T, StateError>;

// Re-export commonly used types
pub use state::{CrawlState, ACTIVE_CRAWL_STATES, INACTIVE_CRAWL_STATES};
