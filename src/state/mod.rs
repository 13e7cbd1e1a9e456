//! State module for crawl lifecycle classification
//!
//! This module provides the closed enumeration of crawl job states and the
//! active/inactive partition over it.
//!
//! # Components
//!
//! - `CrawlState`: the lifecycle state of a crawl job, as reported by the
//!   orchestration system
//! - `ACTIVE_CRAWL_STATES` / `INACTIVE_CRAWL_STATES`: the two ordered
//!   partitions of the known states

mod crawl_state;

// Re-export main types
pub use crawl_state::{CrawlState, ACTIVE_CRAWL_STATES, INACTIVE_CRAWL_STATES};
