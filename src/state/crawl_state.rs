//! Crawl state definitions for classifying crawl job lifecycle phases
//!
//! This module defines all possible states a crawl job can be in, as reported
//! by the orchestration system, and partitions them into active and inactive.

use crate::StateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents the lifecycle state of a crawl job
///
/// States are defined and transitioned by the external orchestration system;
/// this type mirrors its wire labels exactly (the serde representation is the
/// label itself). Each state is either active (the job is still consuming
/// resources or progressing) or inactive (terminal, regardless of outcome).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrawlState {
    // ===== Active States =====
    /// Crawl is being set up
    Starting,

    /// Crawl is queued behind the organization's concurrent-crawl limit
    WaitingOrgLimit,

    /// Crawl is queued until crawler capacity frees up
    WaitingCapacity,

    /// Crawl is actively running
    Running,

    /// Crawl has been told to stop and is winding down
    Stopping,

    // ===== Inactive (Terminal) States =====
    /// Crawl finished normally
    Complete,

    /// Crawl was canceled
    Canceled,

    /// Crawl was stopped early but kept the pages it had captured
    PartialComplete,

    /// Crawl hit its time limit
    TimedOut,

    /// Crawl failed
    Failed,
}

/// The active states, in display order
pub const ACTIVE_CRAWL_STATES: [CrawlState; 5] = [
    CrawlState::Starting,
    CrawlState::WaitingOrgLimit,
    CrawlState::WaitingCapacity,
    CrawlState::Running,
    CrawlState::Stopping,
];

/// The inactive states, in display order
pub const INACTIVE_CRAWL_STATES: [CrawlState; 5] = [
    CrawlState::Complete,
    CrawlState::Canceled,
    CrawlState::PartialComplete,
    CrawlState::TimedOut,
    CrawlState::Failed,
];

impl CrawlState {
    /// Returns true if the crawl is still consuming resources or progressing
    ///
    /// Membership in the active set, not table position, determines the
    /// answer.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            Self::Starting
                | Self::WaitingOrgLimit
                | Self::WaitingCapacity
                | Self::Running
                | Self::Stopping
        )
    }

    /// Returns true if the crawl has stopped making progress, whatever the
    /// outcome
    pub fn is_inactive(&self) -> bool {
        !self.is_active()
    }

    /// Converts the state to its wire label
    ///
    /// This is the exact label the orchestration system reports.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Starting => "starting",
            Self::WaitingOrgLimit => "waiting_org_limit",
            Self::WaitingCapacity => "waiting_capacity",
            Self::Running => "running",
            Self::Stopping => "stopping",
            Self::Complete => "complete",
            Self::Canceled => "canceled",
            Self::PartialComplete => "partial_complete",
            Self::TimedOut => "timed_out",
            Self::Failed => "failed",
        }
    }

    /// Returns all known states in declaration order
    pub fn all_states() -> Vec<Self> {
        ACTIVE_CRAWL_STATES
            .iter()
            .chain(INACTIVE_CRAWL_STATES.iter())
            .copied()
            .collect()
    }
}

impl FromStr for CrawlState {
    type Err = StateError;

    /// Parses a wire label, rejecting anything outside the known set
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "starting" => Ok(Self::Starting),
            "waiting_org_limit" => Ok(Self::WaitingOrgLimit),
            "waiting_capacity" => Ok(Self::WaitingCapacity),
            "running" => Ok(Self::Running),
            "stopping" => Ok(Self::Stopping),
            "complete" => Ok(Self::Complete),
            "canceled" => Ok(Self::Canceled),
            "partial_complete" => Ok(Self::PartialComplete),
            "timed_out" => Ok(Self::TimedOut),
            "failed" => Ok(Self::Failed),
            _ => Err(StateError::UnknownLabel(s.to_string())),
        }
    }
}

impl fmt::Display for CrawlState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}
