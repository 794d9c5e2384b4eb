//! Driving port for assignment statistics.

use async_trait::async_trait;

use crate::domain::{ReviewError, TeamName, UserId};

/// Aggregate counters over every stored pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewStats {
    pub total_pull_requests: usize,
    pub open_pull_requests: usize,
    pub merged_pull_requests: usize,
    /// Number of users holding at least one assignment.
    pub distinct_reviewers: usize,
    /// Per-reviewer breakdown ordered by user id; reviewers without a user
    /// record are counted above but not listed.
    pub reviewers: Vec<ReviewerStats>,
}

/// Assignment counters for one reviewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewerStats {
    pub user_id: UserId,
    pub name: String,
    pub team_name: TeamName,
    pub assigned: usize,
    pub open: usize,
    pub merged: usize,
}

/// Domain use-case port for review statistics.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewStatsQuery: Send + Sync {
    async fn stats(&self) -> Result<ReviewStats, ReviewError>;
}
