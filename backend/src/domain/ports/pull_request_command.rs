//! Driving port for pull request mutations.
//!
//! Inbound adapters validate raw identifiers into domain types and call this
//! port to open, merge and re-staff pull requests.

use async_trait::async_trait;

use crate::domain::{PullRequest, PullRequestId, ReviewError, UserId};

/// Request to open a pull request and auto-assign reviewers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePullRequestRequest {
    pub pr_id: PullRequestId,
    pub title: String,
    pub author_id: UserId,
}

/// Request to swap one reviewer for another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignReviewerRequest {
    pub pr_id: PullRequestId,
    pub old_reviewer_id: UserId,
    /// Explicit replacement; a random eligible team mate is used when absent.
    pub new_reviewer_id: Option<UserId>,
}

/// Outcome of a reviewer swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReassignReviewerResponse {
    pub pull_request: PullRequest,
    pub replaced_by: UserId,
}

/// Request to add a named reviewer to a pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddReviewerRequest {
    pub pr_id: PullRequestId,
    pub user_id: UserId,
}

/// Domain use-case port for pull request lifecycle changes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestCommand: Send + Sync {
    /// Open a pull request with up to two reviewers from the author's team.
    async fn create_pull_request(
        &self,
        request: CreatePullRequestRequest,
    ) -> Result<PullRequest, ReviewError>;

    /// Mark a pull request as merged; repeated calls return the stored state.
    async fn merge_pull_request(&self, pr_id: &PullRequestId) -> Result<PullRequest, ReviewError>;

    /// Replace a reviewer on an open pull request.
    async fn reassign_reviewer(
        &self,
        request: ReassignReviewerRequest,
    ) -> Result<ReassignReviewerResponse, ReviewError>;

    /// Add a specific team member as reviewer.
    async fn add_reviewer(&self, request: AddReviewerRequest) -> Result<PullRequest, ReviewError>;
}
