//! Driving port for pull request reads.

use async_trait::async_trait;

use crate::domain::{PullRequest, ReviewError, UserId};

/// Domain use-case port for listing pull requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestQuery: Send + Sync {
    /// Every pull request, newest first.
    async fn list_pull_requests(&self) -> Result<Vec<PullRequest>, ReviewError>;

    /// Pull requests of any status reviewed by `user_id`, newest first.
    ///
    /// Unknown users yield an empty list.
    async fn list_reviews_for(&self, user_id: &UserId) -> Result<Vec<PullRequest>, ReviewError>;
}
