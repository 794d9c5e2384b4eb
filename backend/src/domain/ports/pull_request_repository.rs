//! Port for pull request persistence.

use async_trait::async_trait;

use crate::domain::{PullRequest, PullRequestId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by pull request repository adapters.
    pub enum PullRequestRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "pull request repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "pull request repository query failed: {message}",
        /// A pull request with the same identifier is already stored.
        Duplicate { pr_id: PullRequestId } => "pull request {pr_id} already exists",
        /// The pull request to update is not stored.
        Missing { pr_id: PullRequestId } => "pull request {pr_id} does not exist",
    }
}

/// Port for reading and writing pull requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PullRequestRepository: Send + Sync {
    /// Insert a new pull request.
    async fn create(&self, pr: &PullRequest) -> Result<(), PullRequestRepositoryError>;

    /// Fetch a pull request by identifier.
    async fn find_by_id(
        &self,
        id: &PullRequestId,
    ) -> Result<Option<PullRequest>, PullRequestRepositoryError>;

    /// Overwrite an existing pull request.
    async fn update(&self, pr: &PullRequest) -> Result<(), PullRequestRepositoryError>;

    /// Every stored pull request, newest first.
    async fn list(&self) -> Result<Vec<PullRequest>, PullRequestRepositoryError>;

    /// Pull requests of any status listing `reviewer_id`, newest first.
    async fn list_by_reviewer(
        &self,
        reviewer_id: &UserId,
    ) -> Result<Vec<PullRequest>, PullRequestRepositoryError>;
}
