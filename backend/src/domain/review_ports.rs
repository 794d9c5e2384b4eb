//! Port and runtime bundles shared by the reviewer-assignment services.

use std::sync::Arc;

use mockable::Clock;
use tracing::error;

use super::ports::{
    PullRequestRepository, PullRequestRepositoryError, ReviewerRandomizer, TeamRepository,
    TeamRepositoryError, UserRepository, UserRepositoryError,
};
use super::{PullRequest, PullRequestId, ReviewError, Team, TeamName, User, UserId};

/// Storage ports required by the services.
#[derive(Clone)]
pub struct ReviewStorePorts {
    pub users: Arc<dyn UserRepository>,
    pub teams: Arc<dyn TeamRepository>,
    pub pull_requests: Arc<dyn PullRequestRepository>,
}

impl ReviewStorePorts {
    /// Build a strongly-typed port bundle.
    pub fn new(
        users: Arc<dyn UserRepository>,
        teams: Arc<dyn TeamRepository>,
        pull_requests: Arc<dyn PullRequestRepository>,
    ) -> Self {
        Self {
            users,
            teams,
            pull_requests,
        }
    }

    /// Load a user or fail with [`ReviewError::UserNotFound`].
    pub(crate) async fn require_user(&self, user_id: &UserId) -> Result<User, ReviewError> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| ReviewError::UserNotFound {
                user_id: user_id.clone(),
            })
    }

    /// Load a team or fail with [`ReviewError::TeamNotFound`].
    pub(crate) async fn require_team(&self, team_name: &TeamName) -> Result<Team, ReviewError> {
        self.teams
            .find_by_name(team_name)
            .await
            .map_err(map_team_error)?
            .ok_or_else(|| ReviewError::TeamNotFound {
                team_name: team_name.clone(),
            })
    }

    /// Load a pull request or fail with [`ReviewError::PullRequestNotFound`].
    pub(crate) async fn require_pull_request(
        &self,
        pr_id: &PullRequestId,
    ) -> Result<PullRequest, ReviewError> {
        self.pull_requests
            .find_by_id(pr_id)
            .await
            .map_err(map_pull_request_error)?
            .ok_or_else(|| ReviewError::PullRequestNotFound {
                pr_id: pr_id.clone(),
            })
    }
}

/// Time and randomness sources.
#[derive(Clone)]
pub struct ReviewRuntime {
    pub clock: Arc<dyn Clock>,
    pub randomizer: Arc<dyn ReviewerRandomizer>,
}

impl ReviewRuntime {
    pub fn new(clock: Arc<dyn Clock>, randomizer: Arc<dyn ReviewerRandomizer>) -> Self {
        Self { clock, randomizer }
    }
}

pub(crate) fn map_user_error(err: UserRepositoryError) -> ReviewError {
    match err {
        UserRepositoryError::Missing { user_id } => ReviewError::UserNotFound { user_id },
        other => storage_failure("users", other),
    }
}

pub(crate) fn map_team_error(err: TeamRepositoryError) -> ReviewError {
    match err {
        TeamRepositoryError::Duplicate { team_name } => ReviewError::TeamExists { team_name },
        TeamRepositoryError::Missing { user_id } => ReviewError::UserNotFound { user_id },
        other => storage_failure("teams", other),
    }
}

pub(crate) fn map_pull_request_error(err: PullRequestRepositoryError) -> ReviewError {
    match err {
        PullRequestRepositoryError::Duplicate { pr_id } => ReviewError::PullRequestExists { pr_id },
        PullRequestRepositoryError::Missing { pr_id } => ReviewError::PullRequestNotFound { pr_id },
        other => storage_failure("pull_requests", other),
    }
}

fn storage_failure(collection: &'static str, err: impl std::error::Error) -> ReviewError {
    error!(collection, error = %err, "storage operation failed");
    ReviewError::storage(err.to_string())
}
