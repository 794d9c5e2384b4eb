//! Failures raised by reviewer-assignment use cases.
//!
//! Services return [`ReviewError`] so callers can branch on the failure
//! category via [`ReviewError::kind`]. Inbound adapters convert it into the
//! transport-agnostic [`Error`] payload, which keeps the stable code in the
//! `details` object.

use serde_json::json;

use super::{Error, PullRequestId, TeamName, UserId};

/// Failure categories used by adapters to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewErrorKind {
    /// A user, team or pull request does not exist.
    NotFound,
    /// A team or pull request with the same key already exists.
    AlreadyExists,
    /// The entity is in a state that forbids the requested change.
    InvalidState,
    /// No eligible reviewer could be found.
    NoCandidate,
    /// The named reviewer is inactive.
    ReviewerInactive,
    /// A storage collaborator failed.
    StorageFailure,
}

/// Typed failure of a reviewer-assignment operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReviewError {
    #[error("user {user_id} not found")]
    UserNotFound { user_id: UserId },
    #[error("team {team_name} not found")]
    TeamNotFound { team_name: TeamName },
    #[error("pull request {pr_id} not found")]
    PullRequestNotFound { pr_id: PullRequestId },
    #[error("team {team_name} already exists")]
    TeamExists { team_name: TeamName },
    #[error("pull request {pr_id} already exists")]
    PullRequestExists { pr_id: PullRequestId },
    #[error("pull request {pr_id} is already merged")]
    PullRequestMerged { pr_id: PullRequestId },
    #[error("user {user_id} is already a reviewer")]
    ReviewerAlreadyAdded { user_id: UserId },
    #[error("user {user_id} is the author of the pull request")]
    ReviewerIsAuthor { user_id: UserId },
    #[error("pull request {pr_id} already has the maximum number of reviewers")]
    ReviewerLimitReached { pr_id: PullRequestId },
    #[error("user {user_id} is not assigned to this pull request")]
    ReviewerNotAssigned { user_id: UserId },
    #[error("user {user_id} is not a member of team {team_name}")]
    ReviewerNotInTeam { user_id: UserId, team_name: TeamName },
    #[error("no active replacement candidate in team")]
    NoReviewerCandidates,
    #[error("user {user_id} is inactive")]
    ReviewerInactive { user_id: UserId },
    #[error("storage failure: {message}")]
    Storage { message: String },
}

impl ReviewError {
    /// Wrap a storage failure, keeping the adapter message for diagnostics.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Failure category of this error.
    pub fn kind(&self) -> ReviewErrorKind {
        match self {
            Self::UserNotFound { .. }
            | Self::TeamNotFound { .. }
            | Self::PullRequestNotFound { .. } => ReviewErrorKind::NotFound,
            Self::TeamExists { .. } | Self::PullRequestExists { .. } => {
                ReviewErrorKind::AlreadyExists
            }
            Self::PullRequestMerged { .. }
            | Self::ReviewerAlreadyAdded { .. }
            | Self::ReviewerIsAuthor { .. }
            | Self::ReviewerLimitReached { .. }
            | Self::ReviewerNotAssigned { .. }
            | Self::ReviewerNotInTeam { .. } => ReviewErrorKind::InvalidState,
            Self::NoReviewerCandidates => ReviewErrorKind::NoCandidate,
            Self::ReviewerInactive { .. } => ReviewErrorKind::ReviewerInactive,
            Self::Storage { .. } => ReviewErrorKind::StorageFailure,
        }
    }

    /// Stable machine-readable code reported to clients.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound { .. }
            | Self::TeamNotFound { .. }
            | Self::PullRequestNotFound { .. } => "NOT_FOUND",
            Self::TeamExists { .. } => "TEAM_EXISTS",
            Self::PullRequestExists { .. } => "PR_EXISTS",
            Self::PullRequestMerged { .. } => "PR_MERGED",
            Self::ReviewerAlreadyAdded { .. } => "REVIEWER_ALREADY_ADDED",
            Self::ReviewerIsAuthor { .. } => "REVIEWER_IS_AUTHOR",
            Self::ReviewerLimitReached { .. } => "REVIEWER_LIMIT_REACHED",
            Self::ReviewerNotAssigned { .. } => "NOT_ASSIGNED",
            Self::ReviewerNotInTeam { .. } => "REVIEWER_NOT_IN_TEAM",
            Self::NoReviewerCandidates => "NO_CANDIDATE",
            Self::ReviewerInactive { .. } => "REVIEWER_INACTIVE",
            Self::Storage { .. } => "INTERNAL",
        }
    }
}

impl From<ReviewError> for Error {
    fn from(value: ReviewError) -> Self {
        let details = json!({ "code": value.code() });
        let error = match value.kind() {
            ReviewErrorKind::NotFound => Error::not_found(value.to_string()),
            ReviewErrorKind::AlreadyExists
            | ReviewErrorKind::InvalidState
            | ReviewErrorKind::NoCandidate
            | ReviewErrorKind::ReviewerInactive => Error::conflict(value.to_string()),
            ReviewErrorKind::StorageFailure => Error::internal(value.to_string()),
        };
        error.with_details(details)
    }
}
