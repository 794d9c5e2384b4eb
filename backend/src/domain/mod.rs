//! Domain primitives, aggregates and services.
//!
//! Purpose: model users, teams and pull requests together with the reviewer
//! assignment rules that operate on them. Services implement the driving
//! ports in [`ports`] and reach storage only through the driven ports.
//!
//! Public surface:
//! - Error (alias to `error::Error`) - API error response payload.
//! - ReviewError - typed failure of a reviewer-assignment operation.
//! - User, Team, PullRequest - aggregates with validated identifiers.
//! - PullRequestService, TeamService, UserService, ReviewStatsService -
//!   driving port implementations.

pub mod error;
pub mod ports;
pub mod user;

mod candidates;
mod deactivation_cascade;
mod identifiers;
mod pull_request;
mod pull_request_service;
mod review_error;
mod review_ports;
mod review_stats_service;
mod team;
mod team_service;
mod trace_id;
mod user_service;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use self::candidates::CandidatePool;
pub use self::deactivation_cascade::DeactivationCascade;
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::identifiers::{IdentifierValidationError, PullRequestId, TeamName, UserId};
pub use self::pull_request::{MAX_REVIEWERS, PullRequest, PullRequestDraft, PullRequestStatus};
pub use self::pull_request_service::PullRequestService;
pub use self::review_error::{ReviewError, ReviewErrorKind};
pub use self::review_ports::{ReviewRuntime, ReviewStorePorts};
pub use self::review_stats_service::ReviewStatsService;
pub use self::team::{Team, TeamMember, TeamValidationError};
pub use self::team_service::TeamService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{User, UserValidationError};
pub use self::user_service::UserService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use reviewer_service::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::unauthorized("missing token"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
