//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`ReviewerRandomizer`]) are implemented by
//! outbound adapters. Driving ports (`*Command`, `*Query`) are implemented by
//! domain services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod pull_request_command;
mod pull_request_query;
mod pull_request_repository;
mod review_stats_query;
mod reviewer_randomizer;
mod team_command;
mod team_query;
mod team_repository;
mod user_command;
mod user_repository;
mod users_query;

#[cfg(test)]
pub use pull_request_command::MockPullRequestCommand;
pub use pull_request_command::{
    AddReviewerRequest, CreatePullRequestRequest, PullRequestCommand, ReassignReviewerRequest,
    ReassignReviewerResponse,
};
#[cfg(test)]
pub use pull_request_query::MockPullRequestQuery;
pub use pull_request_query::PullRequestQuery;
#[cfg(test)]
pub use pull_request_repository::MockPullRequestRepository;
pub use pull_request_repository::{PullRequestRepository, PullRequestRepositoryError};
#[cfg(test)]
pub use review_stats_query::MockReviewStatsQuery;
pub use review_stats_query::{ReviewStats, ReviewStatsQuery, ReviewerStats};
pub use reviewer_randomizer::{FixtureReviewerRandomizer, ReviewerRandomizer};
#[cfg(test)]
pub use team_command::MockTeamCommand;
pub use team_command::{CreateTeamRequest, DeactivationOutcome, TeamCommand};
#[cfg(test)]
pub use team_query::MockTeamQuery;
pub use team_query::TeamQuery;
#[cfg(test)]
pub use team_repository::MockTeamRepository;
pub use team_repository::{TeamRepository, TeamRepositoryError};
#[cfg(test)]
pub use user_command::MockUserCommand;
pub use user_command::UserCommand;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
