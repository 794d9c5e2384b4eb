//! Port for team persistence.

use async_trait::async_trait;

use crate::domain::{Team, TeamName, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by team repository adapters.
    pub enum TeamRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "team repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "team repository query failed: {message}",
        /// A team with the same name is already stored.
        Duplicate { team_name: TeamName } => "team {team_name} already exists",
        /// A member listed by the team could not be resolved.
        Missing { user_id: UserId } => "team member {user_id} does not exist",
    }
}

/// Port for storing teams and resolving their member rosters.
///
/// Adapters store the member identifiers only; reads resolve every member
/// through the user collection so activity flags are always current.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a team, rejecting duplicate names.
    async fn create(&self, team: &Team) -> Result<(), TeamRepositoryError>;

    /// Fetch a team with its resolved members.
    async fn find_by_name(&self, name: &TeamName) -> Result<Option<Team>, TeamRepositoryError>;

    /// Every stored team ordered by name.
    async fn list(&self) -> Result<Vec<Team>, TeamRepositoryError>;
}
