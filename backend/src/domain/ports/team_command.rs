//! Driving port for team mutations.

use async_trait::async_trait;

use crate::domain::{ReviewError, Team, TeamName};

/// Request to create a team and upsert its members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTeamRequest {
    /// Validated team; member ids are unique within it.
    pub team: Team,
}

/// Counters reported by a team deactivation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeactivationOutcome {
    /// Members switched from active to inactive.
    pub deactivated_count: usize,
    /// Open pull requests whose reviewer list was repaired.
    pub reassigned_count: usize,
}

/// Domain use-case port for team administration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamCommand: Send + Sync {
    /// Create a team; members are created or overwritten.
    async fn create_team(&self, request: CreateTeamRequest) -> Result<Team, ReviewError>;

    /// Deactivate every active member and repair affected open pull requests.
    async fn deactivate_team(&self, team_name: &TeamName)
    -> Result<DeactivationOutcome, ReviewError>;
}
