//! Driving port for team reads.

use async_trait::async_trait;

use crate::domain::{ReviewError, Team, TeamName};

/// Domain use-case port for team lookups.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamQuery: Send + Sync {
    /// Team with its current members.
    async fn get_team(&self, team_name: &TeamName) -> Result<Team, ReviewError>;

    /// Every team ordered by name.
    async fn list_teams(&self) -> Result<Vec<Team>, ReviewError>;
}
