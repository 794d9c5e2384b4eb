//! Team administration service.
//!
//! Implements [`TeamCommand`] and [`TeamQuery`]. Deactivation is delegated to
//! the [`DeactivationCascade`].

use async_trait::async_trait;
use tracing::{info, warn};

use super::deactivation_cascade::DeactivationCascade;
use super::ports::{CreateTeamRequest, DeactivationOutcome, TeamCommand, TeamQuery};
use super::review_ports::{ReviewRuntime, ReviewStorePorts, map_team_error, map_user_error};
use super::{ReviewError, Team, TeamName, User};

/// Service implementing the team driving ports.
#[derive(Clone)]
pub struct TeamService {
    ports: ReviewStorePorts,
    cascade: DeactivationCascade,
}

impl TeamService {
    pub fn new(ports: ReviewStorePorts, runtime: ReviewRuntime) -> Self {
        let cascade = DeactivationCascade::new(ports.clone(), runtime);
        Self { ports, cascade }
    }

    /// Create the user or overwrite its name, team and activity.
    async fn upsert_member(&self, member: &User) -> Result<(), ReviewError> {
        let existing = self
            .ports
            .users
            .find_by_id(member.id())
            .await
            .map_err(map_user_error)?;
        if existing.is_some() {
            self.ports
                .users
                .update(member)
                .await
                .map_err(map_user_error)?;
            info!(user_id = %member.id(), team_name = %member.team_name(), "updated team member");
        } else {
            self.ports
                .users
                .create(member)
                .await
                .map_err(map_user_error)?;
            info!(user_id = %member.id(), team_name = %member.team_name(), "created team member");
        }
        Ok(())
    }
}

#[async_trait]
impl TeamCommand for TeamService {
    async fn create_team(&self, request: CreateTeamRequest) -> Result<Team, ReviewError> {
        let CreateTeamRequest { team } = request;
        info!(team_name = %team.name(), members = team.members().len(), "creating team");

        let existing = self
            .ports
            .teams
            .find_by_name(team.name())
            .await
            .map_err(map_team_error)?;
        if existing.is_some() {
            let err = ReviewError::TeamExists {
                team_name: team.name().clone(),
            };
            warn!(team_name = %team.name(), code = err.code(), "team already exists");
            return Err(err);
        }

        for member in team.members() {
            self.upsert_member(member).await?;
        }
        self.ports
            .teams
            .create(&team)
            .await
            .map_err(map_team_error)?;

        info!(team_name = %team.name(), "team created");
        Ok(team)
    }

    async fn deactivate_team(
        &self,
        team_name: &TeamName,
    ) -> Result<DeactivationOutcome, ReviewError> {
        self.cascade.run(team_name).await
    }
}

#[async_trait]
impl TeamQuery for TeamService {
    async fn get_team(&self, team_name: &TeamName) -> Result<Team, ReviewError> {
        self.ports.require_team(team_name).await
    }

    async fn list_teams(&self) -> Result<Vec<Team>, ReviewError> {
        self.ports.teams.list().await.map_err(map_team_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::FixtureReviewerRandomizer;
    use crate::domain::test_fixtures::{MockStore, runtime, team, team_name, uid, user};
    use crate::domain::TeamMember;

    fn member(id: &str, name: &str, is_active: bool) -> TeamMember {
        TeamMember {
            user_id: uid(id),
            name: name.to_owned(),
            is_active,
        }
    }

    fn service(store: MockStore) -> TeamService {
        TeamService::new(store.into_ports(), runtime(FixtureReviewerRandomizer))
    }

    #[tokio::test]
    async fn create_team_creates_new_and_updates_existing_members() {
        let mut store = MockStore::default()
            .with_users(vec![user("u2", "legacy", false)])
            .with_teams(Vec::new());
        store
            .users
            .expect_create()
            .withf(|user| user.id().as_str() == "u1")
            .times(1)
            .returning(|_| Ok(()));
        store
            .users
            .expect_update()
            .withf(|user| {
                user.id().as_str() == "u2"
                    && user.team_name().as_str() == "backend"
                    && user.is_active()
                    && user.name() == "Bob"
            })
            .times(1)
            .returning(|_| Ok(()));
        store.teams.expect_create().times(1).returning(|_| Ok(()));

        let team = Team::new(
            team_name("backend"),
            vec![member("u1", "Alice", true), member("u2", "Bob", true)],
        )
        .expect("valid team");
        let created = service(store)
            .create_team(CreateTeamRequest { team })
            .await
            .expect("created");

        let ids: Vec<&str> = created
            .members()
            .iter()
            .map(|user| user.id().as_str())
            .collect();
        assert_eq!(ids, ["u1", "u2"]);
    }

    #[tokio::test]
    async fn create_team_rejects_taken_name() {
        let mut store =
            MockStore::default().with_teams(vec![team("backend", &[("u1", true)])]);
        store.users.expect_create().never();
        store.teams.expect_create().never();

        let team = Team::new(team_name("backend"), vec![member("u9", "Zed", true)])
            .expect("valid team");
        let err = service(store)
            .create_team(CreateTeamRequest { team })
            .await
            .expect_err("taken");

        assert_eq!(
            err,
            ReviewError::TeamExists {
                team_name: team_name("backend"),
            }
        );
    }

    #[tokio::test]
    async fn get_team_reports_missing_team() {
        let store = MockStore::default().with_teams(Vec::new());

        let err = service(store)
            .get_team(&team_name("ghost"))
            .await
            .expect_err("missing");

        assert!(matches!(err, ReviewError::TeamNotFound { .. }));
    }

    #[tokio::test]
    async fn deactivate_team_runs_cascade() {
        let mut store = MockStore::default()
            .with_teams(vec![team("idle", &[("i1", false)])]);
        store.users.expect_update().never();

        let outcome = service(store)
            .deactivate_team(&team_name("idle"))
            .await
            .expect("cascade");

        assert_eq!(outcome, DeactivationOutcome::default());
    }

    #[tokio::test]
    async fn list_teams_passes_through() {
        let mut store = MockStore::default();
        store
            .teams
            .expect_list()
            .times(1)
            .returning(|| Ok(vec![team("backend", &[("u1", true)])]));

        let teams = service(store).list_teams().await.expect("listed");

        assert_eq!(teams.len(), 1);
    }
}
