//! In-process storage adapter for users, teams and pull requests.
//!
//! Each collection sits behind its own [`RwLock`]; no method holds two
//! collection locks at the same time. Teams keep only member identifiers and
//! resolve them through the user collection on every read, so activity flags
//! are always current. A user who has since joined another team no longer
//! appears in the roster they left.

use std::cmp::Reverse;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    PullRequestRepository, PullRequestRepositoryError, TeamRepository, TeamRepositoryError,
    UserRepository, UserRepositoryError,
};
use crate::domain::{PullRequest, PullRequestId, Team, TeamName, User, UserId};

/// Shared store implementing every storage port.
#[derive(Debug, Default)]
pub struct InMemoryReviewStore {
    users: RwLock<BTreeMap<UserId, User>>,
    teams: RwLock<BTreeMap<TeamName, Vec<UserId>>>,
    pull_requests: RwLock<BTreeMap<PullRequestId, PullRequest>>,
}

impl InMemoryReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve stored member ids into users; the team lock is released first.
    ///
    /// Membership follows each user's current `team_name`.
    fn resolve_team(
        &self,
        name: TeamName,
        member_ids: Vec<UserId>,
    ) -> Result<Team, TeamRepositoryError> {
        let users = read_guard(&self.users, "user").map_err(TeamRepositoryError::query)?;
        let mut members = Vec::with_capacity(member_ids.len());
        for id in member_ids {
            let user = users
                .get(&id)
                .ok_or_else(|| TeamRepositoryError::missing(id.clone()))?;
            if user.team_name() == &name {
                members.push(user.clone());
            }
        }
        Ok(Team::from_users(name, members))
    }
}

fn read_guard<'a, T>(
    lock: &'a RwLock<T>,
    collection: &str,
) -> Result<RwLockReadGuard<'a, T>, String> {
    lock.read()
        .map_err(|_| format!("{collection} collection lock poisoned"))
}

fn write_guard<'a, T>(
    lock: &'a RwLock<T>,
    collection: &str,
) -> Result<RwLockWriteGuard<'a, T>, String> {
    lock.write()
        .map_err(|_| format!("{collection} collection lock poisoned"))
}

fn newest_first(mut prs: Vec<PullRequest>) -> Vec<PullRequest> {
    prs.sort_by(|a, b| {
        (Reverse(a.created_at()), a.id()).cmp(&(Reverse(b.created_at()), b.id()))
    });
    prs
}

#[async_trait]
impl UserRepository for InMemoryReviewStore {
    async fn create(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = write_guard(&self.users, "user").map_err(UserRepositoryError::query)?;
        if users.contains_key(user.id()) {
            return Err(UserRepositoryError::duplicate(user.id().clone()));
        }
        users.insert(user.id().clone(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let users = read_guard(&self.users, "user").map_err(UserRepositoryError::query)?;
        Ok(users.get(id).cloned())
    }

    async fn update(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut users = write_guard(&self.users, "user").map_err(UserRepositoryError::query)?;
        match users.get_mut(user.id()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(UserRepositoryError::missing(user.id().clone())),
        }
    }

    async fn list(&self) -> Result<Vec<User>, UserRepositoryError> {
        let users = read_guard(&self.users, "user").map_err(UserRepositoryError::query)?;
        Ok(users.values().cloned().collect())
    }
}

#[async_trait]
impl TeamRepository for InMemoryReviewStore {
    async fn create(&self, team: &Team) -> Result<(), TeamRepositoryError> {
        let mut teams = write_guard(&self.teams, "team").map_err(TeamRepositoryError::query)?;
        if teams.contains_key(team.name()) {
            return Err(TeamRepositoryError::duplicate(team.name().clone()));
        }
        let member_ids = team.members().iter().map(|user| user.id().clone()).collect();
        teams.insert(team.name().clone(), member_ids);
        Ok(())
    }

    async fn find_by_name(&self, name: &TeamName) -> Result<Option<Team>, TeamRepositoryError> {
        let member_ids = {
            let teams = read_guard(&self.teams, "team").map_err(TeamRepositoryError::query)?;
            teams.get(name).cloned()
        };
        member_ids
            .map(|ids| self.resolve_team(name.clone(), ids))
            .transpose()
    }

    async fn list(&self) -> Result<Vec<Team>, TeamRepositoryError> {
        let stored: Vec<(TeamName, Vec<UserId>)> = {
            let teams = read_guard(&self.teams, "team").map_err(TeamRepositoryError::query)?;
            teams
                .iter()
                .map(|(name, ids)| (name.clone(), ids.clone()))
                .collect()
        };
        stored
            .into_iter()
            .map(|(name, ids)| self.resolve_team(name, ids))
            .collect()
    }
}

#[async_trait]
impl PullRequestRepository for InMemoryReviewStore {
    async fn create(&self, pr: &PullRequest) -> Result<(), PullRequestRepositoryError> {
        let mut prs = write_guard(&self.pull_requests, "pull request")
            .map_err(PullRequestRepositoryError::query)?;
        if prs.contains_key(pr.id()) {
            return Err(PullRequestRepositoryError::duplicate(pr.id().clone()));
        }
        prs.insert(pr.id().clone(), pr.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &PullRequestId,
    ) -> Result<Option<PullRequest>, PullRequestRepositoryError> {
        let prs = read_guard(&self.pull_requests, "pull request")
            .map_err(PullRequestRepositoryError::query)?;
        Ok(prs.get(id).cloned())
    }

    async fn update(&self, pr: &PullRequest) -> Result<(), PullRequestRepositoryError> {
        let mut prs = write_guard(&self.pull_requests, "pull request")
            .map_err(PullRequestRepositoryError::query)?;
        match prs.get_mut(pr.id()) {
            Some(stored) => {
                *stored = pr.clone();
                Ok(())
            }
            None => Err(PullRequestRepositoryError::missing(pr.id().clone())),
        }
    }

    async fn list(&self) -> Result<Vec<PullRequest>, PullRequestRepositoryError> {
        let prs = read_guard(&self.pull_requests, "pull request")
            .map_err(PullRequestRepositoryError::query)?;
        Ok(newest_first(prs.values().cloned().collect()))
    }

    async fn list_by_reviewer(
        &self,
        reviewer_id: &UserId,
    ) -> Result<Vec<PullRequest>, PullRequestRepositoryError> {
        let prs = read_guard(&self.pull_requests, "pull request")
            .map_err(PullRequestRepositoryError::query)?;
        let matching = prs
            .values()
            .filter(|pr| pr.has_reviewer(reviewer_id))
            .cloned()
            .collect();
        Ok(newest_first(matching))
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
