//! Builders and mock bundles shared by the domain service tests.

use std::sync::Arc;

use crate::domain::ports::{
    MockPullRequestRepository, MockTeamRepository, MockUserRepository, ReviewerRandomizer,
};
use crate::domain::review_ports::{ReviewRuntime, ReviewStorePorts};
use crate::domain::{
    PullRequest, PullRequestDraft, PullRequestId, Team, TeamName, User, UserId,
};
use crate::test_support::{MutableClock, fixture_timestamp};

pub(crate) fn uid(raw: &str) -> UserId {
    UserId::new(raw).expect("user id")
}

pub(crate) fn team_name(raw: &str) -> TeamName {
    TeamName::new(raw).expect("team name")
}

pub(crate) fn pr_id(raw: &str) -> PullRequestId {
    PullRequestId::new(raw).expect("pull request id")
}

pub(crate) fn user(id: &str, team: &str, is_active: bool) -> User {
    User::new(uid(id), format!("User {id}"), team_name(team), is_active).expect("user")
}

/// Team whose members are `(id, is_active)` pairs.
pub(crate) fn team(name: &str, members: &[(&str, bool)]) -> Team {
    let users = members
        .iter()
        .map(|(id, active)| user(id, name, *active))
        .collect();
    Team::from_users(team_name(name), users)
}

pub(crate) fn open_pr(id: &str, author: &str, team: &str, reviewers: &[&str]) -> PullRequest {
    PullRequest::open(PullRequestDraft {
        id: pr_id(id),
        title: format!("Change {id}"),
        author_id: uid(author),
        team_name: team_name(team),
        reviewers: reviewers.iter().copied().map(uid).collect(),
        created_at: fixture_timestamp(),
    })
    .expect("valid pull request")
}

pub(crate) fn reviewer_ids(pr: &PullRequest) -> Vec<&str> {
    pr.reviewers().iter().map(UserId::as_str).collect()
}

/// Mock repositories that can be configured before building the ports.
#[derive(Default)]
pub(crate) struct MockStore {
    pub users: MockUserRepository,
    pub teams: MockTeamRepository,
    pub pull_requests: MockPullRequestRepository,
}

impl MockStore {
    /// Serve user lookups from a fixed list.
    pub(crate) fn with_users(mut self, users: Vec<User>) -> Self {
        self.users
            .expect_find_by_id()
            .returning(move |id| Ok(users.iter().find(|user| user.id() == id).cloned()));
        self
    }

    /// Serve team lookups from a fixed list.
    pub(crate) fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams
            .expect_find_by_name()
            .returning(move |name| Ok(teams.iter().find(|team| team.name() == name).cloned()));
        self
    }

    /// Serve pull request lookups from a fixed list.
    pub(crate) fn with_pull_requests(mut self, prs: Vec<PullRequest>) -> Self {
        self.pull_requests
            .expect_find_by_id()
            .returning(move |id| Ok(prs.iter().find(|pr| pr.id() == id).cloned()));
        self
    }

    pub(crate) fn into_ports(self) -> ReviewStorePorts {
        ReviewStorePorts::new(
            Arc::new(self.users),
            Arc::new(self.teams),
            Arc::new(self.pull_requests),
        )
    }
}

pub(crate) fn runtime(randomizer: impl ReviewerRandomizer + 'static) -> ReviewRuntime {
    ReviewRuntime::new(Arc::new(MutableClock::default()), Arc::new(randomizer))
}
