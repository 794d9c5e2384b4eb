//! Review statistics over the stored pull requests.

use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use tracing::info;

use super::ports::{ReviewStats, ReviewStatsQuery, ReviewerStats};
use super::review_ports::{ReviewStorePorts, map_pull_request_error, map_user_error};
use super::{PullRequest, PullRequestStatus, ReviewError, User, UserId};

/// Service implementing [`ReviewStatsQuery`].
#[derive(Clone)]
pub struct ReviewStatsService {
    ports: ReviewStorePorts,
}

impl ReviewStatsService {
    pub fn new(ports: ReviewStorePorts) -> Self {
        Self { ports }
    }
}

#[async_trait]
impl ReviewStatsQuery for ReviewStatsService {
    async fn stats(&self) -> Result<ReviewStats, ReviewError> {
        let pull_requests = self
            .ports
            .pull_requests
            .list()
            .await
            .map_err(map_pull_request_error)?;
        let users = self.ports.users.list().await.map_err(map_user_error)?;

        let stats = summarise(&pull_requests, &users);
        info!(
            total = stats.total_pull_requests,
            reviewers = stats.distinct_reviewers,
            "computed review stats"
        );
        Ok(stats)
    }
}

fn summarise(pull_requests: &[PullRequest], users: &[User]) -> ReviewStats {
    let known: HashMap<&UserId, &User> = users.iter().map(|user| (user.id(), user)).collect();
    let mut reviewers: HashSet<&UserId> = HashSet::new();
    let mut per_user: BTreeMap<&UserId, ReviewerStats> = BTreeMap::new();
    let mut stats = ReviewStats {
        total_pull_requests: pull_requests.len(),
        ..ReviewStats::default()
    };

    for pr in pull_requests {
        match pr.status() {
            PullRequestStatus::Open => stats.open_pull_requests += 1,
            PullRequestStatus::Merged => stats.merged_pull_requests += 1,
        }
        for reviewer_id in pr.reviewers() {
            reviewers.insert(reviewer_id);
            let Some(user) = known.get(reviewer_id) else {
                continue;
            };
            let row = per_user
                .entry(reviewer_id)
                .or_insert_with(|| ReviewerStats {
                    user_id: reviewer_id.clone(),
                    name: user.name().to_owned(),
                    team_name: user.team_name().clone(),
                    assigned: 0,
                    open: 0,
                    merged: 0,
                });
            row.assigned += 1;
            match pr.status() {
                PullRequestStatus::Open => row.open += 1,
                PullRequestStatus::Merged => row.merged += 1,
            }
        }
    }

    stats.distinct_reviewers = reviewers.len();
    stats.reviewers = per_user.into_values().collect();
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::test_fixtures::{MockStore, open_pr, user};
    use crate::test_support::fixture_timestamp;

    #[tokio::test]
    async fn stats_count_statuses_and_reviewers() {
        let mut merged = open_pr("pr-2", "a", "backend", &["r1"]);
        merged.mark_merged(fixture_timestamp());
        let prs = vec![
            open_pr("pr-1", "a", "backend", &["r2", "r1"]),
            merged,
            open_pr("pr-3", "r1", "backend", &["gone"]),
        ];
        let users = vec![
            user("a", "backend", true),
            user("r1", "backend", true),
            user("r2", "backend", false),
        ];
        let mut store = MockStore::default();
        store
            .pull_requests
            .expect_list()
            .returning(move || Ok(prs.clone()));
        store
            .users
            .expect_list()
            .returning(move || Ok(users.clone()));

        let stats = ReviewStatsService::new(store.into_ports())
            .stats()
            .await
            .expect("stats");

        assert_eq!(stats.total_pull_requests, 3);
        assert_eq!(stats.open_pull_requests, 2);
        assert_eq!(stats.merged_pull_requests, 1);
        assert_eq!(stats.distinct_reviewers, 3);

        let rows: Vec<(&str, usize, usize, usize)> = stats
            .reviewers
            .iter()
            .map(|row| (row.user_id.as_str(), row.assigned, row.open, row.merged))
            .collect();
        assert_eq!(rows, [("r1", 2, 1, 1), ("r2", 1, 1, 0)]);
    }

    #[tokio::test]
    async fn stats_of_empty_store_are_zero() {
        let mut store = MockStore::default();
        store.pull_requests.expect_list().returning(|| Ok(Vec::new()));
        store.users.expect_list().returning(|| Ok(Vec::new()));

        let stats = ReviewStatsService::new(store.into_ports())
            .stats()
            .await
            .expect("stats");

        assert_eq!(stats, ReviewStats::default());
    }
}
