//! Bulk team deactivation with reviewer repair.
//!
//! Every open pull request reviewed by a member of the team is repaired
//! against its own team roster before the members are switched off. A slot
//! with no eligible replacement is dropped. Writes are not transactional: a
//! storage failure aborts the cascade and keeps whatever was already saved.

use std::collections::HashSet;

use tracing::{info, warn};

use super::candidates::CandidatePool;
use super::ports::DeactivationOutcome;
use super::review_ports::{
    ReviewRuntime, ReviewStorePorts, map_pull_request_error, map_team_error, map_user_error,
};
use super::{PullRequest, ReviewError, TeamName, User, UserId};

/// Runs the deactivation cascade for one team at a time.
#[derive(Clone)]
pub struct DeactivationCascade {
    ports: ReviewStorePorts,
    runtime: ReviewRuntime,
}

impl DeactivationCascade {
    pub fn new(ports: ReviewStorePorts, runtime: ReviewRuntime) -> Self {
        Self { ports, runtime }
    }

    /// Deactivate all active members of `team_name`.
    pub async fn run(&self, team_name: &TeamName) -> Result<DeactivationOutcome, ReviewError> {
        info!(team_name = %team_name, "deactivating team");

        let team = self.ports.require_team(team_name).await?;
        let deactivating = team.active_member_ids();
        if deactivating.is_empty() {
            info!(team_name = %team_name, "team has no active members");
            return Ok(DeactivationOutcome::default());
        }
        let deactivating_set: HashSet<&UserId> = deactivating.iter().collect();

        let affected = self.affected_pull_requests(&deactivating_set).await?;
        info!(
            team_name = %team_name,
            affected = affected.len(),
            "found open pull requests to repair"
        );

        let mut reassigned_count = 0;
        for pr in affected {
            if self.repair(pr, &deactivating_set).await? {
                reassigned_count += 1;
            }
        }

        let deactivated_count = self.deactivate_members(&deactivating).await?;

        info!(
            team_name = %team_name,
            deactivated = deactivated_count,
            reassigned = reassigned_count,
            "team deactivated"
        );
        Ok(DeactivationOutcome {
            deactivated_count,
            reassigned_count,
        })
    }

    async fn affected_pull_requests(
        &self,
        deactivating: &HashSet<&UserId>,
    ) -> Result<Vec<PullRequest>, ReviewError> {
        let all = self
            .ports
            .pull_requests
            .list()
            .await
            .map_err(map_pull_request_error)?;
        Ok(all
            .into_iter()
            .filter(|pr| !pr.is_merged())
            .filter(|pr| pr.reviewers().iter().any(|id| deactivating.contains(id)))
            .collect())
    }

    /// Rebuild the reviewer list of one pull request; returns whether it was
    /// touched.
    async fn repair(
        &self,
        mut pr: PullRequest,
        deactivating: &HashSet<&UserId>,
    ) -> Result<bool, ReviewError> {
        let roster = self.roster_for(&pr).await?;

        let mut kept: Vec<UserId> = Vec::with_capacity(pr.reviewers().len());
        let mut touched = false;
        for reviewer in pr.reviewers() {
            if !deactivating.contains(reviewer) {
                kept.push(reviewer.clone());
                continue;
            }
            touched = true;

            let excluded = deactivating
                .iter()
                .copied()
                .chain(pr.reviewers())
                .chain(kept.iter());
            let replacement = CandidatePool::from_roster(&roster, pr.author_id(), excluded)
                .pick(1, self.runtime.randomizer.as_ref())
                .into_iter()
                .next();
            match replacement {
                Some(replacement) => {
                    info!(
                        pr_id = %pr.id(),
                        reviewer_id = %reviewer,
                        replaced_by = %replacement,
                        "reviewer replaced"
                    );
                    kept.push(replacement);
                }
                None => {
                    warn!(
                        pr_id = %pr.id(),
                        reviewer_id = %reviewer,
                        "no replacement found; dropping reviewer"
                    );
                }
            }
        }

        if !touched {
            return Ok(false);
        }
        if pr.set_reviewers(kept)? {
            self.ports
                .pull_requests
                .update(&pr)
                .await
                .map_err(map_pull_request_error)?;
        }
        Ok(true)
    }

    /// Members of the pull request's own team; a vanished team yields an
    /// empty roster so every affected slot is dropped.
    async fn roster_for(&self, pr: &PullRequest) -> Result<Vec<User>, ReviewError> {
        let team = self
            .ports
            .teams
            .find_by_name(pr.team_name())
            .await
            .map_err(map_team_error)?;
        match team {
            Some(team) => Ok(team.into_members()),
            None => {
                // Dropping keeps deactivated users off open pull requests.
                warn!(
                    pr_id = %pr.id(),
                    team_name = %pr.team_name(),
                    "pull request team not found; affected reviewers will be dropped"
                );
                Ok(Vec::new())
            }
        }
    }

    async fn deactivate_members(&self, member_ids: &[UserId]) -> Result<usize, ReviewError> {
        let mut deactivated = 0;
        for user_id in member_ids {
            let found = self
                .ports
                .users
                .find_by_id(user_id)
                .await
                .map_err(map_user_error)?;
            let Some(mut user) = found else {
                warn!(user_id = %user_id, "team member not found; skipping");
                continue;
            };
            if !user.is_active() {
                continue;
            }
            user.set_active(false);
            self.ports
                .users
                .update(&user)
                .await
                .map_err(map_user_error)?;
            deactivated += 1;
        }
        Ok(deactivated)
    }
}

#[cfg(test)]
#[path = "deactivation_cascade_tests.rs"]
mod tests;
