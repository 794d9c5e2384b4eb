//! Pull request lifecycle service.
//!
//! Implements the [`PullRequestCommand`] and [`PullRequestQuery`] driving
//! ports: opening pull requests with automatic reviewer assignment, merging,
//! swapping a single reviewer and adding a named reviewer.

use std::iter;

use async_trait::async_trait;
use tracing::{info, warn};

use super::candidates::CandidatePool;
use super::ports::{
    AddReviewerRequest, CreatePullRequestRequest, PullRequestCommand, PullRequestQuery,
    ReassignReviewerRequest, ReassignReviewerResponse,
};
use super::review_ports::{ReviewRuntime, ReviewStorePorts, map_pull_request_error};
use super::{
    MAX_REVIEWERS, PullRequest, PullRequestDraft, PullRequestId, ReviewError, UserId,
};

/// Service owning the pull request lifecycle.
#[derive(Clone)]
pub struct PullRequestService {
    ports: ReviewStorePorts,
    runtime: ReviewRuntime,
}

impl PullRequestService {
    pub fn new(ports: ReviewStorePorts, runtime: ReviewRuntime) -> Self {
        Self { ports, runtime }
    }

    async fn save(&self, pr: &PullRequest) -> Result<(), ReviewError> {
        self.ports
            .pull_requests
            .update(pr)
            .await
            .map_err(map_pull_request_error)
    }
}

fn rejected<T>(operation: &'static str, err: ReviewError) -> Result<T, ReviewError> {
    warn!(operation, code = err.code(), error = %err, "request rejected");
    Err(err)
}

#[async_trait]
impl PullRequestCommand for PullRequestService {
    async fn create_pull_request(
        &self,
        request: CreatePullRequestRequest,
    ) -> Result<PullRequest, ReviewError> {
        let CreatePullRequestRequest {
            pr_id,
            title,
            author_id,
        } = request;
        info!(pr_id = %pr_id, author_id = %author_id, "creating pull request");

        let existing = self
            .ports
            .pull_requests
            .find_by_id(&pr_id)
            .await
            .map_err(map_pull_request_error)?;
        if existing.is_some() {
            return rejected("create_pull_request", ReviewError::PullRequestExists { pr_id });
        }

        let author = self.ports.require_user(&author_id).await?;
        let team = self.ports.require_team(author.team_name()).await?;

        let reviewers = CandidatePool::from_roster(team.members(), &author_id, [])
            .pick(MAX_REVIEWERS, self.runtime.randomizer.as_ref());
        if reviewers.is_empty() {
            warn!(
                pr_id = %pr_id,
                team_name = %team.name(),
                "pull request needs reviewers; no eligible team member"
            );
        }

        let pr = PullRequest::open(PullRequestDraft {
            id: pr_id,
            title,
            author_id,
            team_name: team.name().clone(),
            reviewers,
            created_at: self.runtime.clock.utc(),
        })?;
        self.ports
            .pull_requests
            .create(&pr)
            .await
            .map_err(map_pull_request_error)?;

        info!(
            pr_id = %pr.id(),
            reviewers = pr.reviewers().len(),
            "pull request created"
        );
        Ok(pr)
    }

    async fn merge_pull_request(&self, pr_id: &PullRequestId) -> Result<PullRequest, ReviewError> {
        let mut pr = self.ports.require_pull_request(pr_id).await?;
        if pr.mark_merged(self.runtime.clock.utc()) {
            self.save(&pr).await?;
            info!(pr_id = %pr_id, "pull request merged");
        } else {
            info!(pr_id = %pr_id, "pull request already merged");
        }
        Ok(pr)
    }

    async fn reassign_reviewer(
        &self,
        request: ReassignReviewerRequest,
    ) -> Result<ReassignReviewerResponse, ReviewError> {
        let ReassignReviewerRequest {
            pr_id,
            old_reviewer_id,
            new_reviewer_id,
        } = request;
        info!(pr_id = %pr_id, reviewer_id = %old_reviewer_id, "reassigning reviewer");

        let mut pr = self.ports.require_pull_request(&pr_id).await?;
        if pr.is_merged() {
            return rejected("reassign_reviewer", ReviewError::PullRequestMerged { pr_id });
        }

        let old_reviewer = self.ports.require_user(&old_reviewer_id).await?;
        let team = self.ports.require_team(old_reviewer.team_name()).await?;

        // A requested reviewer who already holds a slot is reported as such
        // instead of as an ineligible candidate.
        let already_assigned = new_reviewer_id
            .as_ref()
            .filter(|requested| **requested == old_reviewer_id || pr.has_reviewer(requested));
        if let Some(user_id) = already_assigned.cloned() {
            return rejected("reassign_reviewer", ReviewError::ReviewerAlreadyAdded { user_id });
        }

        let excluded = iter::once(&old_reviewer_id).chain(pr.reviewers());
        let pool = CandidatePool::from_roster(team.members(), pr.author_id(), excluded);
        let replacement = match pool.choose(
            new_reviewer_id.as_ref(),
            self.runtime.randomizer.as_ref(),
        ) {
            Ok(replacement) => replacement,
            Err(err) => return rejected("reassign_reviewer", err),
        };
        let replacement = self.ports.require_user(&replacement).await?;
        let replaced_by = replacement.id().clone();

        if let Err(err) = pr.replace_reviewer(&old_reviewer_id, replaced_by.clone()) {
            return rejected("reassign_reviewer", err);
        }
        self.save(&pr).await?;

        info!(
            pr_id = %pr_id,
            reviewer_id = %old_reviewer_id,
            replaced_by = %replaced_by,
            "reviewer reassigned"
        );
        Ok(ReassignReviewerResponse {
            pull_request: pr,
            replaced_by,
        })
    }

    async fn add_reviewer(&self, request: AddReviewerRequest) -> Result<PullRequest, ReviewError> {
        let AddReviewerRequest { pr_id, user_id } = request;
        info!(pr_id = %pr_id, reviewer_id = %user_id, "adding reviewer");

        let mut pr = self.ports.require_pull_request(&pr_id).await?;
        let reviewer = self.ports.require_user(&user_id).await?;
        if !reviewer.is_active() {
            return rejected("add_reviewer", ReviewError::ReviewerInactive { user_id });
        }

        let team = self.ports.require_team(pr.team_name()).await?;
        if !team.contains(&user_id) {
            let team_name = team.name().clone();
            return rejected(
                "add_reviewer",
                ReviewError::ReviewerNotInTeam { user_id, team_name },
            );
        }

        if let Err(err) = pr.add_reviewer(user_id.clone()) {
            return rejected("add_reviewer", err);
        }
        self.save(&pr).await?;

        info!(pr_id = %pr_id, reviewer_id = %user_id, "reviewer added");
        Ok(pr)
    }
}

#[async_trait]
impl PullRequestQuery for PullRequestService {
    async fn list_pull_requests(&self) -> Result<Vec<PullRequest>, ReviewError> {
        self.ports
            .pull_requests
            .list()
            .await
            .map_err(map_pull_request_error)
    }

    async fn list_reviews_for(&self, user_id: &UserId) -> Result<Vec<PullRequest>, ReviewError> {
        self.ports
            .pull_requests
            .list_by_reviewer(user_id)
            .await
            .map_err(map_pull_request_error)
    }
}

#[cfg(test)]
#[path = "pull_request_service_tests.rs"]
mod tests;
