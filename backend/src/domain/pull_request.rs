//! Pull request aggregate and its reviewer-set invariants.
//!
//! A pull request carries at most [`MAX_REVIEWERS`] distinct reviewers and
//! never lists its author among them. Reviewers change only while the pull
//! request is open; merging freezes the reviewer list and records the merge
//! timestamp exactly once.

use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, Utc};

use super::{PullRequestId, ReviewError, TeamName, UserId};

/// Maximum number of reviewers assigned to a pull request.
pub const MAX_REVIEWERS: usize = 2;

/// Lifecycle state of a pull request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PullRequestStatus {
    Open,
    Merged,
}

impl PullRequestStatus {
    /// Wire representation used by adapters.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Merged => "MERGED",
        }
    }
}

impl fmt::Display for PullRequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input for opening a new pull request.
#[derive(Debug, Clone)]
pub struct PullRequestDraft {
    pub id: PullRequestId,
    pub title: String,
    pub author_id: UserId,
    /// Author's team at creation time; never changes afterwards.
    pub team_name: TeamName,
    pub reviewers: Vec<UserId>,
    pub created_at: DateTime<Utc>,
}

/// Pull request with its assigned reviewers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    id: PullRequestId,
    title: String,
    author_id: UserId,
    team_name: TeamName,
    reviewers: Vec<UserId>,
    status: PullRequestStatus,
    created_at: DateTime<Utc>,
    merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    /// Open a pull request with an initial reviewer list.
    ///
    /// # Examples
    /// ```
    /// use chrono::Utc;
    /// use reviewer_service::domain::{
    ///     PullRequest, PullRequestDraft, PullRequestId, PullRequestStatus, TeamName, UserId,
    /// };
    ///
    /// let pr = PullRequest::open(PullRequestDraft {
    ///     id: PullRequestId::new("pr-1").unwrap(),
    ///     title: "Add search".to_owned(),
    ///     author_id: UserId::new("u1").unwrap(),
    ///     team_name: TeamName::new("backend").unwrap(),
    ///     reviewers: vec![UserId::new("u2").unwrap()],
    ///     created_at: Utc::now(),
    /// })
    /// .unwrap();
    /// assert_eq!(pr.status(), PullRequestStatus::Open);
    /// ```
    pub fn open(draft: PullRequestDraft) -> Result<Self, ReviewError> {
        let PullRequestDraft {
            id,
            title,
            author_id,
            team_name,
            reviewers,
            created_at,
        } = draft;
        check_reviewers(&id, &author_id, &reviewers)?;
        Ok(Self {
            id,
            title,
            author_id,
            team_name,
            reviewers,
            status: PullRequestStatus::Open,
            created_at,
            merged_at: None,
        })
    }

    pub fn id(&self) -> &PullRequestId {
        &self.id
    }

    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    pub fn author_id(&self) -> &UserId {
        &self.author_id
    }

    /// Team whose roster is used when the reviewer set is repaired.
    pub fn team_name(&self) -> &TeamName {
        &self.team_name
    }

    pub fn reviewers(&self) -> &[UserId] {
        &self.reviewers
    }

    pub fn status(&self) -> PullRequestStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn merged_at(&self) -> Option<DateTime<Utc>> {
        self.merged_at
    }

    pub fn is_merged(&self) -> bool {
        self.status == PullRequestStatus::Merged
    }

    pub fn has_reviewer(&self, user_id: &UserId) -> bool {
        self.reviewers.contains(user_id)
    }

    /// Mark the pull request as merged.
    ///
    /// Returns `false` and leaves the state untouched when it was already
    /// merged, so the first merge timestamp wins.
    pub fn mark_merged(&mut self, merged_at: DateTime<Utc>) -> bool {
        if self.is_merged() {
            return false;
        }
        self.status = PullRequestStatus::Merged;
        self.merged_at = Some(merged_at);
        true
    }

    /// Append a reviewer to an open pull request with a free slot.
    pub fn add_reviewer(&mut self, reviewer_id: UserId) -> Result<(), ReviewError> {
        self.ensure_open()?;
        if reviewer_id == self.author_id {
            return Err(ReviewError::ReviewerIsAuthor {
                user_id: reviewer_id,
            });
        }
        if self.has_reviewer(&reviewer_id) {
            return Err(ReviewError::ReviewerAlreadyAdded {
                user_id: reviewer_id,
            });
        }
        if self.reviewers.len() >= MAX_REVIEWERS {
            return Err(ReviewError::ReviewerLimitReached {
                pr_id: self.id.clone(),
            });
        }
        self.reviewers.push(reviewer_id);
        Ok(())
    }

    /// Swap `old_reviewer_id` for `new_reviewer_id`, keeping its slot.
    pub fn replace_reviewer(
        &mut self,
        old_reviewer_id: &UserId,
        new_reviewer_id: UserId,
    ) -> Result<(), ReviewError> {
        self.ensure_open()?;
        if new_reviewer_id == self.author_id {
            return Err(ReviewError::ReviewerIsAuthor {
                user_id: new_reviewer_id,
            });
        }
        if &new_reviewer_id == old_reviewer_id || self.has_reviewer(&new_reviewer_id) {
            return Err(ReviewError::ReviewerAlreadyAdded {
                user_id: new_reviewer_id,
            });
        }
        let slot = self
            .reviewers
            .iter_mut()
            .find(|existing| **existing == *old_reviewer_id)
            .ok_or_else(|| ReviewError::ReviewerNotAssigned {
                user_id: old_reviewer_id.clone(),
            })?;
        *slot = new_reviewer_id;
        Ok(())
    }

    /// Replace the whole reviewer list of an open pull request.
    ///
    /// Returns whether the list changed.
    pub fn set_reviewers(&mut self, reviewers: Vec<UserId>) -> Result<bool, ReviewError> {
        self.ensure_open()?;
        check_reviewers(&self.id, &self.author_id, &reviewers)?;
        if reviewers == self.reviewers {
            return Ok(false);
        }
        self.reviewers = reviewers;
        Ok(true)
    }

    fn ensure_open(&self) -> Result<(), ReviewError> {
        if self.is_merged() {
            return Err(ReviewError::PullRequestMerged {
                pr_id: self.id.clone(),
            });
        }
        Ok(())
    }
}

fn check_reviewers(
    pr_id: &PullRequestId,
    author_id: &UserId,
    reviewers: &[UserId],
) -> Result<(), ReviewError> {
    if reviewers.len() > MAX_REVIEWERS {
        return Err(ReviewError::ReviewerLimitReached {
            pr_id: pr_id.clone(),
        });
    }
    let mut seen = HashSet::with_capacity(reviewers.len());
    for reviewer in reviewers {
        if reviewer == author_id {
            return Err(ReviewError::ReviewerIsAuthor {
                user_id: reviewer.clone(),
            });
        }
        if !seen.insert(reviewer) {
            return Err(ReviewError::ReviewerAlreadyAdded {
                user_id: reviewer.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "pull_request_tests.rs"]
mod tests;
