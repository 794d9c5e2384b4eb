//! Response bodies shared by the HTTP handlers.
//!
//! Field names follow the public JSON contract (`snake_case`, with the
//! `createdAt`/`mergedAt` timestamps as the only exception).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{PullRequest, Team, User};

/// Member entry of a team payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamMemberBody {
    #[schema(example = "u1")]
    pub user_id: String,
    #[schema(example = "Alice")]
    pub username: String,
    pub is_active: bool,
}

/// Team with its members.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamBody {
    #[schema(example = "backend")]
    pub team_name: String,
    pub members: Vec<TeamMemberBody>,
}

impl From<Team> for TeamBody {
    fn from(team: Team) -> Self {
        let team_name = team.name().to_string();
        let members = team
            .into_members()
            .into_iter()
            .map(|user| TeamMemberBody {
                user_id: user.id().to_string(),
                username: user.name().to_owned(),
                is_active: user.is_active(),
            })
            .collect();
        Self { team_name, members }
    }
}

/// User with its team.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserBody {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub is_active: bool,
}

impl From<&User> for UserBody {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id().to_string(),
            username: user.name().to_owned(),
            team_name: user.team_name().to_string(),
            is_active: user.is_active(),
        }
    }
}

/// Full pull request payload.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PullRequestBody {
    #[schema(example = "pr-1001")]
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    #[schema(example = "OPEN")]
    pub status: String,
    pub assigned_reviewers: Vec<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "mergedAt", skip_serializing_if = "Option::is_none", default)]
    pub merged_at: Option<DateTime<Utc>>,
}

impl From<&PullRequest> for PullRequestBody {
    fn from(pr: &PullRequest) -> Self {
        Self {
            pull_request_id: pr.id().to_string(),
            pull_request_name: pr.title().to_owned(),
            author_id: pr.author_id().to_string(),
            status: pr.status().as_str().to_owned(),
            assigned_reviewers: pr.reviewers().iter().map(ToString::to_string).collect(),
            created_at: pr.created_at(),
            merged_at: pr.merged_at(),
        }
    }
}

/// Abbreviated pull request used in per-reviewer listings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PullRequestShortBody {
    pub pull_request_id: String,
    pub pull_request_name: String,
    pub author_id: String,
    pub status: String,
}

impl From<&PullRequest> for PullRequestShortBody {
    fn from(pr: &PullRequest) -> Self {
        Self {
            pull_request_id: pr.id().to_string(),
            pull_request_name: pr.title().to_owned(),
            author_id: pr.author_id().to_string(),
            status: pr.status().as_str().to_owned(),
        }
    }
}

/// Envelope wrapping a single pull request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PullRequestEnvelope {
    pub pr: PullRequestBody,
}

impl From<&PullRequest> for PullRequestEnvelope {
    fn from(pr: &PullRequest) -> Self {
        Self { pr: pr.into() }
    }
}
