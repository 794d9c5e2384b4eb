//! Review statistics handler.
//!
//! ```text
//! GET /stats
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::ports::{ReviewStats, ReviewerStats};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::UserAccess;
use crate::inbound::http::state::HttpState;

/// Counters over every stored pull request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PullRequestStatsBody {
    pub total_prs: usize,
    pub open_prs: usize,
    pub merged_prs: usize,
    /// Distinct users holding at least one assignment.
    pub total_reviewers: usize,
}

/// Assignment counters for one reviewer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserStatsBody {
    pub user_id: String,
    pub username: String,
    pub team_name: String,
    pub assigned_prs_count: usize,
    pub open_prs_count: usize,
    pub merged_prs_count: usize,
}

/// Response body for `GET /stats`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatsResponse {
    pub pr_stats: PullRequestStatsBody,
    pub user_stats: Vec<UserStatsBody>,
}

impl From<ReviewerStats> for UserStatsBody {
    fn from(row: ReviewerStats) -> Self {
        Self {
            user_id: row.user_id.to_string(),
            username: row.name,
            team_name: row.team_name.to_string(),
            assigned_prs_count: row.assigned,
            open_prs_count: row.open,
            merged_prs_count: row.merged,
        }
    }
}

impl From<ReviewStats> for StatsResponse {
    fn from(stats: ReviewStats) -> Self {
        Self {
            pr_stats: PullRequestStatsBody {
                total_prs: stats.total_pull_requests,
                open_prs: stats.open_pull_requests,
                merged_prs: stats.merged_pull_requests,
                total_reviewers: stats.distinct_reviewers,
            },
            user_stats: stats.reviewers.into_iter().map(UserStatsBody::from).collect(),
        }
    }
}

/// Aggregate assignment statistics.
#[utoipa::path(
    get,
    path = "/stats",
    responses(
        (status = 200, description = "Statistics", body = StatsResponse),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["stats"],
    operation_id = "getStats",
    security(("UserToken" = []), ("AdminToken" = []))
)]
#[get("/stats")]
pub async fn get_stats(
    state: web::Data<HttpState>,
    _access: UserAccess,
) -> ApiResult<web::Json<StatsResponse>> {
    let stats = state.stats.stats().await?;
    Ok(web::Json(stats.into()))
}
