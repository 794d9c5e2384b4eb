//! Pull request lifecycle handlers.
//!
//! ```text
//! POST /pullRequest/create {"pull_request_id":"pr-1","pull_request_name":"Add search","author_id":"u1"}
//! POST /pullRequest/merge {"pull_request_id":"pr-1"}
//! POST /pullRequest/reassign {"pull_request_id":"pr-1","old_user_id":"u2"}
//! POST /pullRequest/addReviewer {"pull_request_id":"pr-1","user_id":"u3"}
//! GET /pullRequest/list
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{
    AddReviewerRequest, CreatePullRequestRequest, ReassignReviewerRequest,
};
use crate::domain::{Error, PullRequestId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::{AdminAccess, UserAccess};
use crate::inbound::http::dto::{PullRequestBody, PullRequestEnvelope};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_identifier, parse_optional_identifier, require_text,
};

/// Request body for `POST /pullRequest/create`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePullRequestBody {
    #[serde(default)]
    pub pull_request_id: String,
    #[serde(default)]
    pub pull_request_name: String,
    #[serde(default)]
    pub author_id: String,
}

/// Request body for `POST /pullRequest/merge`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MergePullRequestBody {
    #[serde(default)]
    pub pull_request_id: String,
}

/// Request body for `POST /pullRequest/reassign`.
///
/// Without `new_user_id` a replacement is drawn at random from the old
/// reviewer's team.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReassignReviewerBody {
    #[serde(default)]
    pub pull_request_id: String,
    #[serde(default)]
    pub old_user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_user_id: Option<String>,
}

/// Response body for `POST /pullRequest/reassign`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReassignReviewerResponseBody {
    pub pr: PullRequestBody,
    pub replaced_by: String,
}

/// Request body for `POST /pullRequest/addReviewer`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddReviewerBody {
    #[serde(default)]
    pub pull_request_id: String,
    #[serde(default)]
    pub user_id: String,
}

/// Response body for `GET /pullRequest/list`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PullRequestsResponse {
    pub pull_requests: Vec<PullRequestBody>,
}

fn parse_pr_id(raw: String) -> Result<PullRequestId, Error> {
    parse_identifier(raw, FieldName::new("pull_request_id"))
}

/// Open a pull request and assign up to two reviewers from the author's team.
#[utoipa::path(
    post,
    path = "/pullRequest/create",
    request_body = CreatePullRequestBody,
    responses(
        (status = 201, description = "Pull request created", body = PullRequestEnvelope),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Author or team not found", body = Error),
        (status = 409, description = "Pull request already exists", body = Error)
    ),
    tags = ["pull-requests"],
    operation_id = "createPullRequest",
    security(("AdminToken" = []))
)]
#[post("/pullRequest/create")]
pub async fn create_pull_request(
    state: web::Data<HttpState>,
    _access: AdminAccess,
    payload: web::Json<CreatePullRequestBody>,
) -> ApiResult<HttpResponse> {
    let body = payload.into_inner();
    let request = CreatePullRequestRequest {
        pr_id: parse_pr_id(body.pull_request_id)?,
        title: require_text(body.pull_request_name, FieldName::new("pull_request_name"))?,
        author_id: parse_identifier(body.author_id, FieldName::new("author_id"))?,
    };
    let pr = state.pull_requests.create_pull_request(request).await?;
    Ok(HttpResponse::Created().json(PullRequestEnvelope::from(&pr)))
}

/// Merge a pull request; merging twice returns the stored state.
#[utoipa::path(
    post,
    path = "/pullRequest/merge",
    request_body = MergePullRequestBody,
    responses(
        (status = 200, description = "Pull request merged", body = PullRequestEnvelope),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Pull request not found", body = Error)
    ),
    tags = ["pull-requests"],
    operation_id = "mergePullRequest",
    security(("AdminToken" = []))
)]
#[post("/pullRequest/merge")]
pub async fn merge_pull_request(
    state: web::Data<HttpState>,
    _access: AdminAccess,
    payload: web::Json<MergePullRequestBody>,
) -> ApiResult<web::Json<PullRequestEnvelope>> {
    let pr_id = parse_pr_id(payload.into_inner().pull_request_id)?;
    let pr = state.pull_requests.merge_pull_request(&pr_id).await?;
    Ok(web::Json(PullRequestEnvelope::from(&pr)))
}

/// Replace one reviewer of an open pull request.
#[utoipa::path(
    post,
    path = "/pullRequest/reassign",
    request_body = ReassignReviewerBody,
    responses(
        (status = 200, description = "Reviewer replaced", body = ReassignReviewerResponseBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Pull request or user not found", body = Error),
        (status = 409, description = "Pull request merged, reviewer not assigned or no candidate", body = Error)
    ),
    tags = ["pull-requests"],
    operation_id = "reassignReviewer",
    security(("AdminToken" = []))
)]
#[post("/pullRequest/reassign")]
pub async fn reassign_reviewer(
    state: web::Data<HttpState>,
    _access: AdminAccess,
    payload: web::Json<ReassignReviewerBody>,
) -> ApiResult<web::Json<ReassignReviewerResponseBody>> {
    let body = payload.into_inner();
    let request = ReassignReviewerRequest {
        pr_id: parse_pr_id(body.pull_request_id)?,
        old_reviewer_id: parse_identifier(body.old_user_id, FieldName::new("old_user_id"))?,
        new_reviewer_id: parse_optional_identifier(
            body.new_user_id,
            FieldName::new("new_user_id"),
        )?,
    };
    let response = state.pull_requests.reassign_reviewer(request).await?;
    Ok(web::Json(ReassignReviewerResponseBody {
        pr: PullRequestBody::from(&response.pull_request),
        replaced_by: response.replaced_by.to_string(),
    }))
}

/// Add a named reviewer to an open pull request with a free slot.
#[utoipa::path(
    post,
    path = "/pullRequest/addReviewer",
    request_body = AddReviewerBody,
    responses(
        (status = 200, description = "Reviewer added", body = PullRequestEnvelope),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Pull request or user not found", body = Error),
        (status = 409, description = "Reviewer cannot be added", body = Error)
    ),
    tags = ["pull-requests"],
    operation_id = "addReviewer",
    security(("AdminToken" = []))
)]
#[post("/pullRequest/addReviewer")]
pub async fn add_reviewer(
    state: web::Data<HttpState>,
    _access: AdminAccess,
    payload: web::Json<AddReviewerBody>,
) -> ApiResult<web::Json<PullRequestEnvelope>> {
    let body = payload.into_inner();
    let request = AddReviewerRequest {
        pr_id: parse_pr_id(body.pull_request_id)?,
        user_id: parse_identifier(body.user_id, FieldName::new("user_id"))?,
    };
    let pr = state.pull_requests.add_reviewer(request).await?;
    Ok(web::Json(PullRequestEnvelope::from(&pr)))
}

/// List every pull request, newest first.
#[utoipa::path(
    get,
    path = "/pullRequest/list",
    responses(
        (status = 200, description = "Pull requests", body = PullRequestsResponse),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["pull-requests"],
    operation_id = "listPullRequests",
    security(("UserToken" = []), ("AdminToken" = []))
)]
#[get("/pullRequest/list")]
pub async fn list_pull_requests(
    state: web::Data<HttpState>,
    _access: UserAccess,
) -> ApiResult<web::Json<PullRequestsResponse>> {
    let prs = state.pull_requests_query.list_pull_requests().await?;
    Ok(web::Json(PullRequestsResponse {
        pull_requests: prs.iter().map(PullRequestBody::from).collect(),
    }))
}

#[cfg(test)]
#[path = "pull_requests_tests.rs"]
mod tests;
