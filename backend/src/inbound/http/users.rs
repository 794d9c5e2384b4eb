//! User handlers.
//!
//! ```text
//! POST /users/setIsActive {"user_id":"u1","is_active":false}
//! GET /users/list
//! GET /users/getReview?user_id=u1
//! ```

use actix_web::{get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::{AdminAccess, UserAccess};
use crate::inbound::http::dto::{PullRequestShortBody, UserBody};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_identifier};

/// Request body for `POST /users/setIsActive`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetIsActiveRequest {
    #[serde(default)]
    pub user_id: String,
    pub is_active: bool,
}

/// Envelope wrapping a single user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserEnvelope {
    pub user: UserBody,
}

/// Response body for `GET /users/list`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UsersResponse {
    pub users: Vec<UserBody>,
}

/// Query string for `GET /users/getReview`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct UserIdQuery {
    #[serde(default)]
    pub user_id: String,
}

/// Response body for `GET /users/getReview`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReviewerPullRequestsResponse {
    pub user_id: String,
    pub pull_requests: Vec<PullRequestShortBody>,
}

/// Switch a user's activity flag without touching existing assignments.
#[utoipa::path(
    post,
    path = "/users/setIsActive",
    request_body = SetIsActiveRequest,
    responses(
        (status = 200, description = "User updated", body = UserEnvelope),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "User not found", body = Error)
    ),
    tags = ["users"],
    operation_id = "setUserActive",
    security(("AdminToken" = []))
)]
#[post("/users/setIsActive")]
pub async fn set_is_active(
    state: web::Data<HttpState>,
    _access: AdminAccess,
    payload: web::Json<SetIsActiveRequest>,
) -> ApiResult<web::Json<UserEnvelope>> {
    let SetIsActiveRequest { user_id, is_active } = payload.into_inner();
    let user_id: UserId = parse_identifier(user_id, FieldName::new("user_id"))?;
    let user = state.users.set_user_active(&user_id, is_active).await?;
    Ok(web::Json(UserEnvelope {
        user: UserBody::from(&user),
    }))
}

/// List every known user.
#[utoipa::path(
    get,
    path = "/users/list",
    responses(
        (status = 200, description = "Users", body = UsersResponse),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers",
    security(("UserToken" = []), ("AdminToken" = []))
)]
#[get("/users/list")]
pub async fn list_users(
    state: web::Data<HttpState>,
    _access: UserAccess,
) -> ApiResult<web::Json<UsersResponse>> {
    let users = state.users_query.list_users().await?;
    Ok(web::Json(UsersResponse {
        users: users.iter().map(UserBody::from).collect(),
    }))
}

/// Pull requests of any status that list the user as a reviewer.
#[utoipa::path(
    get,
    path = "/users/getReview",
    params(UserIdQuery),
    responses(
        (status = 200, description = "Assigned pull requests", body = ReviewerPullRequestsResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUserReviews",
    security(("UserToken" = []), ("AdminToken" = []))
)]
#[get("/users/getReview")]
pub async fn get_reviews(
    state: web::Data<HttpState>,
    _access: UserAccess,
    query: web::Query<UserIdQuery>,
) -> ApiResult<web::Json<ReviewerPullRequestsResponse>> {
    let user_id: UserId = parse_identifier(query.into_inner().user_id, FieldName::new("user_id"))?;
    let prs = state.pull_requests_query.list_reviews_for(&user_id).await?;
    Ok(web::Json(ReviewerPullRequestsResponse {
        user_id: user_id.to_string(),
        pull_requests: prs.iter().map(PullRequestShortBody::from).collect(),
    }))
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
