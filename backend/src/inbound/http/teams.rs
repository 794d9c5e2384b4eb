//! Team administration handlers.
//!
//! ```text
//! POST /team/add {"team_name":"backend","members":[{"user_id":"u1","username":"Alice","is_active":true}]}
//! GET /team/get?team_name=backend
//! GET /team/list
//! POST /team/deactivate {"team_name":"backend"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{CreateTeamRequest, DeactivationOutcome};
use crate::domain::{Error, Team, TeamMember, TeamName, TeamValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::auth::{AdminAccess, UserAccess};
use crate::inbound::http::dto::TeamBody;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_identifier, require_text};

fn default_active() -> bool {
    true
}

/// Member entry of `POST /team/add`; `is_active` defaults to `true`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamMemberInput {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

/// Request body for `POST /team/add`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddTeamRequest {
    #[serde(default)]
    pub team_name: String,
    #[serde(default)]
    pub members: Vec<TeamMemberInput>,
}

/// Response body for `POST /team/add`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamEnvelope {
    pub team: TeamBody,
}

/// Response body for `GET /team/list`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamsResponse {
    pub teams: Vec<TeamBody>,
}

/// Query string for `GET /team/get`.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TeamNameQuery {
    #[serde(default)]
    pub team_name: String,
}

/// Request body for `POST /team/deactivate`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeactivateTeamRequest {
    #[serde(default)]
    pub team_name: String,
}

/// Response body for `POST /team/deactivate`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeactivateTeamResponse {
    pub deactivated_count: usize,
    pub reassigned_pr_count: usize,
}

impl From<DeactivationOutcome> for DeactivateTeamResponse {
    fn from(outcome: DeactivationOutcome) -> Self {
        Self {
            deactivated_count: outcome.deactivated_count,
            reassigned_pr_count: outcome.reassigned_count,
        }
    }
}

fn map_team_validation_error(err: TeamValidationError) -> Error {
    let user_id = match &err {
        TeamValidationError::DuplicateMember { user_id }
        | TeamValidationError::InvalidMember { user_id, .. } => user_id.to_string(),
    };
    Error::invalid_request(err.to_string()).with_details(json!({
        "field": "members",
        "user_id": user_id,
        "code": "invalid_member",
    }))
}

fn parse_team(payload: AddTeamRequest) -> Result<Team, Error> {
    let name: TeamName = parse_identifier(payload.team_name, FieldName::new("team_name"))?;
    let members = payload
        .members
        .into_iter()
        .map(|member| {
            Ok(TeamMember {
                user_id: parse_identifier(member.user_id, FieldName::new("user_id"))?,
                name: require_text(member.username, FieldName::new("username"))?,
                is_active: member.is_active,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;
    Team::new(name, members).map_err(map_team_validation_error)
}

/// Create a team and upsert its members.
#[utoipa::path(
    post,
    path = "/team/add",
    request_body = AddTeamRequest,
    responses(
        (status = 201, description = "Team created", body = TeamEnvelope),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 409, description = "Team already exists", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["teams"],
    operation_id = "addTeam",
    security(("AdminToken" = []))
)]
#[post("/team/add")]
pub async fn add_team(
    state: web::Data<HttpState>,
    _access: AdminAccess,
    payload: web::Json<AddTeamRequest>,
) -> ApiResult<HttpResponse> {
    let team = parse_team(payload.into_inner())?;
    let created = state.teams.create_team(CreateTeamRequest { team }).await?;
    Ok(HttpResponse::Created().json(TeamEnvelope {
        team: created.into(),
    }))
}

/// Fetch one team with its members.
#[utoipa::path(
    get,
    path = "/team/get",
    params(TeamNameQuery),
    responses(
        (status = 200, description = "Team", body = TeamBody),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Team not found", body = Error)
    ),
    tags = ["teams"],
    operation_id = "getTeam",
    security(("UserToken" = []), ("AdminToken" = []))
)]
#[get("/team/get")]
pub async fn get_team(
    state: web::Data<HttpState>,
    _access: UserAccess,
    query: web::Query<TeamNameQuery>,
) -> ApiResult<web::Json<TeamBody>> {
    let name: TeamName =
        parse_identifier(query.into_inner().team_name, FieldName::new("team_name"))?;
    let team = state.teams_query.get_team(&name).await?;
    Ok(web::Json(team.into()))
}

/// List every team.
#[utoipa::path(
    get,
    path = "/team/list",
    responses(
        (status = 200, description = "Teams", body = TeamsResponse),
        (status = 401, description = "Unauthorised", body = Error)
    ),
    tags = ["teams"],
    operation_id = "listTeams",
    security(("UserToken" = []), ("AdminToken" = []))
)]
#[get("/team/list")]
pub async fn list_teams(
    state: web::Data<HttpState>,
    _access: UserAccess,
) -> ApiResult<web::Json<TeamsResponse>> {
    let teams = state.teams_query.list_teams().await?;
    Ok(web::Json(TeamsResponse {
        teams: teams.into_iter().map(TeamBody::from).collect(),
    }))
}

/// Deactivate every member of a team and repair open pull requests.
#[utoipa::path(
    post,
    path = "/team/deactivate",
    request_body = DeactivateTeamRequest,
    responses(
        (status = 200, description = "Team deactivated", body = DeactivateTeamResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Team not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["teams"],
    operation_id = "deactivateTeam",
    security(("AdminToken" = []))
)]
#[post("/team/deactivate")]
pub async fn deactivate_team(
    state: web::Data<HttpState>,
    _access: AdminAccess,
    payload: web::Json<DeactivateTeamRequest>,
) -> ApiResult<web::Json<DeactivateTeamResponse>> {
    let name: TeamName =
        parse_identifier(payload.into_inner().team_name, FieldName::new("team_name"))?;
    let outcome = state.teams.deactivate_team(&name).await?;
    Ok(web::Json(outcome.into()))
}
