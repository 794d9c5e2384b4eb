//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every review route, the request and response bodies
//! they exchange, the shared [`Error`](crate::domain::Error) payload and the
//! two bearer token schemes. The document backs Swagger UI in debug builds.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::dto::{
    PullRequestBody, PullRequestEnvelope, PullRequestShortBody, TeamBody, TeamMemberBody, UserBody,
};
use crate::inbound::http::health::HealthBody;
use crate::inbound::http::pull_requests::{
    AddReviewerBody, CreatePullRequestBody, MergePullRequestBody, PullRequestsResponse,
    ReassignReviewerBody, ReassignReviewerResponseBody,
};
use crate::inbound::http::stats::{PullRequestStatsBody, StatsResponse, UserStatsBody};
use crate::inbound::http::teams::{
    AddTeamRequest, DeactivateTeamRequest, DeactivateTeamResponse, TeamEnvelope, TeamMemberInput,
    TeamsResponse,
};
use crate::inbound::http::users::{
    ReviewerPullRequestsResponse, SetIsActiveRequest, UserEnvelope, UsersResponse,
};

/// Add the admin and user bearer schemes to the generated document.
struct SecurityAddon;

fn bearer_scheme(description: &str) -> SecurityScheme {
    SecurityScheme::Http(
        HttpBuilder::new()
            .scheme(HttpAuthScheme::Bearer)
            .description(Some(description))
            .build(),
    )
}

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "AdminToken",
            bearer_scheme("Admin token; grants every route."),
        );
        components.add_security_scheme(
            "UserToken",
            bearer_scheme("User token; grants read-only routes."),
        );
    }
}

/// OpenAPI document for the reviewer assignment API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Reviewer assignment API",
        description = "Teams, users and pull requests with automatic reviewer assignment."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::teams::add_team,
        crate::inbound::http::teams::get_team,
        crate::inbound::http::teams::list_teams,
        crate::inbound::http::teams::deactivate_team,
        crate::inbound::http::users::set_is_active,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_reviews,
        crate::inbound::http::pull_requests::create_pull_request,
        crate::inbound::http::pull_requests::merge_pull_request,
        crate::inbound::http::pull_requests::reassign_reviewer,
        crate::inbound::http::pull_requests::add_reviewer,
        crate::inbound::http::pull_requests::list_pull_requests,
        crate::inbound::http::stats::get_stats,
        crate::inbound::http::health::health,
    ),
    components(schemas(
        Error,
        ErrorCode,
        TeamMemberBody,
        TeamBody,
        UserBody,
        PullRequestBody,
        PullRequestShortBody,
        PullRequestEnvelope,
        TeamMemberInput,
        AddTeamRequest,
        TeamEnvelope,
        TeamsResponse,
        DeactivateTeamRequest,
        DeactivateTeamResponse,
        SetIsActiveRequest,
        UserEnvelope,
        UsersResponse,
        ReviewerPullRequestsResponse,
        CreatePullRequestBody,
        MergePullRequestBody,
        ReassignReviewerBody,
        ReassignReviewerResponseBody,
        AddReviewerBody,
        PullRequestsResponse,
        PullRequestStatsBody,
        UserStatsBody,
        StatsResponse,
        HealthBody,
    )),
    tags(
        (name = "teams", description = "Team membership and bulk deactivation"),
        (name = "users", description = "User activity and review queues"),
        (name = "pull-requests", description = "Pull request lifecycle and reviewer assignment"),
        (name = "stats", description = "Assignment statistics"),
        (name = "health", description = "Liveness check")
    )
)]
pub struct ApiDoc;
