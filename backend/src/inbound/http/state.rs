//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    PullRequestCommand, PullRequestQuery, ReviewStatsQuery, TeamCommand, TeamQuery, UserCommand,
    UsersQuery,
};
use crate::domain::{
    PullRequestService, ReviewRuntime, ReviewStatsService, ReviewStorePorts, TeamService,
    UserService,
};

use super::auth::AccessTokens;

/// Parameter object bundling all port implementations for HTTP handlers.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub teams: Arc<dyn TeamCommand>,
    pub teams_query: Arc<dyn TeamQuery>,
    pub users: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub pull_requests: Arc<dyn PullRequestCommand>,
    pub pull_requests_query: Arc<dyn PullRequestQuery>,
    pub stats: Arc<dyn ReviewStatsQuery>,
}

impl HttpStatePorts {
    /// Wire the domain services over one set of storage ports.
    pub fn from_services(ports: ReviewStorePorts, runtime: ReviewRuntime) -> Self {
        let teams = Arc::new(TeamService::new(ports.clone(), runtime.clone()));
        let users = Arc::new(UserService::new(ports.clone()));
        let pull_requests = Arc::new(PullRequestService::new(ports.clone(), runtime));
        Self {
            teams: teams.clone(),
            teams_query: teams,
            users: users.clone(),
            users_query: users,
            pull_requests: pull_requests.clone(),
            pull_requests_query: pull_requests,
            stats: Arc::new(ReviewStatsService::new(ports)),
        }
    }
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub teams: Arc<dyn TeamCommand>,
    pub teams_query: Arc<dyn TeamQuery>,
    pub users: Arc<dyn UserCommand>,
    pub users_query: Arc<dyn UsersQuery>,
    pub pull_requests: Arc<dyn PullRequestCommand>,
    pub pull_requests_query: Arc<dyn PullRequestQuery>,
    pub stats: Arc<dyn ReviewStatsQuery>,
    pub tokens: AccessTokens,
}

impl HttpState {
    /// Construct state from a ports bundle and the accepted tokens.
    pub fn new(ports: HttpStatePorts, tokens: AccessTokens) -> Self {
        let HttpStatePorts {
            teams,
            teams_query,
            users,
            users_query,
            pull_requests,
            pull_requests_query,
            stats,
        } = ports;
        Self {
            teams,
            teams_query,
            users,
            users_query,
            pull_requests,
            pull_requests_query,
            stats,
            tokens,
        }
    }
}
