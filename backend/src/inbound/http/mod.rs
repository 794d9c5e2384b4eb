//! HTTP inbound adapter exposing the reviewer assignment REST endpoints.
//!
//! Handlers translate JSON bodies into driving-port requests, call the
//! services held in [`state::HttpState`] and map domain errors through
//! [`error`].

use actix_web::web;

pub mod auth;
pub mod dto;
pub mod error;
pub mod health;
pub mod pull_requests;
pub mod state;
pub mod stats;
pub mod teams;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub mod validation;

pub use error::ApiResult;

/// Register every review route on `cfg`. `/health` is mounted by the server.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(teams::add_team)
        .service(teams::get_team)
        .service(teams::list_teams)
        .service(teams::deactivate_team)
        .service(users::set_is_active)
        .service(users::list_users)
        .service(users::get_reviews)
        .service(pull_requests::create_pull_request)
        .service(pull_requests::merge_pull_request)
        .service(pull_requests::reassign_reviewer)
        .service(pull_requests::add_reviewer)
        .service(pull_requests::list_pull_requests)
        .service(stats::get_stats);
}
