//! Test helpers for inbound HTTP components.
//!
//! The helpers wire the real services over an [`InMemoryReviewStore`] with a
//! fixed clock and a roster-order randomizer, so responses are deterministic.

use std::sync::Arc;

use actix_http::Request;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use crate::Trace;
use crate::domain::ports::FixtureReviewerRandomizer;
use crate::domain::{ReviewRuntime, ReviewStorePorts};
use crate::inbound::http::auth::AccessTokens;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::inbound::http::{configure, validation};
use crate::outbound::InMemoryReviewStore;
use crate::test_support::MutableClock;

pub const ADMIN_TOKEN: &str = "admin-secret";
pub const USER_TOKEN: &str = "user-secret";

/// `Authorization` header carrying `token`.
pub fn bearer(token: &str) -> (actix_web::http::header::HeaderName, String) {
    (AUTHORIZATION, format!("Bearer {token}"))
}

/// HTTP state over a fresh in-memory store.
pub fn memory_state() -> HttpState {
    let store = Arc::new(InMemoryReviewStore::new());
    let ports = ReviewStorePorts::new(store.clone(), store.clone(), store);
    let runtime = ReviewRuntime::new(
        Arc::new(MutableClock::default()),
        Arc::new(FixtureReviewerRandomizer),
    );
    HttpState::new(
        HttpStatePorts::from_services(ports, runtime),
        AccessTokens::new(Some(ADMIN_TOKEN.into()), Some(USER_TOKEN.into())),
    )
}

/// Application exposing every review route over [`memory_state`].
pub fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(memory_state()))
        .app_data(validation::json_config())
        .app_data(validation::query_config())
        .wrap(Trace)
        .configure(configure)
}

/// POST `body` to `uri` with the given token.
pub async fn post_json(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
    uri: &str,
    token: &str,
    body: Value,
) -> ServiceResponse {
    let request = actix_test::TestRequest::post()
        .uri(uri)
        .insert_header(bearer(token))
        .set_json(body)
        .to_request();
    actix_test::call_service(app, request).await
}

/// Create team `backend` with active members `a`, `r1`, `r2` and `r3`.
pub async fn seed_backend_team(
    app: &impl Service<Request, Response = ServiceResponse, Error = actix_web::Error>,
) {
    let response = post_json(
        app,
        "/team/add",
        ADMIN_TOKEN,
        json!({
            "team_name": "backend",
            "members": [
                {"user_id": "a", "username": "Author", "is_active": true},
                {"user_id": "r1", "username": "Reviewer One", "is_active": true},
                {"user_id": "r2", "username": "Reviewer Two", "is_active": true},
                {"user_id": "r3", "username": "Reviewer Three", "is_active": true}
            ]
        }),
    )
    .await;
    assert!(response.status().is_success(), "team seeded");
}
