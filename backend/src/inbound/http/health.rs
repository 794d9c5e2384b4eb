//! Liveness endpoint for load balancers.
//!
//! `GET /health` needs no token and answers `{"status":"ok"}` whenever the
//! process is serving requests.

use actix_web::{HttpResponse, get, http::header};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthBody {
    pub status: String,
}

/// Liveness summary.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    security([]),
    responses(
        (status = 200, description = "Service is alive", body = HealthBody)
    )
)]
#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(HealthBody {
            status: "ok".to_owned(),
        })
}
