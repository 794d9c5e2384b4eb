//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use reviewer_service::Trace;
#[cfg(debug_assertions)]
use reviewer_service::doc::ApiDoc;
use reviewer_service::domain::ports::ReviewerRandomizer;
use reviewer_service::domain::{ReviewRuntime, ReviewStorePorts};
use reviewer_service::inbound::http::health::health;
use reviewer_service::inbound::http::state::{HttpState, HttpStatePorts};
use reviewer_service::inbound::http::{configure, validation};
use reviewer_service::outbound::{InMemoryReviewStore, SeededRandomizer, ThreadRngRandomizer};

fn build_randomizer(seed: Option<u64>) -> Arc<dyn ReviewerRandomizer> {
    match seed {
        Some(seed) => {
            info!(seed, "using seeded reviewer randomizer");
            Arc::new(SeededRandomizer::new(seed))
        }
        None => Arc::new(ThreadRngRandomizer),
    }
}

/// Wire the in-memory store, runtime and services into the HTTP state.
fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let store = Arc::new(InMemoryReviewStore::new());
    let ports = ReviewStorePorts::new(store.clone(), store.clone(), store);
    let runtime = ReviewRuntime::new(
        Arc::new(DefaultClock),
        build_randomizer(config.shuffle_seed),
    );
    web::Data::new(HttpState::new(
        HttpStatePorts::from_services(ports, runtime),
        config.tokens.clone(),
    ))
}

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(http_state)
        .app_data(validation::json_config())
        .app_data(validation::query_config())
        .wrap(Trace)
        .configure(configure)
        .service(health);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server from the loaded configuration.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let http_state = build_http_state(&config);
    let bind_addr = config.bind_addr();

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "reviewer service listening");
    Ok(server)
}
