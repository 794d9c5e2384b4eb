//! Reviewer assignment service.
//!
//! Teams of users author pull requests; the service assigns up to two active
//! teammates as reviewers, supports reassignment and merge, and repairs open
//! pull requests when a team is deactivated. The crate follows a hexagonal
//! layout: [`domain`] holds entities, services and ports, [`outbound`] the
//! in-memory store and randomizers, and [`inbound`] the HTTP adapter.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
