//! In-memory users CRUD service.
//!
//! The [`outbound::memory::InMemoryUserStore`] owns the user collection and
//! implements the [`domain::ports`]; [`inbound::http`] exposes it over REST
//! with generated OpenAPI documentation from [`doc`].

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
