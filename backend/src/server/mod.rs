//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use users_api::Trace;
use users_api::doc::ApiDoc;
use users_api::inbound::http::error::json_config;
use users_api::inbound::http::health::{HealthState, live, ready};
use users_api::inbound::http::home::index;
use users_api::inbound::http::state::HttpState;
use users_api::inbound::http::users::{
    create_user, delete_user, get_user, list_users, update_user,
};

/// Shared state handed to every worker's `App`.
#[derive(Clone)]
pub(crate) struct AppDependencies {
    pub(crate) health_state: web::Data<HealthState>,
    pub(crate) http_state: web::Data<HttpState>,
}

/// Register middleware and every route on a fresh `App`.
pub(crate) fn build_app(
    deps: AppDependencies,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let AppDependencies {
        health_state,
        http_state,
    } = deps;

    App::new()
        .app_data(health_state)
        .app_data(http_state)
        .app_data(json_config())
        .wrap(Trace)
        .service(index)
        .service(list_users)
        .service(create_user)
        .service(get_user)
        .service(update_user)
        .service(delete_user)
        .service(ready)
        .service(live)
        .service(SwaggerUi::new("/api-docs/{_:.*}").url("/openapi.json", ApiDoc::openapi()))
}

/// Construct an Actix HTTP server serving the users API.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        users,
        users_command,
    } = config;
    let http_state = web::Data::new(HttpState::new(users, users_command));
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        build_app(AppDependencies {
            health_state: server_health_state.clone(),
            http_state: http_state.clone(),
        })
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}
