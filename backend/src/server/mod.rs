//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;
mod state_builders;

pub use config::{ServerConfig, ServerSettings};
#[cfg(feature = "metrics")]
pub(crate) use metrics::make_metrics;
pub(crate) use state_builders::build_http_state;

#[cfg(feature = "metrics")]
use metrics::MetricsLayer;

use actix_web::body::MessageBody;
use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};

use recipe_backend::Trace;
#[cfg(debug_assertions)]
use recipe_backend::doc::ApiDoc;
use recipe_backend::inbound::http::configure;
use recipe_backend::inbound::http::health::{HealthState, live, ready};
use recipe_backend::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct the HTTP server and mark it ready.
///
/// OS signal handling is left to the caller, which should call
/// [`HealthState::mark_unhealthy`] before stopping the returned server.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let ServerConfig {
        bind_addr,
        #[cfg(feature = "metrics")]
        prometheus,
    } = config;

    #[cfg(feature = "metrics")]
    let metrics_layer = MetricsLayer::from_option(prometheus);

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone());

        #[cfg(feature = "metrics")]
        let app = app.wrap(metrics_layer.clone());

        app
    })
    .disable_signals()
    .bind(bind_addr)?
    .run();

    health_state.mark_ready();
    Ok(server)
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::test;
    use recipe_backend::domain::{RecipeDraft, User};
    use recipe_backend::example_data::SeededStores;
    use recipe_backend::outbound::memory::{InMemoryRecipeRepository, InMemoryUserRepository};
    use rstest::rstest;

    use super::*;

    fn http_state() -> web::Data<HttpState> {
        build_http_state(SeededStores {
            recipes: InMemoryRecipeRepository::seeded([RecipeDraft::new("tea", false)]),
            users: InMemoryUserRepository::new(Vec::<User>::new()),
        })
    }

    #[rstest]
    #[case("/recipes", StatusCode::OK)]
    #[case("/users", StatusCode::OK)]
    #[case("/health/live", StatusCode::OK)]
    #[case("/health/ready", StatusCode::SERVICE_UNAVAILABLE)]
    #[actix_web::test]
    async fn app_routes_requests(#[case] uri: &str, #[case] expected: StatusCode) {
        let app = test::init_service(build_app(
            web::Data::new(HealthState::new()),
            http_state(),
        ))
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;

        assert_eq!(res.status(), expected);
        assert!(res.headers().contains_key("trace-id"));
    }
}
