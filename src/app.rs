use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use http::header;
use tower::ServiceBuilder;
use tower_http::{
    ServiceBuilderExt,
    cors::{AllowOrigin, Any, CorsLayer},
    propagate_header::PropagateHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_docs::ApiDoc;
use crate::config::Config;
use crate::middleware::http_logger::http_logger;
use crate::routes;
use crate::state::AppState;

pub fn create_app(state: AppState) -> anyhow::Result<Router> {
    let config = state.config.clone();

    let mut router = Router::new()
        .merge(routes::health::create_route())
        .merge(routes::auth::create_route())
        .merge(routes::admin::create_route())
        .merge(routes::student::create_route())
        .merge(routes::teacher::create_route())
        .merge(routes::education::create_route())
        .merge(routes::experience::create_route())
        .merge(routes::award::create_route())
        .merge(routes::publication::create_route())
        .merge(routes::course::create_route())
        .merge(routes::room::create_route())
        .merge(routes::meetings::create_route())
        .merge(routes::exam::create_route())
        .merge(routes::notice::create_route())
        .merge(routes::event::create_route())
        .merge(routes::results::create_route())
        .merge(routes::equipment::create_route())
        .merge(routes::contact::create_route())
        .merge(routes::files::create_route())
        .with_state(state);

    if config.swagger_enabled {
        let swagger_ui =
            SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi());
        router = router.merge(swagger_ui);
    }

    let sensitive_headers: Arc<[_]> = vec![header::AUTHORIZATION, header::COOKIE].into();

    // from_fn middleware cannot go through ServiceBuilder
    let router = router
        .layer(middleware::from_fn(http_logger))
        .layer(DefaultBodyLimit::max(config.max_upload_bytes));

    let middleware = ServiceBuilder::new()
        .layer(cors_layer(&config))
        .layer(PropagateHeaderLayer::new(header::HeaderName::from_static(
            "x-request-id",
        )))
        .sensitive_request_headers(sensitive_headers.clone())
        .sensitive_response_headers(sensitive_headers)
        .compression();

    Ok(router.layer(middleware))
}

fn cors_layer(config: &Config) -> CorsLayer {
    let allowed_headers = [
        header::CONTENT_TYPE,
        header::AUTHORIZATION,
        header::ACCEPT,
        header::ACCEPT_LANGUAGE,
    ];

    let allowed_methods = [
        http::Method::GET,
        http::Method::POST,
        http::Method::PUT,
        http::Method::DELETE,
        http::Method::PATCH,
        http::Method::OPTIONS,
    ];

    if config.cors_allowed_origins.trim() == "*" {
        // Credentials cannot be combined with a wildcard origin.
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(allowed_methods)
            .allow_headers(allowed_headers)
            .allow_credentials(false)
    } else {
        let origins: Vec<http::HeaderValue> = config
            .cors_allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(allowed_methods)
            .allow_headers(allowed_headers)
            .allow_credentials(true)
    }
}
