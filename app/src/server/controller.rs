use super::open_api;
use crate::{
    config::app_config,
    modules::{
        aluno, horario, monitor, motorista, onibus, parada, presenca, relatorio, rota, viagem,
    },
};
use axum::{body::Body, routing::get, Router};
use http::{header, HeaderValue, Method, Request, StatusCode};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

/// The main application state, this is cloned for every HTTP
/// request and thus its fields should contain types that are cheap
/// to clone.
///
/// the connection sits behind a Arc because the seaorm mock feature,
/// enabled for test builds, removes `Clone` from `DatabaseConnection`
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
}

/// Creates the main axum router/controller to be served over http
pub fn new(db: Arc<DatabaseConnection>) -> Router {
    let state = AppState { db };

    // a trailing slash on the origin breaks the CORS allow list
    let frontend_origin = app_config().frontend_url.trim_end_matches('/').to_string();

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(
            frontend_origin
                .parse::<HeaderValue>()
                .expect("failed to parse CORS allowed origins"),
        )
        .allow_credentials(true)
        .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE]);

    let tracing_layer = TraceLayer::new_for_http()
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!("request: {} {}", request.method(), request.uri().path())
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let global_middlewares = ServiceBuilder::new().layer(tracing_layer).layer(cors);

    Router::new()
        .merge(open_api::create_openapi_router())
        .route("/healthcheck", get(healthcheck))
        .nest("/alunos", aluno::routes::create_router())
        .nest("/motoristas", motorista::routes::create_router())
        .nest("/monitores", monitor::routes::create_router())
        .nest("/onibus", onibus::routes::create_router())
        .nest("/paradas", parada::routes::create_router())
        .nest("/rotas", rota::routes::create_router())
        .nest("/horarios", horario::routes::create_router())
        .nest("/viagens", viagem::routes::create_router())
        .nest("/presencas", presenca::routes::create_router())
        .nest("/relatorios", relatorio::routes::create_router())
        .layer(global_middlewares)
        .with_state(state)
}

#[utoipa::path(
    get,
    tag = "meta",
    path = "/healthcheck",
    responses((status = OK)),
)]
pub async fn healthcheck() -> StatusCode {
    StatusCode::OK
}
