pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Filestore API",
        version = "0.1.0",
        description = "Sandboxed file service consumed by the planrun orchestrator"
    ),
    paths(
        routes::health_check,
        routes::list_files,
        routes::read_file,
        routes::write_file,
    ),
    components(schemas(
        routes::HealthResponse,
        routes::ListQuery,
        routes::FileQuery,
        routes::FileContent,
        routes::FileListResponse,
    )),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "files", description = "Sandboxed file operations"),
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
        .route("/health", get(routes::health_check))
        .route("/list_files", get(routes::list_files))
        .route("/read_file", get(routes::read_file))
        .route("/write_file", post(routes::write_file))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
