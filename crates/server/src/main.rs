use server::{create_router, state::AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_BIND: &str = "0.0.0.0:8000";
const DEFAULT_DATA_DIR: &str = "app_data";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let base_dir =
        std::env::var("FILESTORE_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_string());
    let bind = std::env::var("FILESTORE_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());

    let state = AppState::new(&base_dir)?;
    tracing::info!(base_dir = %state.base_dir.display(), "serving sandbox directory");

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!("Filestore listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
