use anyhow::Context;
use segview::auth::{RestUserRepository, SessionManager, UserRepository};
use segview::config::AppConfig;
use segview::inference::load_artifacts;
use segview::segmentation::Segmenter;
use segview::store::ObservationStore;
use segview::viz::ChartRenderer;
use segview::web::{AppState, build_router, load_templates};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("loading configuration")?;

    // No artifacts, no service: the process must not accept traffic
    // without a scaler and a cluster model.
    let artifacts =
        load_artifacts(&config.models_dir).context("loading inference artifacts")?;
    info!(
        clusters = artifacts.kmeans.cluster_count(),
        "inference artifacts loaded"
    );

    let store = Arc::new(ObservationStore::new());
    let segmenter = Arc::new(Segmenter::new(
        Arc::new(artifacts.scaler),
        Arc::new(artifacts.kmeans),
        Arc::clone(&store),
    ));
    let renderer = Arc::new(ChartRenderer::new(&config.static_dir));
    let templates =
        Arc::new(load_templates(&config.templates_dir).context("loading templates")?);
    let users: Arc<dyn UserRepository> = Arc::new(RestUserRepository::new(
        &config.users_api_url,
        &config.users_api_key,
    ));
    let sessions = Arc::new(SessionManager::new(
        &config.session_secret,
        config.session_ttl_hours,
    ));

    let app = build_router(AppState {
        segmenter,
        store,
        renderer,
        users,
        sessions,
        templates,
    });

    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    info!(addr = %config.bind, "segview listening");
    axum::serve(listener, app).await.context("server loop")?;
    Ok(())
}
