use holocron::{config::Config, model::app::AppState, router, startup};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await.unwrap();

    let app = router::routes()
        .with_state(AppState { db })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&address).await.unwrap();

    tracing::info!("Starting server on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await
        .unwrap();
}
