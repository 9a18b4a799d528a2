use healthguard_service::{AppConfig, create_app};
use tokio::net::TcpListener;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let port = config.port;
    let app = create_app(config)?;
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    let addr = listener.local_addr()?;

    info!("HealthGuard analysis service starting on {}", addr);
    info!("Symptom analysis endpoint: POST http://{}/analyze-symptoms", addr);
    info!("Emotion analysis endpoint: POST http://{}/analyze-emotions", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
