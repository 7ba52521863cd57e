use tracing_subscriber::EnvFilter;

use audit_api::app;
use audit_api::config::ApiConfig;
use audit_api::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    tracing::info!(service = %config.service_name, "starting compliance scoring function");

    let app = app(AppState::new(config));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
