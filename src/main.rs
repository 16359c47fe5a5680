use anyhow::Result;
use dotenvy::dotenv;
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fleet_admin::config::EnvironmentConfig;
use fleet_admin::models::new_session_handle;
use fleet_admin::shell::App;
use fleet_admin::FleetApiClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fleet_admin=info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = EnvironmentConfig::from_env()?;
    info!("🚚 Fleet Admin");
    info!("🌐 Backend: {}", config.api_base_url);

    let client = FleetApiClient::new(&config, new_session_handle())?;

    let stdin = io::stdin();
    let mut app = App::new(client, &config, stdin.lock(), io::stdout());
    app.run().await?;

    Ok(())
}
