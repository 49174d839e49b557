mod application;
mod config;
mod domain;
mod infrastructure;
mod presentation;

#[cfg(test)]
mod test_support;

use tracing::info;

use crate::config::AppConfig;
use crate::infrastructure::AppContainer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_env()?;
    info!(port = config.port, "Starting pdf-workspaces");

    let container = AppContainer::new(config).await?;
    container.http_server().run().await
}
