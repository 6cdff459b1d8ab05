pub mod cli;
pub mod config;
pub mod llm;
pub mod models;
pub mod server;
pub mod service;

use cli::Args;
use config::{ mask_secret, Settings };
use log::{ info, warn };
use server::{ AppState, Server };
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    let settings = Settings::from_args(&args)?;

    info!("--- Core Configuration ---");
    info!("Listen Address: {}:{}", settings.host, settings.port);
    info!("DeepSeek Base URL: {}", settings.llm.base_url);
    info!("DeepSeek API Key: {}", mask_secret(settings.llm.api_key.as_deref().unwrap_or("")));
    info!("Upstream Timeout: {:?}", settings.llm.timeout);
    info!("TLS Enabled: {}", settings.tls.is_some());
    info!("Debug: {}", settings.debug);
    info!("-------------------------");

    if !settings.validate() {
        warn!("Chat endpoints will answer 503 until DEEPSEEK_API_KEY is configured.");
    }

    let state = AppState::from_settings(&settings);
    let server = Server::new(settings, state);
    server.run().await?;

    Ok(())
}
