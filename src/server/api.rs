use axum::Router;
use log::{ error, info };
use std::error::Error;

use crate::config::Settings;

pub async fn start_http_server(
    settings: &Settings,
    app: Router,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let addr = settings.socket_addr()?;

    if let Some(tls) = &settings.tls {
        info!(
            "TLS enabled. Loading certificate from '{}' and key from '{}'",
            tls.cert_path,
            tls.key_path
        );
        let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(
            &tls.cert_path,
            &tls.key_path
        ).await?;

        info!("Starting HTTPS API server on: https://{}", addr);
        axum_server::bind_rustls(addr, tls_config)
            .serve(app.into_make_service())
            .await
            .map_err(|e| {
                error!("HTTPS server error: {}", e);
                e
            })?;
    } else {
        let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
            error!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e);
            e
        })?;

        info!("Starting HTTP API server on: http://{}", addr);
        axum::serve(listener, app.into_make_service()).await.map_err(|e| {
            error!("HTTP server error: {}", e);
            e
        })?;
    }

    Ok(())
}
