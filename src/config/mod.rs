use log::warn;
use std::error::Error;
use std::net::SocketAddr;

use crate::cli::Args;
use crate::llm::LlmConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TlsConfig {
    pub cert_path: String,
    pub key_path: String,
}

/// Process configuration, resolved once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct Settings {
    pub llm: LlmConfig,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub tls: Option<TlsConfig>,
}

impl Settings {
    pub fn from_args(args: &Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let tls = if args.enable_tls {
            match (&args.tls_cert_path, &args.tls_key_path) {
                (Some(cert_path), Some(key_path)) =>
                    Some(TlsConfig { cert_path: cert_path.clone(), key_path: key_path.clone() }),
                _ => {
                    return Err(
                        "Both --tls-cert-path and --tls-key-path must be provided to enable TLS.".into()
                    );
                }
            }
        } else {
            None
        };

        Ok(Self {
            llm: LlmConfig::new(args.deepseek_api_key.clone(), args.deepseek_api_base_url.clone()),
            host: args.api_host.clone(),
            port: args.api_port,
            debug: args.debug,
            tls,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, Box<dyn Error + Send + Sync>> {
        let addr = format!("{}:{}", self.host, self.port)
            .parse::<SocketAddr>()
            .map_err(|e| format!("Invalid listen address '{}:{}': {}", self.host, self.port, e))?;
        Ok(addr)
    }

    /// Returns false (and warns) when the chat subsystem cannot start.
    pub fn validate(&self) -> bool {
        if !self.llm.api_key_configured() {
            warn!("DEEPSEEK_API_KEY is not set. Chat functionality will not work.");
            return false;
        }
        true
    }
}

/// Masks a secret for log output, keeping a short prefix.
pub fn mask_secret(secret: &str) -> String {
    if secret.is_empty() {
        return "<unset>".to_string();
    }
    let prefix: String = secret.chars().take(4).collect();
    format!("{}****", prefix)
}
