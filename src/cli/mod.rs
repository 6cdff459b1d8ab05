use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    // --- DeepSeek Args ---
    /// API key for the DeepSeek chat-completion API. Chat routes are disabled when empty.
    #[arg(long, env = "DEEPSEEK_API_KEY", default_value = "", hide_env_values = true)]
    pub deepseek_api_key: String,

    /// Base URL of the DeepSeek API; `/chat/completions` is appended.
    #[arg(long, env = "DEEPSEEK_API_BASE_URL", default_value = "https://api.deepseek.com/v1")]
    pub deepseek_api_base_url: String,

    // --- Server Args ---
    /// Interface the HTTP server binds to.
    #[arg(long, env = "API_HOST", default_value = "0.0.0.0")]
    pub api_host: String,

    /// Port the HTTP server listens on.
    #[arg(long, env = "API_PORT", default_value = "8000")]
    pub api_port: u16,

    /// Enable debug logging/output
    #[arg(long, env = "DEBUG", default_value = "false")]
    pub debug: bool,

    /// Optional path to the TLS certificate file (PEM format) for serving HTTPS. Requires --tls-key-path.
    #[arg(long, env = "TLS_CERT_PATH")]
    pub tls_cert_path: Option<String>,

    /// Optional path to the TLS private key file (PEM format) for serving HTTPS. Requires --tls-cert-path.
    #[arg(long, env = "TLS_KEY_PATH")]
    pub tls_key_path: Option<String>,

    #[arg(long, env = "ENABLE_TLS", default_value = "false")]
    pub enable_tls: bool,
}
