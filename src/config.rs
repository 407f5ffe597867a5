use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub service_url: String,
    pub service_key: String,
    pub access_token: Option<String>,
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let service_url = env::var("RXDESK_SERVICE_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:54321".to_string());

        let service_key =
            env::var("RXDESK_SERVICE_KEY").map_err(|_| ConfigError::MissingServiceKey)?;

        // Absent token means the workstation session is signed out
        let access_token = env::var("RXDESK_ACCESS_TOKEN").ok();

        let http_timeout_secs = env::var("RXDESK_HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        Ok(Config {
            service_url,
            service_key,
            access_token,
            http_timeout_secs,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("RXDESK_SERVICE_KEY environment variable not set")]
    MissingServiceKey,

    #[error("Invalid HTTP timeout")]
    InvalidTimeout,
}
