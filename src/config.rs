use std::env;

/// Client-side settings, loaded from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub generation_endpoint: String,
    pub request_timeout_secs: u64,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            generation_endpoint: env::var("GENERATION_ENDPOINT")
                .unwrap_or_else(|_| "http://127.0.0.1:8787/functions/generate-content".to_string()),
            request_timeout_secs: env::var("GENERATION_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}
