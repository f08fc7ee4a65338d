use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::StatusCode;
use serde::Deserialize;
use url::Url;

use crate::client::models::request::GenerationRequest;
use crate::config::ClientConfig;

/// Wire shape of the generation response. The service either returns
/// `content` or reports its own failure through `error.message`.
#[derive(Debug, Deserialize)]
struct GenerateBody {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    #[serde(default)]
    message: String,
}

/// HTTP collaborator for the remote generation endpoint. One POST per
/// accepted submission; no retries, no deduplication.
pub struct GenerationService {
    config: ClientConfig,
}

impl GenerationService {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let endpoint = Url::parse(&self.config.generation_endpoint).with_context(|| {
            format!(
                "invalid generation endpoint: {}",
                self.config.generation_endpoint
            )
        })?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.config.request_timeout_secs))
            .build()
            .context("could not build the HTTP client")?;

        log::info!("POST {}", endpoint);
        let response = client
            .post(endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_transport_error)?;
        let status = response.status();
        let body: GenerateBody = response
            .json()
            .await
            .map_err(|e| anyhow!("the generation service returned an unreadable response: {}", e))?;
        content_from_body(status, body)
    }
}

fn map_transport_error(err: reqwest::Error) -> anyhow::Error {
    if err.is_timeout() {
        anyhow!("The generation service did not respond in time. Please try again.")
    } else {
        anyhow!("Could not reach the generation service: {}", err)
    }
}

fn content_from_body(status: StatusCode, body: GenerateBody) -> Result<String> {
    // a service-reported error wins over the HTTP status; its message may be
    // empty, in which case the caller substitutes the generic fallback
    if let Some(error) = body.error {
        return Err(anyhow!("{}", error.message.trim()));
    }
    if !status.is_success() {
        return Err(anyhow!("the generation service returned HTTP {}", status));
    }
    match body.content {
        Some(content) => Ok(content),
        None => Err(anyhow!(
            "the generation service response did not include any content"
        )),
    }
}
