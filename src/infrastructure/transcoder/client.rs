use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

use super::auth::TokenSource;
use super::{CreatedJob, JobRequest, Transcoder, TranscoderError};
use crate::config::settings::AppConfig;

/// REST client for the Transcoder API (`v1`).
#[derive(Clone)]
pub struct TranscoderClient {
    http: Client,
    endpoint: String,
    tokens: TokenSource,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

impl TranscoderClient {
    pub fn new(endpoint: &str, tokens: TokenSource) -> Self {
        info!("✅ Transcoder client targeting {}", endpoint);

        Self {
            http: Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.api_endpoint,
            TokenSource::from_config(config.access_token.clone()),
        )
    }

    fn jobs_url(&self, parent: &str) -> String {
        format!("{}/v1/{}/jobs", self.endpoint, parent)
    }
}

#[async_trait]
impl Transcoder for TranscoderClient {
    async fn create_job(
        &self,
        parent: &str,
        job: &JobRequest,
    ) -> Result<CreatedJob, TranscoderError> {
        let token = self.tokens.token(&self.http).await?;

        let response = self
            .http
            .post(self.jobs_url(parent))
            .bearer_auth(token)
            .json(job)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<CreatedJob>().await?);
        }

        let body = response.text().await.unwrap_or_default();
        Err(match serde_json::from_str::<ApiErrorBody>(&body) {
            Ok(parsed) => TranscoderError::Api {
                status: if parsed.error.status.is_empty() {
                    status.to_string()
                } else {
                    parsed.error.status
                },
                message: parsed.error.message,
            },
            Err(_) => TranscoderError::Api {
                status: status.to_string(),
                message: body,
            },
        })
    }
}
