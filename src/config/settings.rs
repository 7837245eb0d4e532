use crate::config::env::{self, EnvKey};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_API_ENDPOINT: &str = "https://transcoder.googleapis.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
}

/// Process-wide settings, read once at startup and never reloaded.
#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub project_id: String,
    pub region: String,
    pub serving_bucket: String,
    pub api_endpoint: String,
    pub access_token: Option<String>,
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_lookup(env::lookup)
    }

    /// Builds the config from an arbitrary key lookup. Blank values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(EnvKey) -> Option<String>,
    {
        let get = |key: EnvKey| lookup(key).filter(|v| !v.trim().is_empty());
        let require = |key: EnvKey| get(key).ok_or(ConfigError::Missing(key.as_str()));

        Ok(Self {
            server_port: env::get_parsed(get(EnvKey::ServerPort), DEFAULT_PORT),
            project_id: require(EnvKey::ProjectId)?,
            region: require(EnvKey::Region)?,
            serving_bucket: require(EnvKey::ServingBucket)?,
            api_endpoint: get(EnvKey::ApiEndpoint)
                .unwrap_or_else(|| DEFAULT_API_ENDPOINT.to_string()),
            access_token: get(EnvKey::AccessToken),
        })
    }

    /// Parent resource that transcoding jobs are created under.
    pub fn parent(&self) -> String {
        format!("projects/{}/locations/{}", self.project_id, self.region)
    }
}
