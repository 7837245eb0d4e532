use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvKey {
    ServerPort,
    ProjectId,
    Region,
    ServingBucket,
    ApiEndpoint,
    AccessToken,
}

impl EnvKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            EnvKey::ServerPort => "PORT",
            EnvKey::ProjectId => "TRANSCODE_PROJECT_ID",
            EnvKey::Region => "TRANSCODE_REGION",
            EnvKey::ServingBucket => "TRANSCODE_SERVING_BUCKET",
            EnvKey::ApiEndpoint => "TRANSCODE_API_ENDPOINT",
            EnvKey::AccessToken => "TRANSCODE_ACCESS_TOKEN",
        }
    }
}

pub fn lookup(key: EnvKey) -> Option<String> {
    env::var(key.as_str()).ok()
}

pub fn get_parsed<T: FromStr>(value: Option<String>, default: T) -> T {
    match value {
        Some(val) => val.parse::<T>().unwrap_or(default),
        None => default,
    }
}
