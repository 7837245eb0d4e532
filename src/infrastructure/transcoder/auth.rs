use reqwest::Client;
use serde::Deserialize;

use super::TranscoderError;

const METADATA_TOKEN_URL: &str =
    "http://metadata.google.internal/computeMetadata/v1/instance/service-accounts/default/token";

/// Where bearer tokens for the transcoder API come from.
#[derive(Debug, Clone)]
pub enum TokenSource {
    /// Fixed token, usually for local runs against a proxy or emulator.
    Static(String),
    /// Instance metadata server of the hosting platform.
    Metadata { url: String },
}

#[derive(Debug, Deserialize)]
struct MetadataToken {
    access_token: String,
}

impl TokenSource {
    pub fn from_config(access_token: Option<String>) -> Self {
        match access_token {
            Some(token) => TokenSource::Static(token),
            None => TokenSource::Metadata {
                url: METADATA_TOKEN_URL.to_string(),
            },
        }
    }

    /// Fetches a token. Nothing is cached between calls.
    pub async fn token(&self, http: &Client) -> Result<String, TranscoderError> {
        match self {
            TokenSource::Static(token) => Ok(token.clone()),
            TokenSource::Metadata { url } => {
                let response = http
                    .get(url)
                    .header("Metadata-Flavor", "Google")
                    .send()
                    .await
                    .map_err(|e| TranscoderError::Auth(e.to_string()))?;

                if !response.status().is_success() {
                    return Err(TranscoderError::Auth(format!(
                        "metadata server returned {}",
                        response.status()
                    )));
                }

                let token: MetadataToken = response
                    .json()
                    .await
                    .map_err(|e| TranscoderError::Auth(e.to_string()))?;
                Ok(token.access_token)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_token_wins() {
        let source = TokenSource::from_config(Some("abc".to_string()));
        assert!(matches!(source, TokenSource::Static(ref t) if t == "abc"));
    }

    #[test]
    fn test_falls_back_to_metadata_server() {
        let source = TokenSource::from_config(None);
        match source {
            TokenSource::Metadata { url } => assert_eq!(url, METADATA_TOKEN_URL),
            other => panic!("unexpected source {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_static_token_needs_no_network() {
        let source = TokenSource::Static("abc".to_string());
        let token = source.token(&Client::new()).await.unwrap();
        assert_eq!(token, "abc");
    }
}
