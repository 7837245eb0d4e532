//! Transcoding collaborator.
//!
//! The ingestion pipeline only talks to the [`Transcoder`] trait, so the
//! real REST client can be swapped for a test double.

pub mod auth;
pub mod client;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use client::TranscoderClient;

/// Job-submission request sent to the transcoding service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
    pub input_uri: String,
    pub output_uri: String,
    pub template_id: String,
}

/// What the service hands back when it accepts a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CreatedJob {
    /// Full resource name, e.g. `projects/p/locations/r/jobs/<id>`.
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Error)]
pub enum TranscoderError {
    #[error("failed to obtain access token: {0}")]
    Auth(String),

    #[error("request to transcoder API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("transcoder API returned {status}: {message}")]
    Api { status: String, message: String },
}

#[async_trait]
pub trait Transcoder: Send + Sync {
    /// Submit one job under `parent` (`projects/{id}/locations/{region}`).
    async fn create_job(
        &self,
        parent: &str,
        job: &JobRequest,
    ) -> Result<CreatedJob, TranscoderError>;
}
