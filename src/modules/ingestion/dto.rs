use axum::http::{HeaderMap, header};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use super::model::{IngestOutcome, Notification, OutcomeKind};

const STRUCTURED_CONTENT_TYPE: &str = "application/cloudevents+json";
const CE_ID_HEADER: &str = "ce-id";

/// Event id from the `ce-id` header, readable even when the body is not.
pub fn header_event_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(CE_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// A decoded storage-change CloudEvent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    pub id: String,
    pub notification: Notification,
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid storage event payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Structured content mode envelope; only the fields we use.
#[derive(Debug, Deserialize)]
struct StructuredEvent {
    #[serde(default)]
    id: Option<String>,
    data: Notification,
}

impl StorageEvent {
    /// Accepts both binary mode (`ce-*` headers, object JSON body) and
    /// structured mode (`application/cloudevents+json` envelope).
    pub fn decode(headers: &HeaderMap, body: &[u8]) -> Result<Self, DecodeError> {
        let structured = headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with(STRUCTURED_CONTENT_TYPE));

        let (id, notification) = if structured {
            let event: StructuredEvent = serde_json::from_slice(body)?;
            (event.id, event.data)
        } else {
            (header_event_id(headers), serde_json::from_slice(body)?)
        };

        Ok(Self {
            id: id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            notification,
        })
    }
}

/// Acknowledgement body returned to the delivery mechanism.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct IngestResponse {
    pub event_id: Option<String>,
    pub outcome: OutcomeKind,
    pub input_uri: Option<String>,
    pub output_uri: Option<String>,
    pub job_name: Option<String>,
    pub detail: Option<String>,
}

impl IngestResponse {
    pub fn from_outcome(event_id: &str, outcome: &IngestOutcome) -> Self {
        let job = outcome.job();
        let (job_name, detail) = match outcome {
            IngestOutcome::Skipped { guessed, .. } => {
                (None, Some(format!("not a video; guessed {}", guessed)))
            }
            IngestOutcome::Submitted { job_name, .. } => (Some(job_name.clone()), None),
            IngestOutcome::SubmissionFailed { error, .. } => (None, Some(error.clone())),
        };

        Self {
            event_id: Some(event_id.to_string()),
            outcome: outcome.kind(),
            input_uri: job.map(|j| j.input_uri.clone()),
            output_uri: job.map(|j| j.output_uri.clone()),
            job_name,
            detail,
        }
    }

    pub fn rejected(event_id: Option<String>, detail: String) -> Self {
        Self {
            event_id,
            outcome: OutcomeKind::Rejected,
            input_uri: None,
            output_uri: None,
            job_name: None,
            detail: Some(detail),
        }
    }
}
