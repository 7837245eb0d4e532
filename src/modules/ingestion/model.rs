use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::media::{self, MediaClass};
use crate::infrastructure::transcoder::JobRequest;

pub const STORAGE_SCHEME: &str = "gs";
pub const TEMPLATE_ID: &str = "preset/web-hd";

/// Storage object described by a finalize notification.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct Notification {
    pub bucket: String,
    #[serde(rename = "name")]
    pub object_path: String,
    #[serde(rename = "contentType", default)]
    pub declared_media_type: Option<String>,
}

impl Notification {
    pub fn declared(&self) -> &str {
        self.declared_media_type.as_deref().unwrap_or_default()
    }

    pub fn input_uri(&self) -> String {
        format!("{}://{}/{}", STORAGE_SCHEME, self.bucket, self.object_path)
    }
}

/// `serving_bucket/<object path without its media suffix>/`
pub fn output_location(serving_bucket: &str, object_path: &str, media_type: &str) -> String {
    let base = media::strip_media_suffix(object_path, media_type);
    format!("{}/{}/", serving_bucket, base)
}

pub fn build_job(notification: &Notification, serving_bucket: &str, media_type: &str) -> JobRequest {
    let location = output_location(serving_bucket, &notification.object_path, media_type);
    JobRequest {
        input_uri: notification.input_uri(),
        output_uri: format!("{}://{}", STORAGE_SCHEME, location),
        template_id: TEMPLATE_ID.to_string(),
    }
}

/// Terminal state of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestOutcome {
    Skipped {
        declared: String,
        guessed: MediaClass,
    },
    Submitted {
        job: JobRequest,
        job_name: String,
    },
    SubmissionFailed {
        job: JobRequest,
        error: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Skipped,
    Submitted,
    SubmissionFailed,
    Rejected,
}

impl IngestOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            IngestOutcome::Skipped { .. } => OutcomeKind::Skipped,
            IngestOutcome::Submitted { .. } => OutcomeKind::Submitted,
            IngestOutcome::SubmissionFailed { .. } => OutcomeKind::SubmissionFailed,
        }
    }

    pub fn job(&self) -> Option<&JobRequest> {
        match self {
            IngestOutcome::Skipped { .. } => None,
            IngestOutcome::Submitted { job, .. } | IngestOutcome::SubmissionFailed { job, .. } => {
                Some(job)
            }
        }
    }
}
