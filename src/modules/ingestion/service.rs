use tracing::{error, info};

use super::media::{self, MediaClass};
use super::model::{self, IngestOutcome, Notification};
use crate::config::settings::AppConfig;
use crate::infrastructure::transcoder::Transcoder;

pub struct IngestionService;

impl IngestionService {
    /// Runs the whole decision pipeline for one notification. Submission
    /// failures are logged and returned as an outcome, never as an error.
    pub async fn ingest(
        config: &AppConfig,
        transcoder: &dyn Transcoder,
        notification: &Notification,
    ) -> IngestOutcome {
        let declared = notification.declared();

        let media_type = match media::classify(declared, &notification.object_path) {
            MediaClass::Video(media_type) => media_type,
            guessed => {
                info!(
                    "Ignoring {} non video mime_type: {:?}; guessed {}",
                    notification.input_uri(),
                    declared,
                    guessed
                );
                return IngestOutcome::Skipped {
                    declared: declared.to_string(),
                    guessed,
                };
            }
        };

        let job = model::build_job(notification, &config.serving_bucket, &media_type);

        match transcoder.create_job(&config.parent(), &job).await {
            Ok(created) => {
                info!("Transcoding {} -> {}", job.input_uri, job.output_uri);
                IngestOutcome::Submitted {
                    job,
                    job_name: created.name,
                }
            }
            Err(e) => {
                // Swallowed so the event is not redelivered.
                error!(
                    "❌ Transcode job creation failed for {}: {}",
                    job.input_uri, e
                );
                IngestOutcome::SubmissionFailed {
                    job,
                    error: e.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::transcoder::{CreatedJob, JobRequest, TranscoderError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTranscoder {
        calls: Mutex<Vec<(String, JobRequest)>>,
        fail_with: Option<String>,
    }

    #[async_trait]
    impl Transcoder for RecordingTranscoder {
        async fn create_job(
            &self,
            parent: &str,
            job: &JobRequest,
        ) -> Result<CreatedJob, TranscoderError> {
            self.calls
                .lock()
                .unwrap()
                .push((parent.to_string(), job.clone()));
            match &self.fail_with {
                Some(message) => Err(TranscoderError::Api {
                    status: "RESOURCE_EXHAUSTED".to_string(),
                    message: message.clone(),
                }),
                None => Ok(CreatedJob {
                    name: format!("{}/jobs/1", parent),
                }),
            }
        }
    }

    fn config() -> AppConfig {
        AppConfig {
            server_port: 8080,
            project_id: "my-project".to_string(),
            region: "us-central1".to_string(),
            serving_bucket: "vod_serving".to_string(),
            api_endpoint: "http://unused".to_string(),
            access_token: None,
        }
    }

    fn notification(path: &str, declared: &str) -> Notification {
        Notification {
            bucket: "vod_upload".to_string(),
            object_path: path.to_string(),
            declared_media_type: Some(declared.to_string()),
        }
    }

    #[tokio::test]
    async fn test_declared_video_is_submitted() {
        let transcoder = RecordingTranscoder::default();
        let outcome = IngestionService::ingest(
            &config(),
            &transcoder,
            &notification("foo/bar/baz/example.mp4", "video/mp4"),
        )
        .await;

        let calls = transcoder.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (parent, job) = &calls[0];
        assert_eq!(parent, "projects/my-project/locations/us-central1");
        assert_eq!(job.input_uri, "gs://vod_upload/foo/bar/baz/example.mp4");
        assert_eq!(job.output_uri, "gs://vod_serving/foo/bar/baz/example/");
        assert_eq!(job.template_id, "preset/web-hd");
        assert_eq!(
            outcome,
            IngestOutcome::Submitted {
                job: job.clone(),
                job_name: "projects/my-project/locations/us-central1/jobs/1".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_inferred_video_matches_declared() {
        let declared = RecordingTranscoder::default();
        let inferred = RecordingTranscoder::default();
        let path = "foo/bar/baz/example.mp4";

        IngestionService::ingest(&config(), &declared, &notification(path, "video/mp4")).await;
        IngestionService::ingest(&config(), &inferred, &notification(path, "")).await;

        assert_eq!(
            *declared.calls.lock().unwrap(),
            *inferred.calls.lock().unwrap()
        );
    }

    #[tokio::test]
    async fn test_declared_video_ignores_extension() {
        let transcoder = RecordingTranscoder::default();
        let outcome =
            IngestionService::ingest(&config(), &transcoder, &notification("upload.bin", "video/webm"))
                .await;

        assert_eq!(outcome.job().unwrap().output_uri, "gs://vod_serving/upload.bin/");
        assert_eq!(transcoder.calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_text_file_is_skipped() {
        let transcoder = RecordingTranscoder::default();
        let outcome =
            IngestionService::ingest(&config(), &transcoder, &notification("notes.txt", "text/plain"))
                .await;

        assert_eq!(
            outcome,
            IngestOutcome::Skipped {
                declared: "text/plain".to_string(),
                guessed: MediaClass::Other("text/plain".to_string()),
            }
        );
        assert!(transcoder.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_extension_is_skipped() {
        let transcoder = RecordingTranscoder::default();
        let outcome =
            IngestionService::ingest(&config(), &transcoder, &notification("blob.zzqx", "")).await;

        assert!(matches!(
            outcome,
            IngestOutcome::Skipped { guessed: MediaClass::Unknown, .. }
        ));
        assert!(transcoder.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_folder_placeholder_is_skipped() {
        let transcoder = RecordingTranscoder::default();
        let outcome =
            IngestionService::ingest(&config(), &transcoder, &notification("videos/clip.mp4/", ""))
                .await;

        assert!(matches!(
            outcome,
            IngestOutcome::Skipped { guessed: MediaClass::Unknown, .. }
        ));
        assert!(transcoder.calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_quicktime_suffix_stripped() {
        let transcoder = RecordingTranscoder::default();
        let outcome =
            IngestionService::ingest(&config(), &transcoder, &notification("clip.mov", "")).await;

        assert_eq!(outcome.job().unwrap().output_uri, "gs://vod_serving/clip/");
    }

    #[tokio::test]
    async fn test_submission_error_is_swallowed() {
        let transcoder = RecordingTranscoder {
            fail_with: Some("quota exceeded".to_string()),
            ..Default::default()
        };
        let outcome = IngestionService::ingest(
            &config(),
            &transcoder,
            &notification("foo/example.mp4", "video/mp4"),
        )
        .await;

        match outcome {
            IngestOutcome::SubmissionFailed { job, error } => {
                assert_eq!(job.input_uri, "gs://vod_upload/foo/example.mp4");
                assert!(error.contains("quota exceeded"));
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(transcoder.calls.lock().unwrap().len(), 1);
    }
}
