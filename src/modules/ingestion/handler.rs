use super::dto::{self, IngestResponse, StorageEvent};
use super::service::IngestionService;
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use tracing::{Instrument, info_span, warn};

/// Receive a storage object-finalized CloudEvent
///
/// Always answers 200 so the delivery mechanism never redelivers: skipped
/// objects, failed submissions and undecodable payloads are reported in the
/// body only.
#[utoipa::path(
    post,
    path = "/api/v1/events/storage",
    request_body(content = crate::modules::ingestion::model::Notification, description = "Storage object metadata (binary content mode)"),
    responses(
        (status = 200, description = "Event handled", body = ApiResponse<IngestResponse>)
    ),
    tag = "Ingestion"
)]
pub async fn receive_storage_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let event = match StorageEvent::decode(&headers, &body) {
        Ok(event) => event,
        Err(e) => {
            let event_id = dto::header_event_id(&headers);
            warn!(
                "Dropping undecodable storage event {}: {}",
                event_id.as_deref().unwrap_or("<no id>"),
                e
            );
            return ApiSuccess(
                ApiResponse::success(IngestResponse::rejected(event_id, e.to_string()), "Event rejected"),
                StatusCode::OK,
            )
            .into_response();
        }
    };

    let span = info_span!("ingest", event_id = %event.id);
    let outcome = IngestionService::ingest(
        &state.config,
        state.transcoder.as_ref(),
        &event.notification,
    )
    .instrument(span)
    .await;

    ApiSuccess(
        ApiResponse::success(
            IngestResponse::from_outcome(&event.id, &outcome),
            "Event handled",
        ),
        StatusCode::OK,
    )
    .into_response()
}
