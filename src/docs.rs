use utoipa::OpenApi;
use crate::modules::ingestion::dto::IngestResponse;
use crate::modules::ingestion::model::{Notification, OutcomeKind};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::ingestion::handler::receive_storage_event,
    ),
    components(
        schemas(Notification, IngestResponse, OutcomeKind)
    ),
    tags(
        (name = "Ingestion", description = "Storage notifications to transcoding jobs")
    )
)]
pub struct ApiDoc;
