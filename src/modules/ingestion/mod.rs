use axum::Router;
use axum::routing::post;
use crate::state::AppState;

pub mod dto;
pub mod handler;
pub mod media;
pub mod model;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new().route("/events/storage", post(handler::receive_storage_event))
}
