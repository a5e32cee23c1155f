//! HTTP entry points for the ingestion handler.

use crate::error::HttpAppError;
use crate::services::ingest::ingest;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use std::sync::Arc;
use ytingest_core::{IngestRequest, IngestResult};

/// `POST /` and `POST /ingest`. The body is decoded leniently, so a missing or
/// malformed body processes the default video.
pub async fn ingest_from_body(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Response, HttpAppError> {
    let request = IngestRequest::from_body(&body);
    run(&state, &request).await
}

/// `GET /ingest`: process the default video.
pub async fn ingest_default(State(state): State<Arc<AppState>>) -> Result<Response, HttpAppError> {
    run(&state, &IngestRequest::default()).await
}

async fn run(state: &AppState, request: &IngestRequest) -> Result<Response, HttpAppError> {
    let result = ingest(
        request,
        &state.ingest,
        state.extractor.as_ref(),
        state.storage.as_ref(),
    )
    .await?;

    Ok(result_response(result))
}

fn result_response(result: IngestResult) -> Response {
    let status =
        StatusCode::from_u16(result.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, result.message).into_response()
}
