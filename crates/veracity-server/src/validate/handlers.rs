use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use veracity_core::models::ValidationInput;

use crate::error::ApiError;
use crate::validate::requests::{ImageRequest, TextRequest, UrlRequest, VideoRequest};
use crate::validate::responses::ValidationResponse;
use crate::AppState;

type ApiResult = Result<Json<ValidationResponse>, ApiError>;

pub async fn validate_text(
    State(state): State<AppState>,
    payload: Result<Json<TextRequest>, JsonRejection>,
) -> ApiResult {
    let Json(req) = payload?;
    run(state, ValidationInput::Text(req.text.unwrap_or_default())).await
}

pub async fn validate_image(
    State(state): State<AppState>,
    payload: Result<Json<ImageRequest>, JsonRejection>,
) -> ApiResult {
    let Json(req) = payload?;
    run(state, ValidationInput::ImageUrl(req.image_url.unwrap_or_default())).await
}

pub async fn validate_video(
    State(state): State<AppState>,
    payload: Result<Json<VideoRequest>, JsonRejection>,
) -> ApiResult {
    let Json(req) = payload?;
    run(state, ValidationInput::VideoUrl(req.video_url.unwrap_or_default())).await
}

pub async fn validate_url(
    State(state): State<AppState>,
    payload: Result<Json<UrlRequest>, JsonRejection>,
) -> ApiResult {
    let Json(req) = payload?;
    run(state, ValidationInput::GenericUrl(req.url.unwrap_or_default())).await
}

/// Scoring probes over blocking HTTP and writes to SQLite, so it runs off the async workers.
async fn run(state: AppState, input: ValidationInput) -> ApiResult {
    let recorder = state.recorder.clone();
    let recorded =
        tokio::task::spawn_blocking(move || recorder.validate_and_record(&input)).await??;
    Ok(Json(ValidationResponse::from(recorded)))
}
