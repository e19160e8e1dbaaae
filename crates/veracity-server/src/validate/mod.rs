pub mod handlers;
pub mod requests;
pub mod responses;

use axum::routing::post;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate-text", post(handlers::validate_text))
        .route("/validate-image", post(handlers::validate_image))
        .route("/validate-video", post(handlers::validate_video))
        .route("/validate-url", post(handlers::validate_url))
}
