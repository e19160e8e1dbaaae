pub mod handlers;
pub mod responses;

use axum::routing::get;
use axum::Router;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validations/recent", get(handlers::list_recent))
        .route("/validations/:id", get(handlers::get_validation))
}
