//! Landing page served from the views directory.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tracing::error;

use wildlife_service_shared::AppState;

/// Body returned when `views/index.html` is missing.
pub const INDEX_MISSING_MESSAGE: &str = "index.html not found. Please check the views folder.";

/// GET /
pub async fn index(State(state): State<AppState>) -> Response {
    let path = state.config().index_path();
    match tokio::fs::read_to_string(&path).await {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            error!(path = %path.display(), error = %err, "index.html not found");
            (StatusCode::INTERNAL_SERVER_ERROR, INDEX_MISSING_MESSAGE).into_response()
        }
    }
}
