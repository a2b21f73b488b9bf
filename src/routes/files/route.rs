use std::path::Path;

use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    response::Response,
    routing::get,
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::error::{AppError, AppResult};
use crate::extractor::AppPath;
use crate::state::AppState;
use crate::utils::upload::is_safe_file_name;

pub fn create_route() -> Router<AppState> {
    Router::new().route("/{filename}", get(serve_upload))
}

/// Streams a stored upload with a content type inferred from its extension.
#[utoipa::path(
    get,
    path = "/{filename}",
    params(("filename" = String, Path, description = "Stored file name")),
    responses(
        (status = 200, description = "File contents"),
        (status = 404, description = "File not found")
    ),
    tag = "Files"
)]
pub async fn serve_upload(
    State(state): State<AppState>,
    AppPath(filename): AppPath<String>,
    request: Request,
) -> AppResult<Response> {
    if !is_safe_file_name(&filename) {
        return Err(AppError::not_found("File not found"));
    }

    let path = Path::new(&state.config.upload_dir).join(&filename);
    let is_file = tokio::fs::metadata(&path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(AppError::not_found("File not found"));
    }

    let response = ServeFile::new(path)
        .oneshot(request)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read {filename}: {e}"))?;
    Ok(response.map(Body::new))
}
