use std::path::Path;

use anyhow::Context;
use axum::{
    extract::{DefaultBodyLimit, Multipart, State},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{error::ApiError, state::AppState};

pub fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/api/upload", post(upload_file))
        .layer(DefaultBodyLimit::max(20 * 1024 * 1024)) // 20MB
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
    pub path: String,
}

/// Accepts a single multipart "file" field and writes it to the content
/// directory under a random name. Content is not inspected.
#[instrument(skip(state, multipart))]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let original = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| anyhow::anyhow!("read upload body: {e}"))?;

        let dir = &state.config.upload_dir;
        tokio::fs::create_dir_all(dir)
            .await
            .context("create upload dir")?;

        let filename = unique_filename(&original);
        tokio::fs::write(dir.join(&filename), &data)
            .await
            .context("write upload")?;

        info!(%filename, size = data.len(), "file uploaded");
        return Ok(Json(UploadResponse {
            message: "File uploaded successfully".into(),
            path: format!("/uploads/{filename}"),
            filename,
        }));
    }

    Err(ApiError::Validation("No file uploaded".into()))
}

/// Random name keeping the original extension, so concurrent uploads
/// cannot collide.
fn unique_filename(original: &str) -> String {
    match Path::new(original).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
        None => Uuid::new_v4().to_string(),
    }
}
