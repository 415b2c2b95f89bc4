//! Upload ingress — POST /api/upload.
//!
//! Raw image body with a `Content-Type` header, no multipart. The handler
//! enforces the form contract (type allow-list, size cap) and hands the
//! bytes to the image store, returning the ref the client quotes back on
//! submission.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

use crate::app::AppState;
use restrip_core::RestripError;

/// POST /api/upload
///
/// Returns 200 + image_ref on success, 413 when the body exceeds the cap,
/// 415 for a content type outside the allow-list.
pub async fn upload_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let cfg = &state.config.upload;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !cfg.allowed_types.iter().any(|t| *t == content_type) {
        warn!(content_type = %content_type, "upload with disallowed content type");
        return Err((
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Json(json!({"error": "Only JPEG and PNG images are allowed"})),
        ));
    }

    if body.len() > cfg.max_bytes {
        warn!(bytes = body.len(), max = cfg.max_bytes, "upload too large");
        return Err((
            StatusCode::PAYLOAD_TOO_LARGE,
            Json(json!({"error": "File size must be less than 10MB"})),
        ));
    }

    let image_ref = state
        .images
        .put(body.to_vec(), &content_type)
        .await
        .map_err(upload_error)?;

    info!(image_ref = %image_ref, bytes = body.len(), "photo strip uploaded");
    Ok(Json(json!({"ok": true, "image_ref": image_ref})))
}

fn upload_error(e: RestripError) -> (StatusCode, Json<Value>) {
    let status = match &e {
        RestripError::Upload(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({"error": e.to_string(), "code": e.code()})))
}
