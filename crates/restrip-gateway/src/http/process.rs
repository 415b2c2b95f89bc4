//! Auto-crop — POST /api/process.
//!
//! Runs the crop service over a stored image and stores the result as a new
//! image, returning the new ref. With the default pass-through crop this is
//! a copy, but the wire contract is the real one.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::app::AppState;
use restrip_core::{ImageRef, RestripError};

#[derive(Debug, Deserialize)]
pub struct ProcessSnapRequest {
    pub image_ref: String,
}

/// POST /api/process
///
/// Returns 200 + the cropped image's ref, 404 for an unknown ref.
pub async fn process_snap_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProcessSnapRequest>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let image_ref = ImageRef::from(req.image_ref.as_str());

    let stored = state.images.get(&image_ref).await.map_err(process_error)?;
    let cropped = state
        .crop
        .crop(&stored.bytes, &stored.content_type)
        .await
        .map_err(process_error)?;
    let cropped_ref = state
        .images
        .put(cropped, &stored.content_type)
        .await
        .map_err(process_error)?;

    info!(source = %image_ref, cropped = %cropped_ref, "auto-crop complete");
    Ok(Json(json!({"ok": true, "image_ref": cropped_ref})))
}

fn process_error(e: RestripError) -> (StatusCode, Json<Value>) {
    let status = match &e {
        RestripError::ImageNotFound { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({"error": e.to_string(), "code": e.code()})))
}

#[cfg(test)]
mod tests {
    use super::*;
    use restrip_core::RestripConfig;

    fn state() -> Arc<AppState> {
        Arc::new(AppState::in_memory(RestripConfig::default()))
    }

    #[tokio::test]
    async fn cropping_a_stored_image_yields_a_new_ref() {
        let state = state();
        let original = state
            .images
            .put(vec![0xFF, 0xD8], "image/jpeg")
            .await
            .unwrap();

        let res = process_snap_handler(
            State(state.clone()),
            Json(ProcessSnapRequest {
                image_ref: original.to_string(),
            }),
        )
        .await
        .unwrap();

        let new_ref = res.0["image_ref"].as_str().unwrap().to_string();
        assert_ne!(new_ref, original.to_string());
        assert!(state.images.contains(&ImageRef::from(new_ref.as_str())).await);
    }

    #[tokio::test]
    async fn unknown_ref_gets_404() {
        let res = process_snap_handler(
            State(state()),
            Json(ProcessSnapRequest {
                image_ref: "nope".to_string(),
            }),
        )
        .await;
        let (status, body) = res.unwrap_err();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.0["code"], "IMAGE_NOT_FOUND");
    }
}
