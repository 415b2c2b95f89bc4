//! Snap submission — POST /api/snaps.
//!
//! The one endpoint that gates everything: it recomputes the send time from
//! the submitted period selection, assembles the draft from the request, and
//! only hands the snap to the delivery sink if validation accepts. On
//! rejection the client gets every field error at once.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{Local, Utc};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

use restrip_core::{DeliveryMethod, ImageRef, RestripError, ScheduledSnap, SnapId};
use restrip_scheduler::{compute_send_time, PeriodSelection, RandomSource, SplitMix64};
use restrip_validate::{validate_submission, SubmissionDraft};

use crate::app::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSnapRequest {
    pub caption: String,
    /// Ref handed out by POST /api/upload; absent when nothing was uploaded.
    pub image_ref: Option<String>,
    pub period: PeriodSelection,
    /// Raw form tag; anything but "email"/"telegram" fails validation.
    pub delivery_method: String,
    pub delivery_address: String,
    pub password: String,
}

/// POST /api/snaps
///
/// Returns 202 + snap id and send time on success, 422 with the full list
/// of field errors when validation rejects.
pub async fn create_snap_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateSnapRequest>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let mut rng = SplitMix64::from_entropy();
    submit_snap(&state, req, &mut rng).await
}

/// Handler body with the random source injected, so tests can pin draws.
async fn submit_snap(
    state: &AppState,
    req: CreateSnapRequest,
    rng: &mut dyn RandomSource,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let now = Local::now().fixed_offset();

    // A claimed ref only counts when the store actually holds it.
    let mut image_ref = None;
    if let Some(claimed) = &req.image_ref {
        let claimed = ImageRef::from(claimed.as_str());
        if state.images.contains(&claimed).await {
            image_ref = Some(claimed);
        }
    }

    let draft = SubmissionDraft {
        caption: req.caption,
        image_uploaded: image_ref.is_some(),
        send_time: compute_send_time(&req.period, now, rng),
        delivery_method: req.delivery_method.parse::<DeliveryMethod>().ok(),
        delivery_address: req.delivery_address,
        password: req.password,
    };

    if let Err(errors) = validate_submission(&draft) {
        warn!(errors = errors.errors().len(), "snap submission rejected");
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "error": "validation failed",
                "messages": errors.messages(),
            })),
        ));
    }

    // All three are guaranteed present once validation accepts.
    let (Some(send_time), Some(delivery_method), Some(image_ref)) =
        (draft.send_time, draft.delivery_method, image_ref)
    else {
        return Err(internal_error(RestripError::Internal(
            "validated draft missing a resolved field".to_string(),
        )));
    };

    let snap = ScheduledSnap {
        id: SnapId::new(),
        caption: draft.caption.trim().to_string(),
        send_time,
        delivery_method,
        delivery_address: draft.delivery_address.trim().to_string(),
        image_ref,
        created_at: Utc::now(),
    };

    state.sink.schedule(&snap).await.map_err(internal_error)?;

    info!(snap_id = %snap.id, send_time = %snap.send_time, method = %snap.delivery_method,
        "snap scheduled");
    Ok((
        StatusCode::ACCEPTED,
        Json(json!({
            "ok": true,
            "id": snap.id,
            "send_time": snap.send_time,
        })),
    ))
}

fn internal_error(e: RestripError) -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({"error": e.to_string(), "code": e.code()})),
    )
}
