use chrono::{DateTime, FixedOffset};
use restrip_core::config::MAX_CAPTION_CHARS;
use restrip_core::DeliveryMethod;

use crate::address;
use crate::error::{FieldError, ValidationErrors};

/// Everything the form holds at the moment the user hits submit.
///
/// Assembled transiently by the caller from live UI state and discarded once
/// validation resolves; nothing here is persisted.
#[derive(Debug, Clone)]
pub struct SubmissionDraft {
    pub caption: String,
    /// Whether a photo strip has been uploaded (the crop may still be in
    /// flight — only presence matters here).
    pub image_uploaded: bool,
    /// The scheduler's current output; `None` while the selection is pending.
    pub send_time: Option<DateTime<FixedOffset>>,
    /// `None` when the form sent a tag we do not recognize.
    pub delivery_method: Option<DeliveryMethod>,
    pub delivery_address: String,
    pub password: String,
}

/// Gate a submission: accept, or report every violation at once.
///
/// A missing image short-circuits with a single error — there is nothing to
/// schedule without a photo. Every other check runs unconditionally and its
/// failures accumulate in form order. Pure and idempotent: the same draft
/// always yields the same outcome.
pub fn validate_submission(draft: &SubmissionDraft) -> Result<(), ValidationErrors> {
    if !draft.image_uploaded {
        return Err(ValidationErrors::single(FieldError::MissingImage));
    }

    let mut errors = Vec::new();

    let caption = draft.caption.trim();
    if caption.is_empty() {
        errors.push(FieldError::EmptyCaption);
    } else if caption.chars().count() > MAX_CAPTION_CHARS {
        errors.push(FieldError::CaptionTooLong {
            max: MAX_CAPTION_CHARS,
        });
    }

    if draft.send_time.is_none() {
        errors.push(FieldError::UnresolvedSendTime);
    }

    match draft.delivery_method {
        None => errors.push(FieldError::UnknownDeliveryMethod),
        Some(method) => {
            if !address::is_valid(method, draft.delivery_address.trim()) {
                errors.push(FieldError::InvalidDeliveryAddress(method));
            }
        }
    }

    if draft.password.is_empty() {
        errors.push(FieldError::EmptyPassword);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors::new(errors))
    }
}
