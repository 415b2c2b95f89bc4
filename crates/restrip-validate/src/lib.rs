//! `restrip-validate` — the submission gate.
//!
//! One pure function, [`validate_submission`], decides whether a draft may
//! proceed to storage and delivery. It either accepts, or returns every
//! field-level problem at once so the form can surface them together
//! instead of forcing a fix-one-resubmit loop.

pub mod address;
pub mod error;
pub mod submission;

pub use error::{FieldError, ValidationErrors};
pub use submission::{validate_submission, SubmissionDraft};
