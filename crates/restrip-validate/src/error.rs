use restrip_core::DeliveryMethod;
use thiserror::Error;

/// A single field-level validation failure.
///
/// Display messages are the exact strings shown next to the form fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Photo strip is required")]
    MissingImage,

    #[error("Caption is required")]
    EmptyCaption,

    #[error("Caption must be less than {max} characters")]
    CaptionTooLong { max: usize },

    #[error("Pick a delivery date before submitting")]
    UnresolvedSendTime,

    #[error("Unknown delivery method")]
    UnknownDeliveryMethod,

    #[error("{}", invalid_address_message(.0))]
    InvalidDeliveryAddress(DeliveryMethod),

    #[error("Unlock password is required")]
    EmptyPassword,
}

fn invalid_address_message(method: &DeliveryMethod) -> &'static str {
    match method {
        DeliveryMethod::Email => "Invalid email address",
        DeliveryMethod::Telegram => "Telegram handle must start with @",
    }
}

/// The complete, ordered set of violations found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("submission rejected: {}", join_messages(.errors))]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    pub(crate) fn single(error: FieldError) -> Self {
        Self::new(vec![error])
    }

    /// The violations, in form order.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Human-readable messages, one per violation, in form order.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }
}
