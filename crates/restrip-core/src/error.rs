use thiserror::Error;

#[derive(Debug, Error)]
pub enum RestripError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upload rejected: {0}")]
    Upload(String),

    #[error("Image not found: {image_ref}")]
    ImageNotFound { image_ref: String },

    #[error("Delivery error ({channel}): {reason}")]
    Delivery { channel: String, reason: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestripError {
    /// Short error code string included in JSON error bodies.
    pub fn code(&self) -> &'static str {
        match self {
            RestripError::Config(_) => "CONFIG_ERROR",
            RestripError::Upload(_) => "UPLOAD_REJECTED",
            RestripError::ImageNotFound { .. } => "IMAGE_NOT_FOUND",
            RestripError::Delivery { .. } => "DELIVERY_ERROR",
            RestripError::Serialization(_) => "SERIALIZATION_ERROR",
            RestripError::Io(_) => "IO_ERROR",
            RestripError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, RestripError>;
