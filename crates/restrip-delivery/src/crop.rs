use async_trait::async_trait;
use restrip_core::Result;
use tracing::warn;

/// Remote auto-crop inference: detects the photo strip in a raw scan and
/// returns a cropped rendition.
#[async_trait]
pub trait AutoCrop: Send + Sync {
    async fn crop(&self, bytes: &[u8], content_type: &str) -> Result<Vec<u8>>;
}

/// Stand-in until the inference endpoint is wired up: returns the input
/// unchanged and warns once per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughCrop;

#[async_trait]
impl AutoCrop for PassthroughCrop {
    async fn crop(&self, bytes: &[u8], content_type: &str) -> Result<Vec<u8>> {
        warn!(
            bytes = bytes.len(),
            content_type, "auto-crop backend not configured; returning image unchanged"
        );
        Ok(bytes.to_vec())
    }
}
