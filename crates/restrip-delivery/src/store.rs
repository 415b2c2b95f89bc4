use async_trait::async_trait;
use restrip_core::{ImageRef, RestripError, Result};
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

/// An image as handed back by the store.
#[derive(Debug, Clone)]
pub struct StoredImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Binary storage for uploaded photo strips.
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist raw image bytes, returning an opaque reference the client
    /// quotes back when it submits the snap.
    async fn put(&self, bytes: Vec<u8>, content_type: &str) -> Result<ImageRef>;

    /// Fetch a stored image.
    async fn get(&self, image_ref: &ImageRef) -> Result<StoredImage>;

    /// True when `image_ref` points at a stored image.
    async fn contains(&self, image_ref: &ImageRef) -> bool {
        self.get(image_ref).await.is_ok()
    }
}

/// Process-local store, dropped on restart. Stands in for object storage.
#[derive(Default)]
pub struct MemoryImageStore {
    images: Mutex<HashMap<ImageRef, StoredImage>>,
}

impl MemoryImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of images currently held. A poisoned lock counts as empty,
    /// matching `put`/`get`, which surface poisoning as an error instead
    /// of panicking.
    pub fn len(&self) -> usize {
        self.images.lock().map(|images| images.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ImageStore for MemoryImageStore {
    async fn put(&self, bytes: Vec<u8>, content_type: &str) -> Result<ImageRef> {
        if bytes.is_empty() {
            return Err(RestripError::Upload("empty image body".to_string()));
        }
        let image_ref = ImageRef::new();
        debug!(image_ref = %image_ref, bytes = bytes.len(), content_type, "image stored");
        self.images
            .lock()
            .map_err(|_| RestripError::Internal("image store lock poisoned".to_string()))?
            .insert(
                image_ref.clone(),
                StoredImage {
                    bytes,
                    content_type: content_type.to_string(),
                },
            );
        Ok(image_ref)
    }

    async fn get(&self, image_ref: &ImageRef) -> Result<StoredImage> {
        self.images
            .lock()
            .map_err(|_| RestripError::Internal("image store lock poisoned".to_string()))?
            .get(image_ref)
            .cloned()
            .ok_or_else(|| RestripError::ImageNotFound {
                image_ref: image_ref.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_hands_out_a_resolvable_ref() {
        let store = MemoryImageStore::new();
        let image_ref = store.put(vec![0xFF, 0xD8], "image/jpeg").await.unwrap();
        assert!(store.contains(&image_ref).await);

        let stored = store.get(&image_ref).await.unwrap();
        assert_eq!(stored.bytes, vec![0xFF, 0xD8]);
        assert_eq!(stored.content_type, "image/jpeg");
    }

    #[tokio::test]
    async fn unknown_ref_does_not_resolve() {
        let store = MemoryImageStore::new();
        let err = store.get(&ImageRef::from("nope")).await.unwrap_err();
        assert_eq!(err.code(), "IMAGE_NOT_FOUND");
        assert!(!store.contains(&ImageRef::from("nope")).await);
    }

    #[tokio::test]
    async fn poisoned_lock_degrades_without_panicking() {
        let store = std::sync::Arc::new(MemoryImageStore::new());
        let poisoner = std::sync::Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.images.lock().unwrap();
            panic!("poison the store lock");
        })
        .join();

        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        let err = store.put(vec![1], "image/png").await.unwrap_err();
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert!(store.get(&ImageRef::from("any")).await.is_err());
    }

    #[tokio::test]
    async fn empty_body_is_refused() {
        let store = MemoryImageStore::new();
        let err = store.put(Vec::new(), "image/png").await.unwrap_err();
        assert_eq!(err.code(), "UPLOAD_REJECTED");
        assert!(store.is_empty());
    }
}
