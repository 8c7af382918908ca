//! Image selection (avatar picker)

use bytes::Bytes;
use std::sync::Mutex;

/// Callback receiving the selected image as a binary blob
pub type BlobCallback = Box<dyn FnOnce(Bytes) + Send>;

/// Image selection collaborator
pub trait ImageSelection: Send + Sync {
    /// Whether an image is currently selected
    fn has_image(&self) -> bool;

    /// Deliver the selected image encoded as `mimetype` to `callback`
    ///
    /// Implementations may invoke the callback synchronously or later. Dropping
    /// it without calling it means no blob is available.
    fn get_blob(&self, mimetype: &str, callback: BlobCallback);

    /// Forget the current selection
    fn clear(&self);
}

/// An image picked by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedImage {
    /// Raw image bytes
    pub data: Bytes,
    /// Mimetype of `data`
    pub mimetype: String,
}

/// In-memory [`ImageSelection`]
#[derive(Debug, Default)]
pub struct SelectionService {
    image: Mutex<Option<SelectedImage>>,
}

impl SelectionService {
    /// Create a service with nothing selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an image
    pub fn select(&self, data: impl Into<Bytes>, mimetype: impl Into<String>) {
        *self.lock() = Some(SelectedImage {
            data: data.into(),
            mimetype: mimetype.into(),
        });
    }

    /// Currently selected image
    pub fn selected(&self) -> Option<SelectedImage> {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<SelectedImage>> {
        self.image.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ImageSelection for SelectionService {
    fn has_image(&self) -> bool {
        self.lock().is_some()
    }

    fn get_blob(&self, mimetype: &str, callback: BlobCallback) {
        let image = self.lock().clone();
        match image {
            Some(image) => {
                if image.mimetype != mimetype {
                    // No transcoding here: the bytes are delivered as picked.
                    tracing::debug!(
                        "Requested {} blob, selection holds {}",
                        mimetype,
                        image.mimetype
                    );
                }
                callback(image.data);
            }
            None => {
                tracing::warn!("Blob requested with no image selected");
            }
        }
    }

    fn clear(&self) {
        *self.lock() = None;
    }
}
