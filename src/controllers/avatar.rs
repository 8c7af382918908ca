//! Avatar modal controller

use crate::{
    config::Settings,
    contact::Contact,
    ui::{BlobReader, EventBus, ImageSelection, Overlay, ViewEvent},
    Error,
};
use bytes::Bytes;
use std::sync::Arc;
use tokio::sync::{broadcast, oneshot, RwLock};
use tracing::{debug, info, warn};

/// What a call to [`ContactAvatarController::save_contact_avatar`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvatarOutcome {
    /// No image selected; nothing changed
    NoImage,
    /// A save is already loading
    Ignored,
    /// Photo stored on the contact, selection cleared and modal closed
    Saved,
    /// The image could not be read; the modal stays open
    Failed,
}

#[derive(Debug, Default)]
struct AvatarState {
    contact: Contact,
    loading: bool,
}

struct Inner {
    mimetype: String,
    state: RwLock<AvatarState>,
    selection: Arc<dyn ImageSelection>,
    reader: Arc<dyn BlobReader>,
    modal: Arc<dyn Overlay>,
    events: EventBus,
}

/// Controller behind the avatar modal
#[derive(Clone)]
pub struct ContactAvatarController {
    inner: Arc<Inner>,
}

impl ContactAvatarController {
    /// Create a controller editing the avatar of `contact`
    pub fn new(
        contact: Contact,
        selection: Arc<dyn ImageSelection>,
        reader: Arc<dyn BlobReader>,
        modal: Arc<dyn Overlay>,
        settings: &Settings,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                mimetype: settings.avatar_mimetype.clone(),
                state: RwLock::new(AvatarState {
                    contact,
                    loading: false,
                }),
                selection,
                reader,
                modal,
                events: EventBus::new(),
            }),
        }
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> broadcast::Receiver<ViewEvent> {
        self.inner.events.subscribe()
    }

    /// Snapshot of the contact
    pub async fn contact(&self) -> Contact {
        self.inner.state.read().await.contact.clone()
    }

    /// Replace the contact
    pub async fn set_contact(&self, contact: Contact) {
        self.inner.state.write().await.contact = contact;
        self.inner.events.publish(ViewEvent::ContactChanged);
    }

    /// Whether an image is being read and encoded
    pub async fn is_loading(&self) -> bool {
        self.inner.state.read().await.loading
    }

    /// Store the selected image on the contact as a data URL and close the modal
    ///
    /// The selection is cleared once the photo is stored; on failure it is kept
    /// so the user can retry.
    pub async fn save_contact_avatar(&self) -> AvatarOutcome {
        if !self.inner.selection.has_image() {
            debug!("No image selected, nothing to save");
            return AvatarOutcome::NoImage;
        }

        {
            let mut state = self.inner.state.write().await;
            if state.loading {
                debug!("Avatar already loading, ignoring save");
                return AvatarOutcome::Ignored;
            }
            state.loading = true;
        }
        self.inner.events.publish(ViewEvent::LoadingChanged(true));

        let (tx, rx) = oneshot::channel();
        self.inner.selection.get_blob(
            &self.inner.mimetype,
            Box::new(move |blob: Bytes| {
                let _ = tx.send(blob);
            }),
        );

        let encoded = match rx.await {
            Ok(blob) => self.inner.reader.read_as_data_url(blob, &self.inner.mimetype).await,
            Err(_) => Err(Error::Selection("No blob delivered for the selected image".to_string())),
        };

        match encoded {
            Ok(data_url) => {
                {
                    let mut state = self.inner.state.write().await;
                    state.contact.photo = Some(data_url);
                    state.loading = false;
                }
                self.inner.events.publish(ViewEvent::ContactChanged);
                self.inner.events.publish(ViewEvent::LoadingChanged(false));
                self.inner.selection.clear();
                self.inner.modal.hide();
                info!("Avatar saved on contact");
                AvatarOutcome::Saved
            }
            Err(e) => {
                warn!("Failed to read avatar image: {}", e);
                self.inner.state.write().await.loading = false;
                self.inner.events.publish(ViewEvent::LoadingChanged(false));
                AvatarOutcome::Failed
            }
        }
    }
}
