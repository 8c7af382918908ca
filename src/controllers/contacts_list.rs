//! Address book listing controller

use crate::{
    contact::Contact,
    services::{list_path, ContactsService},
    ui::{location::NEW_CONTACT_ROUTE, EventBus, Location, Notifier, ViewEvent},
};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{info, warn};

/// Message shown when the contact list cannot be fetched
pub const LOAD_FAILED_MESSAGE: &str = "Can not load contacts";

/// What a call to [`ContactsListController::load_contacts`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Collection replaced with this many contacts
    Loaded(usize),
    /// Listing failed; the previous collection is kept
    Failed,
}

struct Inner {
    owner_id: String,
    contacts: RwLock<Vec<Contact>>,
    contacts_service: Arc<dyn ContactsService>,
    location: Arc<dyn Location>,
    notifier: Arc<dyn Notifier>,
    events: EventBus,
}

/// Controller behind the contact list of a user's address book
#[derive(Clone)]
pub struct ContactsListController {
    inner: Arc<Inner>,
}

impl ContactsListController {
    /// Create a controller listing the address book of `owner_id`
    pub fn new(
        owner_id: impl Into<String>,
        contacts_service: Arc<dyn ContactsService>,
        location: Arc<dyn Location>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                owner_id: owner_id.into(),
                contacts: RwLock::new(Vec::new()),
                contacts_service,
                location,
                notifier,
                events: EventBus::new(),
            }),
        }
    }

    /// Owner of the listed address book
    pub fn owner_id(&self) -> &str {
        &self.inner.owner_id
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> broadcast::Receiver<ViewEvent> {
        self.inner.events.subscribe()
    }

    /// Snapshot of the loaded contacts
    pub async fn contacts(&self) -> Vec<Contact> {
        self.inner.contacts.read().await.clone()
    }

    /// Fetch the address book and replace the collection
    ///
    /// On failure the user is notified and the current collection is kept.
    pub async fn load_contacts(&self) -> LoadOutcome {
        let path = list_path(&self.inner.owner_id);

        match self.inner.contacts_service.list(&path).await {
            Ok(contacts) => {
                let count = contacts.len();
                *self.inner.contacts.write().await = contacts;
                info!("Loaded {} contacts for {}", count, self.inner.owner_id);
                self.inner.events.publish(ViewEvent::ContactsLoaded(count));
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                warn!("Failed to load contacts from {}: {}", path, e);
                self.inner.notifier.weak_error(LOAD_FAILED_MESSAGE);
                LoadOutcome::Failed
            }
        }
    }

    /// Navigate to the contact creation view of this address book
    pub fn open_contact_creation(&self) {
        self.inner
            .location
            .set_path(&NEW_CONTACT_ROUTE.replace(":bookId", &self.inner.owner_id));
    }
}
