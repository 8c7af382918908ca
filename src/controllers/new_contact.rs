//! Contact creation controller
//!
//! `Idle -> Submitting -> Idle`. While submitting, further `accept()` calls are
//! dropped. Success navigates away, failure raises a weak error notification,
//! and the busy flag is cleared in both cases.

use crate::{
    config::Settings,
    contact::{Contact, ContactConverter},
    services::{create_path, ContactsService},
    ui::{EventBus, Location, Notifier, RouteParams, ViewEvent},
    Result,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

/// Message shown when the server refuses the new contact
pub const CREATE_FAILED_MESSAGE: &str = "Can not create contact";

/// What a call to [`NewContactController::accept`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Dropped: already submitting, or the contact is not loaded
    Ignored,
    /// Contact created and location changed
    Created,
    /// Creation failed and the user was notified
    Failed,
}

#[derive(Debug, Default)]
struct FormState {
    contact: Contact,
}

struct Inner {
    book_id: String,
    post_create_path: String,
    state: RwLock<FormState>,
    calling: AtomicBool,
    contacts_service: Arc<dyn ContactsService>,
    converter: Arc<dyn ContactConverter>,
    location: Arc<dyn Location>,
    notifier: Arc<dyn Notifier>,
    events: EventBus,
}

/// Controller behind the contact creation form
///
/// Cloning yields another handle on the same form.
#[derive(Clone)]
pub struct NewContactController {
    inner: Arc<Inner>,
}

impl NewContactController {
    /// Create a controller for the address book `book_id`
    pub fn new(
        book_id: impl Into<String>,
        contacts_service: Arc<dyn ContactsService>,
        converter: Arc<dyn ContactConverter>,
        location: Arc<dyn Location>,
        notifier: Arc<dyn Notifier>,
        settings: &Settings,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                book_id: book_id.into(),
                post_create_path: settings.post_create_path.clone(),
                state: RwLock::new(FormState::default()),
                calling: AtomicBool::new(false),
                contacts_service,
                converter,
                location,
                notifier,
                events: EventBus::new(),
            }),
        }
    }

    /// Create a controller from the `bookId` parameter of the current route
    pub fn from_route(
        params: &RouteParams,
        contacts_service: Arc<dyn ContactsService>,
        converter: Arc<dyn ContactConverter>,
        location: Arc<dyn Location>,
        notifier: Arc<dyn Notifier>,
        settings: &Settings,
    ) -> Result<Self> {
        let book_id = params.require("bookId")?;
        Ok(Self::new(book_id, contacts_service, converter, location, notifier, settings))
    }

    /// Address book contacts are created in
    pub fn book_id(&self) -> &str {
        &self.inner.book_id
    }

    /// Subscribe to state changes
    pub fn subscribe(&self) -> broadcast::Receiver<ViewEvent> {
        self.inner.events.subscribe()
    }

    /// Snapshot of the contact being edited
    pub async fn contact(&self) -> Contact {
        self.inner.state.read().await.contact.clone()
    }

    /// Replace the contact being edited
    pub async fn set_contact(&self, contact: Contact) {
        self.inner.state.write().await.contact = contact;
        self.inner.events.publish(ViewEvent::ContactChanged);
    }

    /// Edit the contact in place
    pub async fn update_contact<F>(&self, edit: F)
    where
        F: FnOnce(&mut Contact),
    {
        edit(&mut self.inner.state.write().await.contact);
        self.inner.events.publish(ViewEvent::ContactChanged);
    }

    /// Give a fresh identifier to a contact that has none yet
    ///
    /// Returns the contact identifier, existing or new.
    pub async fn prepare(&self) -> String {
        let mut state = self.inner.state.write().await;
        if let Some(id) = state.contact.id.clone().filter(|id| !id.trim().is_empty()) {
            return id;
        }

        let id = uuid::Uuid::new_v4().to_string();
        state.contact.id = Some(id.clone());
        drop(state);

        self.inner.events.publish(ViewEvent::ContactChanged);
        id
    }

    /// Whether a submission is in flight
    pub async fn is_calling(&self) -> bool {
        self.inner.calling.load(Ordering::SeqCst)
    }

    /// Set the busy flag from the view
    pub async fn set_calling(&self, calling: bool) {
        self.inner.calling.store(calling, Ordering::SeqCst);
        self.inner.events.publish(ViewEvent::CallingChanged(calling));
    }

    /// Submit the form
    ///
    /// Does nothing while a submission is in flight or when the contact has no
    /// identifier. Otherwise converts the contact to a card and creates it in
    /// the address book. Collaborator errors end here: they are reported to
    /// the user and never returned. The busy flag is cleared when the
    /// submission ends, including when the returned future is dropped.
    pub async fn accept(&self) -> SubmitOutcome {
        let (card, _calling) = {
            let state = self.inner.state.write().await;
            if self.inner.calling.load(Ordering::SeqCst) {
                debug!("Contact creation already in progress, ignoring accept");
                return SubmitOutcome::Ignored;
            }
            if !state.contact.is_loaded() {
                debug!("Contact is not loaded, ignoring accept");
                return SubmitOutcome::Ignored;
            }
            let calling = CallingGuard::engage(&self.inner);
            (self.inner.converter.shell_to_vcard(&state.contact), calling)
        };

        let path = create_path(&self.inner.book_id);
        match self.inner.contacts_service.create(&path, card).await {
            Ok(created) => {
                if let Some(contact) = created {
                    self.inner.state.write().await.contact = contact;
                    self.inner.events.publish(ViewEvent::ContactChanged);
                }
                info!("Contact created in address book {}", self.inner.book_id);
                self.inner.location.set_path(&self.inner.post_create_path);
                SubmitOutcome::Created
            }
            Err(e) => {
                warn!("Failed to create contact in {}: {}", path, e);
                self.inner.notifier.weak_error(CREATE_FAILED_MESSAGE);
                SubmitOutcome::Failed
            }
        }
    }
}

/// Holds the busy flag for one submission
struct CallingGuard<'a> {
    inner: &'a Inner,
}

impl<'a> CallingGuard<'a> {
    fn engage(inner: &'a Inner) -> Self {
        inner.calling.store(true, Ordering::SeqCst);
        inner.events.publish(ViewEvent::CallingChanged(true));
        Self { inner }
    }
}

impl Drop for CallingGuard<'_> {
    fn drop(&mut self) {
        self.inner.calling.store(false, Ordering::SeqCst);
        self.inner.events.publish(ViewEvent::CallingChanged(false));
    }
}
