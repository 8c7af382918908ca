//! Shared test fakes for controller tests

use crate::config::Settings;
use crate::contact::{Card, Contact, ContactConverter};
use crate::controllers::NewContactController;
use crate::services::{ContactsService, Project, ProjectApi};
use crate::ui::{BlobCallback, BlobReader, History, ImageSelection, NotificationCenter};
use crate::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// In-memory contacts service recording every call
#[derive(Default)]
pub struct FakeContactsService {
    created: Mutex<Vec<(String, Card)>>,
    listed: Mutex<Vec<String>>,
    fail_create: bool,
    create_returns: Option<Contact>,
    list_returns: Mutex<Option<Vec<Contact>>>,
    gated: bool,
    /// Notified each time `create` is entered
    pub entered: Notify,
    /// Lets a gated `create` complete
    pub release: Notify,
}

impl FakeContactsService {
    /// Create succeeds with an empty body, list fails
    pub fn new() -> Self {
        Self::default()
    }

    /// Create fails
    pub fn failing() -> Self {
        Self {
            fail_create: true,
            ..Self::default()
        }
    }

    /// Create waits for `release` before succeeding
    pub fn gated() -> Self {
        Self {
            gated: true,
            ..Self::default()
        }
    }

    /// Create succeeds and echoes `contact`
    pub fn returning(contact: Contact) -> Self {
        Self {
            create_returns: Some(contact),
            ..Self::default()
        }
    }

    /// List succeeds with `contacts`
    pub fn listing(contacts: Vec<Contact>) -> Self {
        Self {
            list_returns: Mutex::new(Some(contacts)),
            ..Self::default()
        }
    }

    /// Make subsequent list calls fail
    pub fn fail_lists(&self) {
        *self.list_returns.lock().unwrap() = None;
    }

    pub fn create_calls(&self) -> Vec<(String, Card)> {
        self.created.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> Vec<String> {
        self.listed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactsService for FakeContactsService {
    async fn create(&self, path: &str, card: Card) -> Result<Option<Contact>> {
        self.created.lock().unwrap().push((path.to_string(), card));
        self.entered.notify_one();

        if self.gated {
            self.release.notified().await;
        }

        if self.fail_create {
            return Err(Error::Service {
                status: 500,
                message: "create failed".to_string(),
            });
        }
        Ok(self.create_returns.clone())
    }

    async fn list(&self, path: &str) -> Result<Vec<Contact>> {
        self.listed.lock().unwrap().push(path.to_string());
        self.list_returns
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::Service {
                status: 503,
                message: "list failed".to_string(),
            })
    }
}

/// Converter returning a fixed card and counting calls
#[derive(Default)]
pub struct RecordingConverter {
    pub calls: Mutex<Vec<Contact>>,
}

impl RecordingConverter {
    pub fn card() -> Card {
        let mut card = Card::new();
        card.add("uid", "text", "converted");
        card
    }
}

impl ContactConverter for RecordingConverter {
    fn shell_to_vcard(&self, contact: &Contact) -> Card {
        self.calls.lock().unwrap().push(contact.clone());
        Self::card()
    }
}

/// Image selection with a fixed answer
pub struct FakeSelection {
    has_image: bool,
    blob: Option<Bytes>,
    pub requested: Mutex<Vec<String>>,
    cleared: AtomicUsize,
}

impl FakeSelection {
    /// Nothing selected
    pub fn empty() -> Self {
        Self {
            has_image: false,
            blob: None,
            requested: Mutex::new(Vec::new()),
            cleared: AtomicUsize::new(0),
        }
    }

    /// An image is selected and its blob is delivered synchronously
    pub fn with_blob(blob: &'static [u8]) -> Self {
        Self {
            has_image: true,
            blob: Some(Bytes::from_static(blob)),
            requested: Mutex::new(Vec::new()),
            cleared: AtomicUsize::new(0),
        }
    }

    /// An image is reported but the callback is dropped
    pub fn never_delivering() -> Self {
        Self {
            has_image: true,
            blob: None,
            requested: Mutex::new(Vec::new()),
            cleared: AtomicUsize::new(0),
        }
    }
}

impl FakeSelection {
    /// Number of `clear` calls
    pub fn clear_count(&self) -> usize {
        self.cleared.load(Ordering::SeqCst)
    }
}

impl ImageSelection for FakeSelection {
    fn has_image(&self) -> bool {
        self.has_image
    }

    fn get_blob(&self, mimetype: &str, callback: BlobCallback) {
        self.requested.lock().unwrap().push(mimetype.to_string());
        if let Some(blob) = &self.blob {
            callback(blob.clone());
        }
    }

    fn clear(&self) {
        self.cleared.fetch_add(1, Ordering::SeqCst);
    }
}

/// Reader answering a fixed string and recording the blobs it saw
pub struct FixedReader {
    result: Option<String>,
    pub blobs: Mutex<Vec<Bytes>>,
}

impl FixedReader {
    pub fn new(result: &str) -> Self {
        Self {
            result: Some(result.to_string()),
            blobs: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: None,
            blobs: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl BlobReader for FixedReader {
    async fn read_as_data_url(&self, blob: Bytes, _mimetype: &str) -> Result<String> {
        self.blobs.lock().unwrap().push(blob);
        tokio::task::yield_now().await;
        self.result
            .clone()
            .ok_or_else(|| Error::Encoding("unreadable".to_string()))
    }
}

/// Project API answering from a fixed project, failing for other ids
pub struct FakeProjectApi {
    project: Project,
    pub requested: Mutex<Vec<String>>,
}

impl FakeProjectApi {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            requested: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ProjectApi for FakeProjectApi {
    async fn get(&self, project_id: &str) -> Result<Project> {
        self.requested.lock().unwrap().push(project_id.to_string());
        if project_id == self.project.id {
            Ok(self.project.clone())
        } else {
            Err(Error::Service {
                status: 404,
                message: "Not Found".to_string(),
            })
        }
    }
}

pub const BOOK_ID: &str = "123456789";
pub const NEW_CONTACT_PATH: &str = "/contact/new/123456789";

/// Everything wired around a [`NewContactController`]
pub struct NewContactFixture {
    pub controller: NewContactController,
    pub service: Arc<FakeContactsService>,
    pub converter: Arc<RecordingConverter>,
    pub location: Arc<History>,
    pub notifier: Arc<NotificationCenter>,
}

/// Build a controller for [`BOOK_ID`] positioned on the creation view
pub fn new_contact_fixture(service: FakeContactsService) -> NewContactFixture {
    let service = Arc::new(service);
    let converter = Arc::new(RecordingConverter::default());
    let location = Arc::new(History::new(NEW_CONTACT_PATH));
    let notifier = Arc::new(NotificationCenter::new());

    let controller = NewContactController::new(
        BOOK_ID,
        service.clone(),
        converter.clone(),
        location.clone(),
        notifier.clone(),
        &Settings::default(),
    );

    NewContactFixture {
        controller,
        service,
        converter,
        location,
        notifier,
    }
}

/// The contact used across submission scenarios
pub fn foo_bar() -> Contact {
    Contact::new("1", "Foo", "Bar")
}
