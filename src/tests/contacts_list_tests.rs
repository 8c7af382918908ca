//! Contact list controller tests

use super::helpers::*;
use crate::contact::Contact;
use crate::controllers::{ContactsListController, LoadOutcome};
use crate::ui::{History, Location, NotificationCenter, NotificationLevel, ViewEvent};
use std::sync::Arc;

const OWNER_ID: &str = "123";

fn controller(
    service: Arc<FakeContactsService>,
) -> (ContactsListController, Arc<History>, Arc<NotificationCenter>) {
    let location = Arc::new(History::new("/contact"));
    let notifier = Arc::new(NotificationCenter::new());
    let controller = ContactsListController::new(OWNER_ID, service, location.clone(), notifier.clone());
    (controller, location, notifier)
}

#[tokio::test]
async fn test_load_contacts_calls_list_with_path() {
    let service = Arc::new(FakeContactsService::listing(Vec::new()));
    let (controller, _, _) = controller(service.clone());

    controller.load_contacts().await;

    assert_eq!(service.list_calls(), vec!["/addressbooks/123/contacts.json".to_string()]);
}

#[tokio::test]
async fn test_load_contacts_once_per_call() {
    let service = Arc::new(FakeContactsService::listing(vec![foo_bar()]));
    let (controller, _, _) = controller(service.clone());

    controller.load_contacts().await;
    controller.load_contacts().await;

    assert_eq!(service.list_calls().len(), 2);
}

#[tokio::test]
async fn test_load_contacts_replaces_collection() {
    let contacts = vec![foo_bar(), Contact::new("2", "Alice", "Martin")];
    let service = Arc::new(FakeContactsService::listing(contacts.clone()));
    let (controller, _, notifier) = controller(service);
    let mut events = controller.subscribe();

    let outcome = controller.load_contacts().await;

    assert_eq!(outcome, LoadOutcome::Loaded(2));
    assert_eq!(controller.contacts().await, contacts);
    assert_eq!(events.recv().await.unwrap(), ViewEvent::ContactsLoaded(2));
    assert!(notifier.is_empty());
}

#[tokio::test]
async fn test_load_failure_keeps_collection_and_notifies() {
    let service = Arc::new(FakeContactsService::listing(vec![foo_bar()]));
    let (controller, location, notifier) = controller(service.clone());
    controller.load_contacts().await;

    service.fail_lists();
    let outcome = controller.load_contacts().await;

    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(controller.contacts().await, vec![foo_bar()], "previous collection is kept");

    let latest = notifier.latest().expect("a notification should be raised");
    assert_eq!(latest.level, NotificationLevel::Error);
    assert_eq!(latest.message, "Can not load contacts");
    assert_eq!(location.navigation_count(), 0);
}

#[test]
fn test_open_contact_creation_navigates() {
    let service = Arc::new(FakeContactsService::new());
    let (controller, location, _) = controller(service.clone());

    controller.open_contact_creation();

    assert_eq!(location.path(), "/contact/new/123");
    assert!(service.list_calls().is_empty());
}
