//! Navigation: current location, route parameters and sidebar helpers

use crate::{
    ui::events::{EventBus, ViewEvent},
    Error, Result,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// Contacts home view, shown after a contact is created
pub const CONTACTS_ROUTE: &str = "/contact";
/// Contact creation view for an address book
pub const NEW_CONTACT_ROUTE: &str = "/contact/new/:bookId";
/// Project view
pub const PROJECT_ROUTE: &str = "/projects/:project_id";
/// Project list, used as fallback when a project cannot be resolved
pub const PROJECTS_ROUTE: &str = "/projects";

/// Navigation collaborator
pub trait Location: Send + Sync {
    /// Current path
    fn path(&self) -> String;

    /// Navigate to `target`
    fn set_path(&self, target: &str);
}

/// In-memory location with back-history
#[derive(Debug)]
pub struct History {
    entries: Mutex<Vec<String>>,
    events: EventBus,
}

impl History {
    /// Create a history positioned at `initial`
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            entries: Mutex::new(vec![initial.into()]),
            events: EventBus::new(),
        }
    }

    /// Subscribe to [`ViewEvent::Navigated`] events
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<ViewEvent> {
        self.events.subscribe()
    }

    /// Go back one entry, returning the new current path
    ///
    /// The initial entry is never popped.
    pub fn back(&self) -> Option<String> {
        let mut entries = self.lock();
        if entries.len() <= 1 {
            return None;
        }
        entries.pop();
        let current = entries.last().cloned();
        drop(entries);

        if let Some(path) = &current {
            self.events.publish(ViewEvent::Navigated(path.clone()));
        }
        current
    }

    /// All visited paths, oldest first
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Number of navigations performed since creation
    pub fn navigation_count(&self) -> usize {
        self.lock().len() - 1
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Location for History {
    fn path(&self) -> String {
        self.lock().last().cloned().unwrap_or_default()
    }

    fn set_path(&self, target: &str) {
        tracing::debug!("Navigating to {}", target);
        self.lock().push(target.to_string());
        self.events.publish(ViewEvent::Navigated(target.to_string()));
    }
}

/// Parameters captured from a matched route
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    /// Create empty parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter, returning the set for chaining
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Look up a parameter
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Look up a parameter that must be present and non-empty
    pub fn require(&self, name: &str) -> Result<&str> {
        self.get(name)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| Error::MissingRouteParam(name.to_string()))
    }
}

/// Match `path` against a pattern such as `/contact/new/:bookId`
///
/// Segments starting with `:` capture the corresponding path segment. Query
/// strings and trailing slashes are ignored.
pub fn match_route(pattern: &str, path: &str) -> Option<RouteParams> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let pattern_segments: Vec<&str> = pattern.trim_matches('/').split('/').collect();
    let path_segments: Vec<&str> = path.trim_matches('/').split('/').collect();

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = RouteParams::new();
    for (expected, actual) in pattern_segments.iter().zip(&path_segments) {
        match expected.strip_prefix(':') {
            Some(name) if !actual.is_empty() => {
                params = params.with(name, *actual);
            }
            Some(_) => return None,
            None if expected == actual => {}
            None => return None,
        }
    }

    Some(params)
}

/// UI state reached by a labelled sidebar item
///
/// Unknown labels are a programming error in the calling glue and fail immediately.
pub fn sidebar_state(label: &str) -> Result<&'static str> {
    match label {
        "Contacts" => Ok("contact"),
        "Configuration" => Ok("unifiedinbox.configuration"),
        "New folder" => Ok("unifiedinbox.configuration.folders.add"),
        other => Err(Error::UnknownLabel(format!("No such item on sidebar: {}", other))),
    }
}
