//! View-layer collaborators
//!
//! This module contains the contracts the controllers drive side effects
//! through, with in-process implementations usable by any UI front end.

pub mod events;
pub mod location;
pub mod modal;
pub mod notification;
pub mod reader;
pub mod selection;

// Re-export main types for convenience
pub use events::{EventBus, ViewEvent};
pub use location::{match_route, sidebar_state, History, Location, RouteParams};
pub use modal::{Modal, Overlay};
pub use notification::{Notification, NotificationCenter, NotificationLevel, Notifier};
pub use reader::{BlobReader, DataUrlReader};
pub use selection::{BlobCallback, ImageSelection, SelectionService};
