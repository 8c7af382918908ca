//! Contact model and transport conversion
//!
//! The module is organized into submodules:
//! - `model` - Contact record as exchanged with the view layer and the REST API
//! - `vcard` - jCard (vCard 4.0 in JSON) card and the contact to card converter

pub mod model;
pub mod vcard;

pub use model::{Contact, TypedValue};
pub use vcard::{Card, CardProperty, ContactConverter, VcardConverter};
