//! View controllers
//!
//! Each controller owns the state of one view and drives side effects only
//! through the collaborators it was constructed with:
//! - `new_contact` - contact creation form submission
//! - `avatar` - avatar modal: encode the picked image onto the contact
//! - `contacts_list` - address book listing
//! - `project` - project route resolution

pub mod avatar;
pub mod contacts_list;
pub mod new_contact;
pub mod project;

pub use avatar::{AvatarOutcome, ContactAvatarController};
pub use contacts_list::{ContactsListController, LoadOutcome};
pub use new_contact::{NewContactController, SubmitOutcome};
pub use project::ProjectResolver;
