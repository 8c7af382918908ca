//! Contact record
//!
//! A contact starts empty when the creation view opens, gets an identifier once
//! hydrated, and is replaced wholesale by whatever the server returns.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A typed value such as an email (`work`, `home`) or a phone number (`cell`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedValue {
    /// Value type (e.g. "work", "home", "cell")
    #[serde(rename = "type")]
    pub kind: String,
    /// The value itself
    pub value: String,
}

impl TypedValue {
    /// Create a new typed value
    pub fn new(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            value: value.into(),
        }
    }
}

/// Postal address
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Address type (e.g. "work", "home")
    #[serde(rename = "type")]
    pub kind: String,
    /// Street line
    pub street: String,
    /// City
    pub city: String,
    /// Postal code
    pub zip: String,
    /// Country
    pub country: String,
}

impl Address {
    /// Whether no address line is filled in (the type alone does not count)
    pub fn is_empty(&self) -> bool {
        [&self.street, &self.city, &self.zip, &self.country]
            .iter()
            .all(|line| line.trim().is_empty())
    }
}

/// Contact shown and edited by the contacts views
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    /// Identifier, present once the contact has been hydrated or persisted
    #[serde(rename = "_id", alias = "id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Nickname
    pub nickname: String,
    /// Organization
    pub org: String,
    /// Role within the organization
    pub org_role: String,
    /// Email addresses
    pub emails: Vec<TypedValue>,
    /// Phone numbers
    pub tel: Vec<TypedValue>,
    /// Postal addresses
    pub addresses: Vec<Address>,
    /// Birthday
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthday: Option<NaiveDate>,
    /// Web sites
    pub urls: Vec<String>,
    /// Free-form tags
    pub tags: Vec<String>,
    /// Notes
    pub notes: String,
    /// Avatar as a data URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Contact {
    /// Create a contact with an identifier and a name
    pub fn new(id: impl Into<String>, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// Whether the contact carries an identifier, i.e. it has been hydrated
    ///
    /// Contacts that are not loaded are never submitted.
    pub fn is_loaded(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.trim().is_empty())
    }

    /// Formatted name: first and last name, or the first email when both are empty
    pub fn display_name(&self) -> String {
        let name = [self.first_name.trim(), self.last_name.trim()]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        if !name.is_empty() {
            return name;
        }

        self.emails
            .first()
            .map(|email| email.value.clone())
            .unwrap_or_default()
    }
}
