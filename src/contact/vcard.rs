//! jCard transport representation
//!
//! Contacts are persisted as vCard 4.0 components serialized as jCard (RFC 7095):
//!
//! ```text
//! ["vcard", [["version", {}, "text", "4.0"], ["fn", {}, "text", "Foo Bar"], ...]]
//! ```

use crate::{contact::Contact, Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{json, Map, Value};

/// A single jCard property: `[name, {params}, type, value...]`
#[derive(Debug, Clone, PartialEq)]
pub struct CardProperty {
    /// Lowercase property name
    pub name: String,
    /// Property parameters (e.g. `{"type": "work"}`)
    pub params: Map<String, Value>,
    /// Value type (`text`, `uri`, `date`, ...)
    pub value_type: String,
    /// One or more values
    pub values: Vec<Value>,
}

impl CardProperty {
    /// First value as a string, if it is one
    pub fn text(&self) -> Option<&str> {
        self.values.first().and_then(Value::as_str)
    }

    /// Set a parameter, returning the property for chaining
    pub fn with_param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    fn to_jcard(&self) -> Value {
        let mut out = vec![
            Value::String(self.name.clone()),
            Value::Object(self.params.clone()),
            Value::String(self.value_type.clone()),
        ];
        out.extend(self.values.iter().cloned());
        Value::Array(out)
    }

    fn from_jcard(value: &Value) -> Result<Self> {
        let parts = value
            .as_array()
            .ok_or_else(|| Error::InvalidCard("property is not an array".to_string()))?;

        if parts.len() < 4 {
            return Err(Error::InvalidCard(format!(
                "property needs at least 4 members, got {}",
                parts.len()
            )));
        }

        let name = parts[0]
            .as_str()
            .ok_or_else(|| Error::InvalidCard("property name is not a string".to_string()))?;
        let params = parts[1]
            .as_object()
            .ok_or_else(|| Error::InvalidCard(format!("parameters of '{}' are not an object", name)))?;
        let value_type = parts[2]
            .as_str()
            .ok_or_else(|| Error::InvalidCard(format!("value type of '{}' is not a string", name)))?;

        Ok(Self {
            name: name.to_ascii_lowercase(),
            params: params.clone(),
            value_type: value_type.to_string(),
            values: parts[3..].to_vec(),
        })
    }
}

/// A vCard component
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    /// Properties in insertion order
    pub properties: Vec<CardProperty>,
}

impl Card {
    /// Create an empty card
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single-valued property
    pub fn add(&mut self, name: &str, value_type: &str, value: impl Into<Value>) {
        self.push(CardProperty {
            name: name.to_string(),
            params: Map::new(),
            value_type: value_type.to_string(),
            values: vec![value.into()],
        });
    }

    /// Append a fully built property
    pub fn push(&mut self, property: CardProperty) {
        self.properties.push(property);
    }

    /// First property with the given name
    pub fn property(&self, name: &str) -> Option<&CardProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// All properties with the given name
    pub fn properties_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a CardProperty> + 'a {
        self.properties.iter().filter(move |p| p.name == name)
    }

    /// `uid` property value
    pub fn uid(&self) -> Option<&str> {
        self.property("uid").and_then(CardProperty::text)
    }

    /// `fn` (formatted name) property value
    pub fn formatted_name(&self) -> Option<&str> {
        self.property("fn").and_then(CardProperty::text)
    }

    /// Encode as a jCard value
    pub fn to_jcard(&self) -> Value {
        let properties: Vec<Value> = self.properties.iter().map(CardProperty::to_jcard).collect();
        json!(["vcard", properties])
    }

    /// Decode a jCard value
    pub fn from_jcard(value: &Value) -> Result<Self> {
        let parts = value
            .as_array()
            .ok_or_else(|| Error::InvalidCard("jCard is not an array".to_string()))?;

        match parts.first().and_then(Value::as_str) {
            Some(kind) if kind.eq_ignore_ascii_case("vcard") => {}
            other => {
                return Err(Error::InvalidCard(format!(
                    "expected a vcard component, got {:?}",
                    other
                )));
            }
        }

        let properties = parts
            .get(1)
            .and_then(Value::as_array)
            .ok_or_else(|| Error::InvalidCard("missing property list".to_string()))?
            .iter()
            .map(CardProperty::from_jcard)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { properties })
    }
}

impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_jcard().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Card::from_jcard(&value).map_err(serde::de::Error::custom)
    }
}

/// Converts the contact edited in the view into its transport card
pub trait ContactConverter: Send + Sync {
    /// Build the card for a contact. Pure and synchronous.
    fn shell_to_vcard(&self, contact: &Contact) -> Card;
}

/// Default converter producing vCard 4.0 jCards
#[derive(Debug, Clone, Copy, Default)]
pub struct VcardConverter;

fn typed(name: &str, value_type: &str, kind: &str, value: String) -> CardProperty {
    let property = CardProperty {
        name: name.to_string(),
        params: Map::new(),
        value_type: value_type.to_string(),
        values: vec![Value::String(value)],
    };

    if kind.is_empty() {
        property
    } else {
        property.with_param("type", kind)
    }
}

impl ContactConverter for VcardConverter {
    fn shell_to_vcard(&self, contact: &Contact) -> Card {
        let mut card = Card::new();
        card.add("version", "text", "4.0");

        if let Some(id) = &contact.id {
            card.add("uid", "text", id.as_str());
        }

        let formatted = contact.display_name();
        if !formatted.is_empty() {
            card.add("fn", "text", formatted);
        }

        if !contact.first_name.is_empty() || !contact.last_name.is_empty() {
            card.add(
                "n",
                "text",
                json!([contact.last_name, contact.first_name, "", "", ""]),
            );
        }

        for (name, value) in [
            ("nickname", &contact.nickname),
            ("org", &contact.org),
            ("role", &contact.org_role),
        ] {
            if !value.is_empty() {
                card.add(name, "text", value.as_str());
            }
        }

        for email in contact.emails.iter().filter(|e| !e.value.is_empty()) {
            card.push(typed("email", "text", &email.kind, format!("mailto:{}", email.value)));
        }

        for tel in contact.tel.iter().filter(|t| !t.value.is_empty()) {
            card.push(typed("tel", "uri", &tel.kind, format!("tel:{}", tel.value)));
        }

        for adr in contact.addresses.iter().filter(|a| !a.is_empty()) {
            let mut property = typed("adr", "text", &adr.kind, String::new());
            property.values = vec![json!(["", "", adr.street, adr.city, "", adr.zip, adr.country])];
            card.push(property);
        }

        if let Some(birthday) = contact.birthday {
            card.add("bday", "date", birthday.format("%Y-%m-%d").to_string());
        }

        for url in contact.urls.iter().filter(|u| !u.is_empty()) {
            card.add("url", "uri", url.as_str());
        }

        if !contact.tags.is_empty() {
            card.push(CardProperty {
                name: "categories".to_string(),
                params: Map::new(),
                value_type: "text".to_string(),
                values: contact.tags.iter().cloned().map(Value::String).collect(),
            });
        }

        if !contact.notes.is_empty() {
            card.add("note", "text", contact.notes.as_str());
        }

        if let Some(photo) = contact.photo.as_deref().filter(|p| !p.is_empty()) {
            card.add("photo", "uri", photo);
        }

        card
    }
}
