//! The one entity this service keeps: an edition of the Bible.
//!
//! The wire names (`nome`, `versao`, `idioma`) are fixed by existing clients
//! and are kept verbatim in both the JSON bodies and the table columns.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A stored edition, as returned by `GET /biblias`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edition {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "versao")]
    pub version: String,
    #[serde(rename = "idioma")]
    pub language: String,
}

/// The mutable part of an edition, decoded from POST and PUT bodies.
///
/// Every field may be missing or `null` and then reads as the empty string.
/// Unknown fields, `id` included, are ignored; ids belong to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EditionFields {
    #[serde(rename = "nome", default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(rename = "versao", default, deserialize_with = "null_as_empty")]
    pub version: String,
    #[serde(rename = "idioma", default, deserialize_with = "null_as_empty")]
    pub language: String,
}

impl EditionFields {
    pub fn new(name: impl Into<String>, version: impl Into<String>, language: impl Into<String>) -> Self {
        Self { name: name.into(), version: version.into(), language: language.into() }
    }

    /// Decodes a request body. Anything but a JSON object, positional
    /// arrays included, is a decode fault.
    pub fn from_json(body: &[u8]) -> crate::error::Result<Self> {
        let object: Map<String, Value> = serde_json::from_slice(body)?;
        Ok(Self::deserialize(Value::Object(object))?)
    }

    pub fn with_id(self, id: i64) -> Edition {
        Edition { id, name: self.name, version: self.version, language: self.language }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
