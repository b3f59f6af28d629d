//! Document trait and mapping derivation.

use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value, json};

/// Field types understood by the mapping derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// Analyzed full-text field with a `keyword` sub-field.
    Text,

    /// 32-bit signed integer.
    Integer,
}

impl FieldType {
    fn mapping(self) -> Value {
        match self {
            Self::Text => json!({
                "type": "text",
                "fields": {
                    "keyword": { "type": "keyword", "ignore_above": 256 }
                }
            }),
            Self::Integer => json!({ "type": "integer" }),
        }
    }
}

/// A record that can be stored in and read back from an index.
pub trait Document: Serialize + DeserializeOwned + Send + Sync {
    /// Name under which a default [`TypeMapping`] is registered.
    const TYPE_NAME: &'static str;

    /// Serialized field names and their types, in declaration order.
    fn fields() -> &'static [(&'static str, FieldType)];

    /// Identifier used as the document `_id`.
    fn id(&self) -> String;
}

/// Per-type mapping policy.
///
/// Ignored fields are left out of the index mapping. Since indices are
/// created with `dynamic: false`, they are still kept in `_source` and come
/// back with search hits, but they are never indexed or searchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMapping {
    ignored: Vec<&'static str>,
}

impl TypeMapping {
    /// Exclude `field` from the derived mapping.
    #[must_use]
    pub fn ignore(mut self, field: &'static str) -> Self {
        if !self.ignored.contains(&field) {
            self.ignored.push(field);
        }

        self
    }

    /// Whether `field` is excluded from the derived mapping.
    #[must_use]
    pub fn is_ignored(&self, field: &str) -> bool {
        self.ignored.contains(&field)
    }

    /// Derive the create-index body for `T`, skipping ignored fields.
    #[must_use]
    pub fn auto_map<T: Document>(&self) -> Value {
        let properties: Map<String, Value> = T::fields()
            .iter()
            .filter(|(name, _)| !self.is_ignored(name))
            .map(|(name, field_type)| ((*name).to_owned(), field_type.mapping()))
            .collect();

        json!({
            "mappings": {
                "dynamic": false,
                "properties": properties,
            }
        })
    }
}
