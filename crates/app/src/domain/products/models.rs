//! Product Models

use serde::{Deserialize, Serialize};

use crate::elastic::{Document, FieldType};

/// Product Model
///
/// Every field is taken as submitted: duplicate or zero ids, empty text and
/// negative amounts are all accepted. Fields missing from a stored document
/// read back as their defaults, since older writers left the numeric ones out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub price: i32,
    pub quantity: i32,
}

impl Document for Product {
    const TYPE_NAME: &'static str = "product";

    fn fields() -> &'static [(&'static str, FieldType)] {
        &[
            ("id", FieldType::Integer),
            ("title", FieldType::Text),
            ("description", FieldType::Text),
            ("price", FieldType::Integer),
            ("quantity", FieldType::Integer),
        ]
    }

    fn id(&self) -> String {
        self.id.to_string()
    }
}
