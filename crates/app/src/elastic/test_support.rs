//! Shared fixtures for client tests.

use serde::{Deserialize, Serialize};

use crate::elastic::{Document, FieldType, TypeMapping};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Book {
    pub(crate) isbn: i32,
    pub(crate) name: String,
}

impl Document for Book {
    const TYPE_NAME: &'static str = "book";

    fn fields() -> &'static [(&'static str, FieldType)] {
        &[("isbn", FieldType::Integer), ("name", FieldType::Text)]
    }

    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

pub(crate) fn book_mapping() -> TypeMapping {
    TypeMapping::default().ignore("isbn")
}
