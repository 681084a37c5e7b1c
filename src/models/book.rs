// src/models/book.rs
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>, // Publication year
}

impl Book {
    /// Label used by the book selects on the reviews page.
    pub fn label(&self) -> String {
        format!("{} - {}", self.title, self.author)
    }
}

/// Payload for `POST /books`.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_decode_as_none() {
        let book: Book =
            serde_json::from_str(r#"{"id":"b1","title":"Dune","author":"Herbert"}"#).unwrap();
        assert_eq!(book.description, None);
        assert_eq!(book.year, None);
        assert_eq!(book.label(), "Dune - Herbert");
    }

    #[test]
    fn new_book_omits_absent_fields() {
        let payload = NewBook {
            title: "Dune".into(),
            author: "Herbert".into(),
            description: None,
            year: Some(1965),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"title": "Dune", "author": "Herbert", "year": 1965})
        );
    }
}
