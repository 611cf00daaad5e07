//! Catalog wire format and response parsing.
//!
//! The catalog endpoint returns a single JSON document wrapping the book
//! array: `{ "books": [ { "title": ..., "author": ..., "publicationYear":
//! ... } ] }`. This module defines that envelope and the parser that turns a
//! raw response body into domain records.

use crate::domain::{Book, Result};
use serde::Deserialize;

/// Fixed catalog endpoint. Not configurable.
pub const BOOKS_ENDPOINT: &str = "http://localhost:3000/books.json";

/// Delay between plugin readiness and the catalog request, in seconds.
pub const FETCH_DELAY_SECS: f64 = 2.0;

/// Wire envelope of the catalog endpoint.
#[derive(Debug, Deserialize)]
pub struct CatalogDocument {
    /// The book records, in the order the endpoint returned them.
    pub books: Vec<Book>,
}

/// Parses a raw catalog response body into book records.
///
/// Arrival order is preserved; it is the order shown until a sort control is
/// first activated.
///
/// # Errors
///
/// Returns [`ZibraryError::Parse`](crate::domain::ZibraryError::Parse) when
/// the body is not JSON or does not match the catalog envelope.
///
/// # Examples
///
/// ```
/// use zibrary::fetch::parse_catalog;
///
/// let body = br#"{"books":[{"title":"1984","author":"George Orwell","publicationYear":1949}]}"#;
/// let books = parse_catalog(body).unwrap();
/// assert_eq!(books.len(), 1);
/// ```
pub fn parse_catalog(body: &[u8]) -> Result<Vec<Book>> {
    let document: CatalogDocument = serde_json::from_slice(body)?;
    Ok(document.books)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_catalog_document() {
        let body = br#"{
            "books": [
                {"title": "Da Vinci Code", "author": "Dan Brown", "publicationYear": 2003},
                {"title": "1984", "author": "George Orwell", "publicationYear": 1949}
            ]
        }"#;

        let books = parse_catalog(body).unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[0].title, "Da Vinci Code");
        assert_eq!(books[1].publication_year, 1949);
    }

    #[test]
    fn preserves_arrival_order() {
        let body = br#"{"books":[
            {"title":"B", "author":"x", "publicationYear": 2000},
            {"title":"A", "author":"y", "publicationYear": 1900}
        ]}"#;

        let books = parse_catalog(body).unwrap();
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn parses_empty_catalog() {
        let books = parse_catalog(br#"{"books":[]}"#).unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn rejects_non_json_body() {
        assert!(parse_catalog(b"<html>nope</html>").is_err());
    }

    #[test]
    fn rejects_document_without_books_key() {
        assert!(parse_catalog(br#"{"items":[]}"#).is_err());
    }
}
