//! Book record model and display helpers.
//!
//! This module defines the core `Book` type representing one record of the
//! remote catalog. Books are immutable once loaded; the display order of the
//! collection is a derived concern owned by the application layer, never a
//! property of the records themselves.

use serde::{Deserialize, Serialize};

/// A single book record from the remote catalog.
///
/// Mirrors the wire shape of the catalog endpoint, which serializes fields in
/// camelCase (`publicationYear`). Records carry no identity beyond their
/// field values.
///
/// # Fields
///
/// - `title`: Display title of the book
/// - `author`: Author name as published by the catalog
/// - `publication_year`: Year of publication, used for sorting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,
    pub author: String,
    pub publication_year: i32,
}

impl Book {
    /// Creates a book record from its parts.
    ///
    /// # Examples
    ///
    /// ```
    /// use zibrary::domain::Book;
    ///
    /// let book = Book::new("Da Vinci Code", "Dan Brown", 2003);
    /// assert_eq!(book.publication_year, 2003);
    /// ```
    #[must_use]
    pub fn new(title: impl Into<String>, author: impl Into<String>, publication_year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            publication_year,
        }
    }

    /// Returns the publication line shown under the title in the list view.
    ///
    /// # Examples
    ///
    /// ```
    /// use zibrary::domain::Book;
    ///
    /// let book = Book::new("1984", "George Orwell", 1949);
    /// assert_eq!(book.published_line(), "Published by George Orwell in 1949");
    /// ```
    #[must_use]
    pub fn published_line(&self) -> String {
        format!("Published by {} in {}", self.author, self.publication_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn published_line_formats_author_and_year() {
        let book = Book::new("Da Vinci Code", "Dan Brown", 2003);
        assert_eq!(book.published_line(), "Published by Dan Brown in 2003");
    }

    #[test]
    fn deserializes_camel_case_publication_year() {
        let book: Book = serde_json::from_str(
            r#"{"title":"1984","author":"George Orwell","publicationYear":1949}"#,
        )
        .unwrap();
        assert_eq!(book, Book::new("1984", "George Orwell", 1949));
    }

    #[test]
    fn serializes_back_to_camel_case() {
        let json = serde_json::to_string(&Book::new("1984", "George Orwell", 1949)).unwrap();
        assert!(json.contains("\"publicationYear\":1949"));
    }
}
