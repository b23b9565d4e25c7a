// src/domain/catalog.rs
//
// The in-memory catalog: an ordered, 0-based indexable sequence of books.
// Owned by the application instance; lives exactly as long as the process.

use super::book::{validate_new_book, validate_required_fields, Book};
use super::{RemoveError, UpdateError, ValidationError};

/// Ordered collection of book records, insertion order preserved.
/// Every operation either fully succeeds or leaves the catalog untouched.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a record, returning its index.
    pub fn add(&mut self, book: Book) -> Result<usize, ValidationError> {
        validate_new_book(&book)?;
        self.books.push(book);
        Ok(self.books.len() - 1)
    }

    /// Replace the record at the selected index in place.
    ///
    /// Only the non-empty constraints are re-checked here; ISBN and year
    /// formats are enforced at add time only.
    pub fn update(&mut self, index: Option<usize>, book: Book) -> Result<(), UpdateError> {
        let index = self.designated(index).ok_or(UpdateError::NoSelection)?;
        validate_required_fields(&book)?;
        self.books[index] = book;
        Ok(())
    }

    /// Delete the record at the selected index; later records shift down one.
    pub fn remove(&mut self, index: Option<usize>) -> Result<(), RemoveError> {
        let index = self.designated(index).ok_or(RemoveError::NoSelection)?;
        self.books.remove(index);
        Ok(())
    }

    /// Case-insensitive substring scan over titles, in ascending index
    /// order; returns the first match.
    ///
    /// The scan is deliberately naive: every title contains the empty
    /// string, so an empty query selects the first record of a non-empty
    /// catalog.
    pub fn find_by_title(&self, query: &str) -> Option<usize> {
        let needle = query.to_uppercase();
        self.books
            .iter()
            .position(|book| book.title.to_uppercase().contains(&needle))
    }

    pub fn get(&self, index: usize) -> Option<&Book> {
        self.books.get(index)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    // A stale out-of-range index is indistinguishable from no selection.
    fn designated(&self, index: Option<usize>) -> Option<usize> {
        index.filter(|&i| i < self.books.len())
    }
}
