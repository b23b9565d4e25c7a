// src/services/catalog_service.rs
use crate::domain::{Book, Catalog, Genre};
use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct AddBookRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: String,
    pub genre: Genre,
    pub available: bool,
}

#[derive(Debug, Clone)]
pub struct UpdateBookRequest {
    pub selection: Option<usize>,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: String,
    pub genre: Genre,
    pub available: bool,
}

/// Orchestrates catalog operations for the application layer. Owns the
/// catalog outright: one instance per process, one interaction thread.
#[derive(Debug, Default)]
pub struct CatalogService {
    catalog: Catalog,
}

impl CatalogService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_book(&mut self, request: AddBookRequest) -> AppResult<usize> {
        let book = Book::new(
            request.title,
            request.author,
            request.isbn,
            request.publication_year,
            request.genre,
            request.available,
        );

        let index = self.catalog.add(book)?;
        log::info!(
            "added '{}' at index {}",
            self.catalog.books()[index].title,
            index
        );
        Ok(index)
    }

    pub fn update_book(&mut self, request: UpdateBookRequest) -> AppResult<()> {
        let selection = request.selection;
        let book = Book::new(
            request.title,
            request.author,
            request.isbn,
            request.publication_year,
            request.genre,
            request.available,
        );

        self.catalog.update(selection, book)?;
        log::info!("updated book at index {}", selection.unwrap_or_default());
        Ok(())
    }

    pub fn remove_book(&mut self, selection: Option<usize>) -> AppResult<()> {
        self.catalog.remove(selection)?;
        log::info!(
            "removed book at index {}, {} remaining",
            selection.unwrap_or_default(),
            self.catalog.len()
        );
        Ok(())
    }

    /// First title containing the query, case-insensitively.
    pub fn search_by_title(&self, query: &str) -> Option<usize> {
        let hit = self.catalog.find_by_title(query);
        log::debug!("search {:?} -> {:?}", query, hit);
        hit
    }

    pub fn get_book(&self, index: usize) -> Option<&Book> {
        self.catalog.get(index)
    }

    pub fn list_books(&self) -> &[Book] {
        self.catalog.books()
    }

    pub fn book_count(&self) -> usize {
        self.catalog.len()
    }
}
