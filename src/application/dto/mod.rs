// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs NEVER leak domain invariants
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::domain::Book;

/// One row of the catalog view, all columns stringified for display
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: String,
    pub genre: String,
    pub available: bool,
}

impl From<&Book> for BookDto {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            isbn: book.isbn.clone(),
            publication_year: book.publication_year.clone(),
            genre: book.genre.to_string(),
            available: book.available,
        }
    }
}

/// Raw input panel contents: four text fields, the genre selector's label,
/// and the availability toggle. Unvalidated by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookFormDto {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub publication_year: String,
    pub genre: String,
    pub available: bool,
}
