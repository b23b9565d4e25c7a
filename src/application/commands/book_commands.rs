// src/application/commands/book_commands.rs
//
// Book Command Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use crate::application::{
    dto::{BookDto, BookFormDto},
    state::AppState,
};
use crate::domain::Genre;
use crate::services::{AddBookRequest, UpdateBookRequest};

/// All catalog rows in insertion order
pub fn list_books(state: &AppState) -> Vec<BookDto> {
    state
        .catalog_service
        .list_books()
        .iter()
        .map(BookDto::from)
        .collect()
}

/// Row contents for one index, for loading a selection back into the form
pub fn get_book(state: &AppState, index: usize) -> Option<BookDto> {
    state.catalog_service.get_book(index).map(BookDto::from)
}

/// Validate the form and append a new record, returning its row index
pub fn add_book(state: &mut AppState, form: BookFormDto) -> Result<usize, String> {
    let request = AddBookRequest {
        title: form.title,
        author: form.author,
        isbn: form.isbn,
        publication_year: form.publication_year,
        genre: parse_genre(&form.genre)?,
        available: form.available,
    };

    state
        .catalog_service
        .add_book(request)
        .map_err(|e| e.to_string())
}

/// Replace the selected record with the form contents
pub fn update_book(
    state: &mut AppState,
    selection: Option<usize>,
    form: BookFormDto,
) -> Result<(), String> {
    let request = UpdateBookRequest {
        selection,
        title: form.title,
        author: form.author,
        isbn: form.isbn,
        publication_year: form.publication_year,
        genre: parse_genre(&form.genre)?,
        available: form.available,
    };

    state
        .catalog_service
        .update_book(request)
        .map_err(|e| e.to_string())
}

/// Delete the selected record. The confirmation prompt is the presentation
/// layer's job and must happen before this is invoked.
pub fn delete_book(state: &mut AppState, selection: Option<usize>) -> Result<(), String> {
    state
        .catalog_service
        .remove_book(selection)
        .map_err(|e| e.to_string())
}

/// First row whose title contains the query, case-insensitively
pub fn search_books(state: &AppState, query: &str) -> Result<usize, String> {
    state
        .catalog_service
        .search_by_title(query)
        .ok_or_else(|| "No matching book found.".to_string())
}

// The selector can only offer the fixed labels, so a miss here means the
// front-end sent something it never showed.
fn parse_genre(name: &str) -> Result<Genre, String> {
    Genre::from_name(name).ok_or_else(|| format!("Invalid genre: {}", name))
}
