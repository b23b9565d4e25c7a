// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod book;
pub mod catalog;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Book Domain
pub use book::{validate_new_book, validate_required_fields, Book, Genre};

// Catalog
pub use catalog::Catalog;

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Rejections raised when a record's fields fail the insertion rules.
/// Display text is the exact content the presentation layer shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in all fields.")]
    EmptyField,

    #[error("ISBN must be 10 or 13 digits.")]
    InvalidIsbn,

    #[error("Publication year must be a valid 4-digit number.")]
    InvalidYear,
}

/// Why an update was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error("Please select a book to update.")]
    NoSelection,

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Why a removal was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoveError {
    #[error("Please select a book to delete.")]
    NoSelection,
}
