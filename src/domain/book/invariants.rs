use super::entity::Book;
use crate::domain::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

// Explicit [0-9] rather than \d: the rules are ASCII digit counts,
// and regex's \d matches any Unicode decimal digit.
static ISBN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$|^[0-9]{13}$").expect("valid ISBN pattern"));
static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}$").expect("valid year pattern"));

/// Validates everything a record must satisfy to enter the catalog
pub fn validate_new_book(book: &Book) -> Result<(), ValidationError> {
    validate_required_fields(book)?;
    validate_isbn(&book.isbn)?;
    validate_publication_year(&book.publication_year)?;
    Ok(())
}

/// The non-empty checks alone. Update re-checks only these; ISBN and
/// year formats are enforced at add time.
pub fn validate_required_fields(book: &Book) -> Result<(), ValidationError> {
    // Literal emptiness, no trimming: whitespace counts as filled in.
    if book.title.is_empty()
        || book.author.is_empty()
        || book.isbn.is_empty()
        || book.publication_year.is_empty()
    {
        return Err(ValidationError::EmptyField);
    }
    Ok(())
}

fn validate_isbn(isbn: &str) -> Result<(), ValidationError> {
    if !ISBN_RE.is_match(isbn) {
        return Err(ValidationError::InvalidIsbn);
    }
    Ok(())
}

fn validate_publication_year(year: &str) -> Result<(), ValidationError> {
    if !YEAR_RE.is_match(year) {
        return Err(ValidationError::InvalidYear);
    }
    Ok(())
}

/// Invariants that must hold for the Book domain:
///
/// 1. Title, author, ISBN and year are non-empty at insertion and update
/// 2. ISBN is exactly 10 or 13 ASCII digits at insertion
/// 3. Publication year is exactly 4 ASCII digits at insertion
/// 4. Genre is always one of the fixed six values (enforced by the type)
/// 5. No uniqueness constraint: duplicate ISBNs are allowed
/// 6. Validation happens before mutation, never after
