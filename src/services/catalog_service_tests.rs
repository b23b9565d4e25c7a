// src/services/catalog_service_tests.rs
//
// UNIT TESTS: Catalog Service
//
// PURPOSE:
// - Prove that every rejected operation leaves the catalog unchanged
// - Prove index semantics: appends at the end, removals shift down by one
// - Prove search is case-insensitive, first-match, ascending order
//
// INVARIANTS TESTED:
// - add either appends exactly one record or appends nothing
// - update/remove without a designated index never mutate
// - a removed title is never found at its former index

#[cfg(test)]
mod no_partial_mutation_tests {
    use crate::domain::{Genre, RemoveError, UpdateError, ValidationError};
    use crate::error::AppError;
    use crate::services::{AddBookRequest, CatalogService, UpdateBookRequest};
    use pretty_assertions::assert_eq;

    fn add_request(title: &str, isbn: &str, year: &str) -> AddBookRequest {
        AddBookRequest {
            title: title.to_string(),
            author: "Frank Herbert".to_string(),
            isbn: isbn.to_string(),
            publication_year: year.to_string(),
            genre: Genre::Fiction,
            available: true,
        }
    }

    fn update_request(selection: Option<usize>, title: &str) -> UpdateBookRequest {
        UpdateBookRequest {
            selection,
            title: title.to_string(),
            author: "Frank Herbert".to_string(),
            isbn: "9780441013593".to_string(),
            publication_year: "1965".to_string(),
            genre: Genre::Fiction,
            available: false,
        }
    }

    #[test]
    fn test_add_valid_book_grows_catalog_by_one() {
        let mut service = CatalogService::new();
        let index = service
            .add_book(add_request("Dune", "9780441013593", "1965"))
            .unwrap();

        assert_eq!(index, 0);
        assert_eq!(service.book_count(), 1);
        assert_eq!(service.get_book(0).unwrap().title, "Dune");
    }

    #[test]
    fn test_add_invalid_isbn_is_rejected_without_mutation() {
        let mut service = CatalogService::new();
        service
            .add_book(add_request("Dune", "9780441013593", "1965"))
            .unwrap();

        let err = service
            .add_book(add_request("X", "123", "1965"))
            .unwrap_err();
        assert_eq!(err, AppError::Validation(ValidationError::InvalidIsbn));
        assert_eq!(service.book_count(), 1);
    }

    #[test]
    fn test_add_empty_field_message_content() {
        let mut service = CatalogService::new();
        let err = service
            .add_book(add_request("", "9780441013593", "1965"))
            .unwrap_err();

        assert_eq!(err.to_string(), "Please fill in all fields.");
        assert_eq!(service.book_count(), 0);
    }

    #[test]
    fn test_add_invalid_year_message_content() {
        let mut service = CatalogService::new();
        let err = service
            .add_book(add_request("Dune", "9780441013593", "65"))
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Publication year must be a valid 4-digit number."
        );
    }

    #[test]
    fn test_update_without_selection_fails() {
        let mut service = CatalogService::new();
        service
            .add_book(add_request("Dune", "9780441013593", "1965"))
            .unwrap();

        let err = service.update_book(update_request(None, "Hyperion")).unwrap_err();
        assert_eq!(err, AppError::Update(UpdateError::NoSelection));
        assert_eq!(err.to_string(), "Please select a book to update.");
        assert_eq!(service.get_book(0).unwrap().title, "Dune");
    }

    #[test]
    fn test_update_replaces_selected_record() {
        let mut service = CatalogService::new();
        service
            .add_book(add_request("Dune", "9780441013593", "1965"))
            .unwrap();
        service
            .add_book(add_request("Hyperion", "9780553283686", "1989"))
            .unwrap();

        service
            .update_book(update_request(Some(1), "The Fall of Hyperion"))
            .unwrap();

        assert_eq!(service.book_count(), 2);
        assert_eq!(service.get_book(0).unwrap().title, "Dune");
        assert_eq!(service.get_book(1).unwrap().title, "The Fall of Hyperion");
        assert!(!service.get_book(1).unwrap().available);
    }

    #[test]
    fn test_remove_without_selection_fails() {
        let mut service = CatalogService::new();
        service
            .add_book(add_request("Dune", "9780441013593", "1965"))
            .unwrap();

        let err = service.remove_book(None).unwrap_err();
        assert_eq!(err, AppError::Remove(RemoveError::NoSelection));
        assert_eq!(err.to_string(), "Please select a book to delete.");
        assert_eq!(service.book_count(), 1);
    }

    #[test]
    fn test_remove_middle_record_shifts_indices() {
        let mut service = CatalogService::new();
        service
            .add_book(add_request("Dune", "9780441013593", "1965"))
            .unwrap();
        service
            .add_book(add_request("Hyperion", "9780553283686", "1989"))
            .unwrap();
        service
            .add_book(add_request("Foundation", "9780553293357", "1951"))
            .unwrap();

        service.remove_book(Some(1)).unwrap();

        assert_eq!(service.book_count(), 2);
        assert_eq!(service.get_book(1).unwrap().title, "Foundation");
        assert_eq!(service.search_by_title("Hyperion"), None);
        assert_eq!(service.search_by_title("Foundation"), Some(1));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut service = CatalogService::new();
        service
            .add_book(add_request("Dune", "9780441013593", "1965"))
            .unwrap();

        assert_eq!(service.search_by_title("dune"), Some(0));
        assert_eq!(service.search_by_title("DUNE"), Some(0));
        assert_eq!(service.search_by_title("un"), Some(0));
        assert_eq!(service.search_by_title("Arrakis"), None);
    }

    #[test]
    fn test_search_empty_query_hits_first_row() {
        let mut service = CatalogService::new();
        assert_eq!(service.search_by_title(""), None);

        service
            .add_book(add_request("Dune", "9780441013593", "1965"))
            .unwrap();
        service
            .add_book(add_request("Hyperion", "9780553283686", "1989"))
            .unwrap();

        assert_eq!(service.search_by_title(""), Some(0));
    }
}
