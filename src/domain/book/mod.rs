pub mod entity;
pub mod invariants;

pub use entity::{Book, Genre};
pub use invariants::{validate_new_book, validate_required_fields};
