use serde::{Deserialize, Serialize};

/// One book record as the catalog table shows it.
/// Fields hold exactly what the input panel captured; format rules are
/// enforced at the catalog boundary, never re-checked afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Title shown in the first table column
    pub title: String,

    /// Author name
    pub author: String,

    /// 10- or 13-digit ISBN, kept as entered
    pub isbn: String,

    /// 4-digit publication year, kept as entered
    pub publication_year: String,

    /// One of the fixed genre set
    pub genre: Genre,

    /// Whether the copy is currently available
    pub available: bool,
}

/// The fixed genre set offered by the selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Genre {
    #[default]
    Fiction,
    NonFiction,
    Science,
    History,
    Fantasy,
    Biography,
}

impl Book {
    pub fn new(
        title: String,
        author: String,
        isbn: String,
        publication_year: String,
        genre: Genre,
        available: bool,
    ) -> Self {
        Self {
            title,
            author,
            isbn,
            publication_year,
            genre,
            available,
        }
    }
}

impl Genre {
    /// All genres in selector order; the first is the selector default.
    pub const ALL: [Genre; 6] = [
        Genre::Fiction,
        Genre::NonFiction,
        Genre::Science,
        Genre::History,
        Genre::Fantasy,
        Genre::Biography,
    ];

    /// Parse a genre from its display label
    pub fn from_name(name: &str) -> Option<Genre> {
        match name {
            "Fiction" => Some(Genre::Fiction),
            "Non-Fiction" => Some(Genre::NonFiction),
            "Science" => Some(Genre::Science),
            "History" => Some(Genre::History),
            "Fantasy" => Some(Genre::Fantasy),
            "Biography" => Some(Genre::Biography),
            _ => None,
        }
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Genre::Fiction => write!(f, "Fiction"),
            Genre::NonFiction => write!(f, "Non-Fiction"),
            Genre::Science => write!(f, "Science"),
            Genre::History => write!(f, "History"),
            Genre::Fantasy => write!(f, "Fantasy"),
            Genre::Biography => write!(f, "Biography"),
        }
    }
}
