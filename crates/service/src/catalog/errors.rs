use thiserror::Error;

/// Business errors for catalog lookups. Display strings are the exact
/// payload messages clients receive.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Book not found")]
    BookNotFound,
    #[error("No books found by this author")]
    UnknownAuthor,
    #[error("No books found with this title")]
    UnknownTitle,
    #[error("Error retrieving books")]
    Retrieval,
}

impl CatalogError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            CatalogError::BookNotFound => 3001,
            CatalogError::UnknownAuthor => 3002,
            CatalogError::UnknownTitle => 3003,
            CatalogError::Retrieval => 3100,
        }
    }
}
