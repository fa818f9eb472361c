use std::{collections::BTreeMap, sync::Arc};

use tracing::{debug, instrument};

use models::book::Book;

use super::errors::CatalogError;
use super::store::CatalogStore;

/// Catalog query service independent of the web framework.
///
/// Every lookup is strict string equality on the stored field. Two result
/// surfaces cover the same lookups: the plain methods report absence as an
/// empty value, the `fetch_*` methods report absence as a `CatalogError`
/// carrying the client-facing message. Both surfaces agree on what they
/// find for identical inputs.
pub struct CatalogService {
    store: Arc<CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Full catalog keyed by ISBN.
    pub async fn list_all(&self) -> BTreeMap<String, Book> {
        self.store.list().await
    }

    pub async fn get_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.store.get(isbn).await
    }

    /// Books whose author equals `author` exactly; empty when none match.
    pub async fn get_by_author(&self, author: &str) -> Vec<Book> {
        self.store.by_author(author).await
    }

    /// Books whose title equals `title` exactly; empty when none match.
    pub async fn get_by_title(&self, title: &str) -> Vec<Book> {
        self.store.by_title(title).await
    }

    /// Reviews of a known book. A present book with no reviews yields an
    /// empty map; an absent ISBN is `BookNotFound`.
    #[instrument(skip(self))]
    pub async fn reviews(&self, isbn: &str) -> Result<BTreeMap<String, String>, CatalogError> {
        self.store.reviews(isbn).await.ok_or(CatalogError::BookNotFound)
    }

    /// Full catalog for the deferred surface. Infallible with the current
    /// store; the Result is part of the surface contract.
    pub async fn fetch_all(&self) -> Result<BTreeMap<String, Book>, CatalogError> {
        Ok(self.store.list().await)
    }

    #[instrument(skip(self))]
    pub async fn fetch_by_isbn(&self, isbn: &str) -> Result<Book, CatalogError> {
        match self.store.get(isbn).await {
            Some(book) => Ok(book),
            None => {
                debug!("no catalog entry: {}", isbn);
                Err(CatalogError::BookNotFound)
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn fetch_by_author(&self, author: &str) -> Result<Vec<Book>, CatalogError> {
        let books = self.store.by_author(author).await;
        if books.is_empty() {
            debug!("no catalog entries by author: {}", author);
            return Err(CatalogError::UnknownAuthor);
        }
        Ok(books)
    }

    #[instrument(skip(self))]
    pub async fn fetch_by_title(&self, title: &str) -> Result<Vec<Book>, CatalogError> {
        let books = self.store.by_title(title).await;
        if books.is_empty() {
            debug!("no catalog entries titled: {}", title);
            return Err(CatalogError::UnknownTitle);
        }
        Ok(books)
    }
}
