use std::{collections::BTreeMap, sync::Arc};

use tokio::sync::RwLock;

use models::book::Book;

/// In-memory catalog keyed by ISBN.
///
/// Holds a `BTreeMap<String, Book>` behind an async RwLock and hands out
/// clones. Contents are fixed at seed time and live for the process
/// lifetime; there is no file or database backing.
pub struct CatalogStore {
    inner: RwLock<BTreeMap<String, Book>>,
}

impl CatalogStore {
    /// Wrap a seeded catalog. Key order is the iteration and serialization order.
    pub fn new(seed: BTreeMap<String, Book>) -> Arc<Self> {
        Arc::new(Self { inner: RwLock::new(seed) })
    }

    /// Snapshot of every entry in key order.
    pub async fn list(&self) -> BTreeMap<String, Book> {
        let map = self.inner.read().await;
        map.clone()
    }

    /// Get a book by ISBN.
    pub async fn get(&self, isbn: &str) -> Option<Book> {
        let map = self.inner.read().await;
        map.get(isbn).cloned()
    }

    /// Whole-field, case-sensitive scan over the author column, in key order.
    pub async fn by_author(&self, author: &str) -> Vec<Book> {
        let map = self.inner.read().await;
        map.values().filter(|b| b.author == author).cloned().collect()
    }

    /// Whole-field, case-sensitive scan over the title column, in key order.
    pub async fn by_title(&self, title: &str) -> Vec<Book> {
        let map = self.inner.read().await;
        map.values().filter(|b| b.title == title).cloned().collect()
    }

    /// Reviews of a book, `None` when the ISBN is absent.
    pub async fn reviews(&self, isbn: &str) -> Option<BTreeMap<String, String>> {
        let map = self.inner.read().await;
        map.get(isbn).map(|b| b.reviews.clone())
    }

    pub async fn len(&self) -> usize {
        let map = self.inner.read().await;
        map.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BTreeMap<String, Book> {
        let mut seed = BTreeMap::new();
        for (isbn, title, author) in
            [("1", "T1", "A1"), ("2", "T2", "A1"), ("3", "T3", "A2")]
        {
            seed.insert(isbn.to_string(), Book::new(isbn, title, author));
        }
        seed
    }

    #[tokio::test]
    async fn lookups_are_exact_matches() {
        let store = CatalogStore::new(sample());
        assert_eq!(store.len().await, 3);
        assert!(!store.is_empty().await);

        assert_eq!(store.get("2").await.map(|b| b.title), Some("T2".to_string()));
        assert!(store.get("9").await.is_none());

        assert_eq!(store.by_author("A1").await.len(), 2);
        assert!(store.by_author("a1").await.is_empty());
        assert!(store.by_author("A").await.is_empty());

        assert_eq!(store.by_title("T3").await.len(), 1);
        assert!(store.by_title("t3").await.is_empty());
    }

    #[tokio::test]
    async fn list_snapshots_in_key_order() {
        let store = CatalogStore::new(sample());
        let all = store.list().await;
        let keys: Vec<_> = all.keys().cloned().collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
    }

    #[tokio::test]
    async fn reviews_distinguish_absent_from_empty() {
        let mut seed = sample();
        if let Some(book) = seed.get_mut("1") {
            book.reviews.insert("reader1".into(), "fine".into());
        }
        let store = CatalogStore::new(seed);

        assert_eq!(store.reviews("1").await.map(|r| r.len()), Some(1));
        assert_eq!(store.reviews("2").await.map(|r| r.len()), Some(0));
        assert!(store.reviews("9").await.is_none());
    }
}
