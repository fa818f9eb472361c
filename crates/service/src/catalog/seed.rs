use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use models::book::Book;

/// Built-in catalog used when no seed file is configured: ten classics
/// keyed "1".."10".
pub fn builtin() -> BTreeMap<String, Book> {
    let entries = [
        ("1", "Things Fall Apart", "Chinua Achebe"),
        ("2", "Fairy tales", "Hans Christian Andersen"),
        ("3", "The Divine Comedy", "Dante Alighieri"),
        ("4", "The Epic Of Gilgamesh", "Unknown"),
        ("5", "The Book Of Job", "Unknown"),
        ("6", "One Thousand and One Nights", "Unknown"),
        ("7", "Njál's Saga", "Unknown"),
        ("8", "Pride and Prejudice", "Jane Austen"),
        ("9", "Le Père Goriot", "Honoré de Balzac"),
        ("10", "Molloy, Malone Dies, The Unnamable, the trilogy", "Samuel Beckett"),
    ];
    entries
        .into_iter()
        .map(|(isbn, title, author)| (isbn.to_string(), Book::new(isbn, title, author)))
        .collect()
}

/// Load a catalog from a JSON file shaped like the listing endpoint output:
/// an object keyed by ISBN. Entries may omit the inner `isbn` field; the
/// map key fills it in.
pub fn from_file(path: impl AsRef<Path>) -> Result<BTreeMap<String, Book>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog seed {}", path.display()))?;
    let mut catalog: BTreeMap<String, Book> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing catalog seed {}", path.display()))?;
    for (isbn, book) in catalog.iter_mut() {
        if book.isbn != *isbn {
            book.isbn = isbn.clone();
        }
    }
    Ok(catalog)
}

/// Resolve the startup catalog: the configured file when present,
/// otherwise the built-in set.
pub fn resolve(seed_path: Option<&str>) -> Result<BTreeMap<String, Book>> {
    match seed_path {
        Some(path) => from_file(path),
        None => Ok(builtin()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_ten_entries_keyed_one_to_ten() {
        let seed = builtin();
        assert_eq!(seed.len(), 10);
        for n in 1..=10 {
            let key = n.to_string();
            let book = seed.get(&key).expect("entry");
            assert_eq!(book.isbn, key);
            assert!(!book.title.is_empty());
            assert!(!book.author.is_empty());
            assert!(book.reviews.is_empty());
        }
    }

    #[test]
    fn file_seed_accepts_bare_entries() -> Result<()> {
        let tmp = std::env::temp_dir().join(format!("catalog_seed_{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&tmp, r#"{"11":{"title":"Dead Souls","author":"Nikolai Gogol"}}"#)?;
        let catalog = from_file(&tmp);
        std::fs::remove_file(&tmp).ok();

        let catalog = catalog?;
        let book = catalog.get("11").expect("entry");
        assert_eq!(book.isbn, "11");
        assert_eq!(book.author, "Nikolai Gogol");
        assert!(book.reviews.is_empty());
        Ok(())
    }

    #[test]
    fn malformed_or_missing_seed_is_an_error() -> Result<()> {
        let tmp = std::env::temp_dir().join(format!("catalog_seed_{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&tmp, "not json")?;
        assert!(from_file(&tmp).is_err());
        std::fs::remove_file(&tmp).ok();

        assert!(from_file("/definitely/not/here.json").is_err());
        Ok(())
    }

    #[test]
    fn resolve_prefers_configured_path() -> Result<()> {
        assert_eq!(resolve(None)?.len(), 10);

        let tmp = std::env::temp_dir().join(format!("catalog_seed_{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&tmp, r#"{"1":{"title":"Only One","author":"Somebody"}}"#)?;
        let resolved = resolve(Some(tmp.to_string_lossy().as_ref()));
        std::fs::remove_file(&tmp).ok();
        assert_eq!(resolved?.len(), 1);
        Ok(())
    }
}
