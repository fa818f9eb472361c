use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A catalog entry. Reviews map reviewer name to review text; a BTreeMap
/// keeps serialized output in a stable order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Optional in serialized input; seed loading fills it from the map key.
    #[serde(default)]
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub reviews: BTreeMap<String, String>,
}

impl Book {
    pub fn new(isbn: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            reviews: BTreeMap::new(),
        }
    }
}
