use serde::{Deserialize, Serialize};

/// A registered book. `available` tracks whether the single copy is on loan;
/// returning a book restores availability rather than removing the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub available: bool,
}

impl Book {
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Book {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            available: true,
        }
    }
}
