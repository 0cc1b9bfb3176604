use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::error::ServiceError;
use crate::models::Book;

/// Outcome of a borrow or return call. The registry reports soft failures
/// (such as a copy already on loan) through the flag and message rather than
/// the error taxonomy.
#[derive(Debug, Clone)]
pub struct LoanOutcome {
    pub success: bool,
    pub message: String,
    pub book: Option<Book>,
}

/// Book-lending registry: one map under a read/write lock, independent from
/// the ticketing lock. Shared reads, exclusive writes.
#[derive(Debug, Default)]
pub struct BookRegistry {
    books: RwLock<HashMap<String, Book>>,
}

impl BookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-seeded with the sample record the service ships with.
    pub fn with_sample_book() -> Self {
        let sample = Book::new("123", "Sample Book", "Sample Author");
        let mut books = HashMap::new();
        books.insert(sample.id.clone(), sample);
        BookRegistry {
            books: RwLock::new(books),
        }
    }

    pub async fn add_book(&self, book: Book) -> String {
        let id = book.id.clone();
        self.books.write().await.insert(id.clone(), book);
        id
    }

    pub async fn get_book(&self, book_id: &str) -> Option<Book> {
        self.books.read().await.get(book_id).cloned()
    }

    pub async fn remove_book(&self, book_id: &str) {
        self.books.write().await.remove(book_id);
    }

    /// Marks the book as on loan and hands it to the caller.
    pub async fn borrow_book(&self, book_id: &str) -> Result<LoanOutcome, ServiceError> {
        let mut books = self.books.write().await;
        let book = books
            .get_mut(book_id)
            .ok_or_else(|| ServiceError::NotFound("book not found".to_string()))?;

        if !book.available {
            return Ok(LoanOutcome {
                success: false,
                message: "Book is already on loan".to_string(),
                book: Some(book.clone()),
            });
        }

        book.available = false;
        Ok(LoanOutcome {
            success: true,
            message: "Book checked out successfully".to_string(),
            book: Some(book.clone()),
        })
    }

    /// Marks the book available again. The record stays in the registry, so a
    /// returned book remains listable.
    pub async fn return_book(&self, book_id: &str) -> Result<LoanOutcome, ServiceError> {
        let mut books = self.books.write().await;
        let book = books
            .get_mut(book_id)
            .ok_or_else(|| ServiceError::NotFound("book not found".to_string()))?;

        book.available = true;
        Ok(LoanOutcome {
            success: true,
            message: "Book returned successfully".to_string(),
            book: None,
        })
    }

    /// Snapshot of all registered books, order unspecified.
    pub async fn list_books(&self) -> Vec<Book> {
        self.books.read().await.values().cloned().collect()
    }
}
