//! Book store backed by an insertion-ordered map behind a single lock

use std::sync::Arc;

use indexmap::{map::Entry, IndexMap};
use tokio::sync::RwLock;

use super::{StoreError, StoreResult};
use crate::models::book::{Book, CreateBook, UpdateBook};

/// Keyed collection of books.
///
/// Clones share the same map. Every operation takes the lock once and
/// releases it before returning, so each call is atomic for its key.
#[derive(Clone, Default)]
pub struct BooksRepository {
    books: Arc<RwLock<IndexMap<String, Book>>>,
}

impl BooksRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored book, in insertion order
    pub async fn list(&self) -> Vec<Book> {
        self.books.read().await.values().cloned().collect()
    }

    /// Get a book by its identifier
    pub async fn get_by_id(&self, book_id: &str) -> StoreResult<Book> {
        self.books
            .read()
            .await
            .get(book_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(book_id.to_string()))
    }

    /// Insert a new book; the identifier must be non-empty and unused
    pub async fn create(&self, data: CreateBook) -> StoreResult<Book> {
        let book_id = match data.book_id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => return Err(StoreError::MissingKey),
        };

        let mut books = self.books.write().await;
        match books.entry(book_id) {
            Entry::Occupied(entry) => Err(StoreError::DuplicateKey(entry.key().clone())),
            Entry::Vacant(entry) => {
                let book = Book::new(entry.key().clone(), data);
                entry.insert(book.clone());
                Ok(book)
            }
        }
    }

    /// Merge the supplied fields into an existing book
    pub async fn update(&self, book_id: &str, data: UpdateBook) -> StoreResult<Book> {
        let mut books = self.books.write().await;
        let book = books
            .get_mut(book_id)
            .ok_or_else(|| StoreError::NotFound(book_id.to_string()))?;
        book.apply(data);
        Ok(book.clone())
    }

    /// Remove a book
    pub async fn delete(&self, book_id: &str) -> StoreResult<()> {
        self.books
            .write()
            .await
            .shift_remove(book_id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(book_id.to_string()))
    }
}
