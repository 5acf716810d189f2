//! Catalog service for book management

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every book in the catalog
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        Ok(self.repository.books.list().await)
    }

    /// Get a book by its identifier
    pub async fn get_book(&self, book_id: &str) -> AppResult<Book> {
        Ok(self.repository.books.get_by_id(book_id).await?)
    }

    /// Add a new book to the catalog
    pub async fn create_book(&self, data: CreateBook) -> AppResult<Book> {
        let book = self.repository.books.create(data).await?;
        tracing::debug!(book_id = %book.book_id, "Book created");
        Ok(book)
    }

    /// Apply a partial update to an existing book
    pub async fn update_book(&self, book_id: &str, data: UpdateBook) -> AppResult<Book> {
        let book = self.repository.books.update(book_id, data).await?;
        tracing::debug!(book_id = %book_id, "Book updated");
        Ok(book)
    }

    /// Remove a book from the catalog
    pub async fn delete_book(&self, book_id: &str) -> AppResult<()> {
        self.repository.books.delete(book_id).await?;
        tracing::debug!(book_id = %book_id, "Book deleted");
        Ok(())
    }
}
