//! Repository layer holding the in-process book store

pub mod books;

use thiserror::Error;

/// Failures reported by store operations.
///
/// None of these are faults: the caller decides how to surface them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("book identifier is missing")]
    MissingKey,

    #[error("book {0} already exists")]
    DuplicateKey(String),

    #[error("book {0} not found")]
    NotFound(String),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Main repository struct holding every store
#[derive(Clone, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a new repository with empty stores
    pub fn new() -> Self {
        Self {
            books: books::BooksRepository::new(),
        }
    }
}
