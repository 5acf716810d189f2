//! Book endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

use super::BookPayload;

/// Acknowledgement returned by mutating endpoints
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Always "success"
    pub status: String,
    pub message: String,
}

impl MessageResponse {
    fn success(message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: message.to_string(),
        }
    }
}

/// Single book wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct BookResponse {
    pub book: Book,
}

/// List all books
#[utoipa::path(
    get,
    path = "/v1/book",
    tag = "books",
    responses(
        (status = 200, description = "Every stored book", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.list_books().await?;
    Ok(Json(books))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/v1/book/{book_id}",
    tag = "books",
    params(("book_id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<BookResponse>> {
    let book = state.services.catalog.get_book(&book_id).await?;
    Ok(Json(BookResponse { book }))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/v1/book",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 200, description = "Book created", body = MessageResponse),
        (status = 400, description = "bookID missing", body = crate::error::ErrorResponse),
        (status = 403, description = "Book ID already in use", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    BookPayload(data): BookPayload<CreateBook>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.create_book(data).await?;
    Ok(Json(MessageResponse::success("Book created successfully")))
}

/// Update a book; omitted fields keep their value
#[utoipa::path(
    put,
    path = "/v1/book/{book_id}",
    tag = "books",
    params(("book_id" = String, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
    BookPayload(data): BookPayload<UpdateBook>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.update_book(&book_id, data).await?;
    Ok(Json(MessageResponse::success("Book updated successfully")))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/v1/book/{book_id}",
    tag = "books",
    params(("book_id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_book(&book_id).await?;
    Ok(Json(MessageResponse::success("Book deleted successfully")))
}
