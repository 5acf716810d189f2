//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use std::any::Any;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header::CONTENT_TYPE, HeaderMap, Method},
    response::{IntoResponse, Response},
    routing::get,
    Form, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{error::AppError, AppState};

/// Request body extractor accepting JSON and urlencoded forms.
///
/// A missing body, or one with any other content type, decodes to
/// `T::default()`. A body that fails to parse is rejected as an internal
/// fault.
pub struct BookPayload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for BookPayload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let media_type = media_type(req.headers());

        if media_type == "application/x-www-form-urlencoded" {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;
            return Ok(Self(value));
        }

        let is_json = media_type == "application/json" || media_type.ends_with("+json");
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|e| AppError::MalformedBody(e.to_string()))
    }
}

/// Lowercased media type of the request without parameters
fn media_type(headers: &HeaderMap) -> String {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase())
        .unwrap_or_default()
}

/// Fallback for any path or method without a handler
async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

/// Turn a handler panic into the generic 500 response
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };
    AppError::Internal(detail).into_response()
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration; answers every OPTIONS request directly
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE]);

    // API v1 routes
    let api_v1 = Router::new()
        .route(
            "/book",
            get(books::list_books)
                .post(books::create_book)
                .fallback(route_not_found),
        )
        .route(
            "/book/:book_id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book)
                .fallback(route_not_found),
        )
        .with_state(state);

    Router::new()
        .route(
            "/health",
            get(health::health_check).fallback(route_not_found),
        )
        .route(
            "/api-docs/openapi.json",
            get(openapi::openapi_json).fallback(route_not_found),
        )
        .nest("/v1", api_v1)
        .fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
}
