use axum::{
    extract::State,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::ServiceError;
use crate::middleware::AuthToken;
use crate::models::Book;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/library/borrow", post(borrow_book))
        .route("/library/return", post(return_book))
        .route("/library/books", get(list_books))
}

/* ---------- LENDING ---------- */

// POST /api/library/borrow
#[derive(Debug, Deserialize)]
struct BorrowBookRequest {
    #[serde(rename = "bookId")]
    book_id: String,
}

#[derive(Debug, Serialize)]
struct BorrowBookResponse {
    success: bool,
    message: String,
    book: Option<Book>,
}

async fn borrow_book(
    State(state): State<Arc<AppState>>,
    _auth: AuthToken,
    Json(req): Json<BorrowBookRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let outcome = state.library.borrow_book(&req.book_id).await.map_err(|e| {
        tracing::warn!(book_id = %req.book_id, "borrow_book failed: {e}");
        e
    })?;
    Ok(Json(BorrowBookResponse {
        success: outcome.success,
        message: outcome.message,
        book: outcome.book,
    }))
}

// POST /api/library/return
#[derive(Debug, Deserialize)]
struct ReturnBookRequest {
    #[serde(rename = "bookId")]
    book_id: String,
}

#[derive(Debug, Serialize)]
struct ReturnBookResponse {
    success: bool,
    message: String,
}

async fn return_book(
    State(state): State<Arc<AppState>>,
    _auth: AuthToken,
    Json(req): Json<ReturnBookRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let outcome = state.library.return_book(&req.book_id).await?;
    Ok(Json(ReturnBookResponse {
        success: outcome.success,
        message: outcome.message,
    }))
}

/* ---------- LISTING ---------- */

// GET /api/library/books
#[derive(Debug, Serialize)]
struct ListBooksResponse {
    books: Vec<Book>,
}

async fn list_books(
    State(state): State<Arc<AppState>>,
    _auth: AuthToken,
) -> Result<impl IntoResponse, ServiceError> {
    let books = state.library.list_books().await;
    Ok(Json(ListBooksResponse { books }))
}
