//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::{Book, BookDraft, BookQuery, BookSummary},
};

/// Success envelope: `{status: "success", message?, data?}`
#[derive(Serialize, ToSchema)]
pub struct SuccessResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// Always "success"
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Message-only success envelope (update/delete)
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    /// Always "success"
    pub status: &'static str,
    pub message: String,
}

/// Data payload carrying the id of a freshly created book
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBook {
    pub book_id: String,
}

/// Data payload for list responses
#[derive(Serialize, ToSchema)]
pub struct BookList {
    pub books: Vec<BookSummary>,
}

/// Data payload for single-book responses
#[derive(Serialize, ToSchema)]
pub struct BookDetails {
    pub book: Book,
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookDraft,
    responses(
        (status = 201, description = "Book created", body = SuccessResponse<CreatedBook>),
        (status = 400, description = "Missing name or readPage exceeds pageCount", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(draft): Json<BookDraft>,
) -> AppResult<(StatusCode, Json<SuccessResponse<CreatedBook>>)> {
    let id = state.services.catalog.add_book(draft)?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessResponse {
            status: "success",
            message: Some("Book added successfully".to_string()),
            data: Some(CreatedBook { book_id: id }),
        }),
    ))
}

/// List books with an optional filter
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "List of book summaries", body = SuccessResponse<BookList>)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookQuery>,
) -> AppResult<Json<SuccessResponse<BookList>>> {
    let books = state.services.catalog.list_books(&query)?;

    Ok(Json(SuccessResponse {
        status: "success",
        message: None,
        data: Some(BookList { books }),
    }))
}

/// Get full book details by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = SuccessResponse<BookDetails>),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse<BookDetails>>> {
    let book = state.services.catalog.get_book(&id)?;

    Ok(Json(SuccessResponse {
        status: "success",
        message: None,
        data: Some(BookDetails { book }),
    }))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = BookDraft,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Missing name or readPage exceeds pageCount", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(draft): Json<BookDraft>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.update_book(&id, draft)?;

    Ok(Json(MessageResponse {
        status: "success",
        message: "Book updated successfully".to_string(),
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_book(&id)?;

    Ok(Json(MessageResponse {
        status: "success",
        message: "Book deleted successfully".to_string(),
    }))
}
