//! Statistics endpoint

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::BookStats};

#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub books: BookStats,
}

/// Get catalog statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Catalog counters", body = StatsResponse)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
) -> AppResult<Json<StatsResponse>> {
    let books = state.services.catalog.stats()?;
    Ok(Json(StatsResponse { books }))
}
