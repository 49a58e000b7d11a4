//! Handlers for the `/attractions` resource.
//!
//! Alongside plain CRUD the resource offers two scraping helpers:
//! - `/attractions/parse` extracts attraction details from a supported
//!   travel-guide page,
//! - `/attractions/images` runs a large-size image search for an
//!   attraction name.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use wayplan_core::error::CoreError;
use wayplan_core::types::DbId;
use wayplan_db::models::attraction::{
    Attraction, AttractionFilter, AttractionPin, AttractionWithCity, CreateAttraction,
    UpdateAttraction,
};
use wayplan_db::repositories::AttractionRepo;
use wayplan_scrape::attraction::ScrapedAttraction;
use wayplan_scrape::images::ImageSearchResult;

use crate::error::{AppError, AppResult};
use crate::response::PagedResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// CRUD handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/attractions
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateAttraction>,
) -> AppResult<(StatusCode, Json<Attraction>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Attraction name must not be empty".to_string(),
        )));
    }
    let attraction = AttractionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(attraction)))
}

/// Query parameters for the paginated listing.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub city_id: Option<DbId>,
    pub country_code: Option<String>,
    pub skip: Option<i64>,
    pub take: Option<i64>,
}

/// GET /api/v1/attractions
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<PagedResponse<AttractionWithCity>>> {
    let filter = AttractionFilter {
        city_id: params.city_id,
        country_code: params.country_code,
    };
    let (total, data) =
        AttractionRepo::list(&state.pool, &filter, params.skip, params.take).await?;
    Ok(Json(PagedResponse { total, data }))
}

/// Query parameters for the map-pin listing.
///
/// `country_codes` is a comma-separated list of cca2 codes.
#[derive(Debug, Deserialize)]
pub struct AllParams {
    pub city_id: Option<DbId>,
    pub country_codes: Option<String>,
}

/// GET /api/v1/attractions/all
pub async fn list_all(
    State(state): State<AppState>,
    Query(params): Query<AllParams>,
) -> AppResult<Json<Vec<AttractionPin>>> {
    let codes: Option<Vec<String>> = params.country_codes.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .map(str::to_string)
            .collect()
    });
    let pins = AttractionRepo::list_all(&state.pool, params.city_id, codes.as_deref()).await?;
    Ok(Json(pins))
}

/// GET /api/v1/attractions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Attraction>> {
    let attraction = AttractionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Attraction",
            id,
        }))?;
    Ok(Json(attraction))
}

/// PUT /api/v1/attractions/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAttraction>,
) -> AppResult<Json<Attraction>> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Attraction name must not be empty".to_string(),
            )));
        }
    }
    let attraction = AttractionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Attraction",
            id,
        }))?;
    Ok(Json(attraction))
}

/// DELETE /api/v1/attractions/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = AttractionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Attraction",
            id,
        }))
    }
}

// ---------------------------------------------------------------------------
// Scraping handlers
// ---------------------------------------------------------------------------

/// Request body for the page-parsing helper.
#[derive(Debug, Deserialize)]
pub struct ParseRequest {
    pub url: String,
}

/// POST /api/v1/attractions/parse
///
/// Parsed fields are returned to the client for review; nothing is
/// persisted until the client submits a regular create request.
pub async fn parse(
    State(state): State<AppState>,
    Json(input): Json<ParseRequest>,
) -> AppResult<Json<ScrapedAttraction>> {
    if !input.url.starts_with("http") {
        return Err(AppError::Core(CoreError::Validation(
            "URL must start with http".to_string(),
        )));
    }
    let scraped = wayplan_scrape::attraction::parse_attraction(&state.http, &input.url).await?;
    Ok(Json(scraped))
}

/// Query parameters for the image search helper.
#[derive(Debug, Deserialize)]
pub struct ImageSearchParams {
    pub name: String,
    pub city: String,
}

/// GET /api/v1/attractions/images?name=..&city=..
pub async fn images(
    State(state): State<AppState>,
    Query(params): Query<ImageSearchParams>,
) -> AppResult<Json<ImageSearchResult>> {
    let result =
        wayplan_scrape::images::search_images(&state.http, &params.name, &params.city).await?;
    Ok(Json(result))
}
