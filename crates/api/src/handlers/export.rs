//! Handler for the itinerary PDF export.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use wayplan_core::error::CoreError;
use wayplan_core::types::DbId;
use wayplan_db::repositories::ItineraryRepo;
use wayplan_export::pdf::ExportedPdf;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/itineraries/{id}/export
///
/// Fetches static maps for the itinerary and renders the PDF onto the
/// server's export directory. The response carries the resulting path
/// so an operator can pick the file up.
pub async fn export_pdf(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, Json<ExportedPdf>)> {
    let itinerary = ItineraryRepo::find_with_details(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Itinerary",
            id,
        }))?;

    let exported = wayplan_export::pdf::export_itinerary(
        &state.static_maps,
        &state.config.font_dir,
        &state.config.export_dir,
        &itinerary,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(exported)))
}
