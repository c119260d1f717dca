//! Availability controller: clubs, courts and slots.

use crate::{
    extractors::{ApiPath, ApiQuery},
    responses::{ok, ApiResult, AppError},
    state::AppState,
};
use axum::{extract::State, routing::get, Router};
use chrono::NaiveDate;
use courtside_core::{Club, Court, CourtsideError, Slot};
use serde::Deserialize;
use tracing::debug;

/// Creates the availability router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/clubs", get(list_clubs))
        .route("/clubs/:club_id/courts", get(list_courts))
        .route("/clubs/:club_id/courts/:court_id/slots", get(list_slots))
}

/// Query parameters for the club listing.
#[derive(Debug, Deserialize)]
pub struct ClubsQuery {
    #[serde(rename = "placeId")]
    pub place_id: String,
}

/// Query parameters for the slot listing.
#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    pub date: NaiveDate,
}

/// List the clubs of a place.
async fn list_clubs(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ClubsQuery>,
) -> ApiResult<Vec<Club>> {
    debug!("List clubs request: {}", query.place_id);

    // Only blank values are rejected; the id is forwarded and keyed as sent.
    if query.place_id.trim().is_empty() {
        return Err(AppError(CourtsideError::validation("placeId must not be empty")));
    }

    let clubs = state.availability_service.get_clubs(&query.place_id).await?;
    ok(clubs)
}

/// List the courts of a club.
async fn list_courts(
    State(state): State<AppState>,
    ApiPath(club_id): ApiPath<i64>,
) -> ApiResult<Vec<Court>> {
    debug!("List courts request: {}", club_id);

    let courts = state.availability_service.get_courts(club_id).await?;
    ok(courts)
}

/// List the available slots of a court on a date.
async fn list_slots(
    State(state): State<AppState>,
    ApiPath((club_id, court_id)): ApiPath<(i64, i64)>,
    ApiQuery(query): ApiQuery<SlotsQuery>,
) -> ApiResult<Vec<Slot>> {
    debug!("List slots request: club {} court {} on {}", club_id, court_id, query.date);

    let slots = state
        .availability_service
        .get_available_slots(club_id, court_id, query.date.into())
        .await?;
    ok(slots)
}
