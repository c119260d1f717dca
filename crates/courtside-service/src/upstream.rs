//! Upstream availability API contract.

use async_trait::async_trait;
use courtside_core::{Club, Court, CourtsideResult, Slot, SlotDate};
use shaku::Interface;

/// Read access to the authoritative availability API.
///
/// Implementations report transport, status and body faults as errors and
/// never retry.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UpstreamReader: Interface + Send + Sync {
    /// Lists the clubs registered for a place.
    async fn fetch_clubs(&self, place_id: &str) -> CourtsideResult<Vec<Club>>;

    /// Lists the courts of a club.
    async fn fetch_courts(&self, club_id: i64) -> CourtsideResult<Vec<Court>>;

    /// Lists the available slots of a court on a date.
    async fn fetch_slots(&self, club_id: i64, court_id: i64, date: SlotDate) -> CourtsideResult<Vec<Slot>>;
}
