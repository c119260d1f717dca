//! Availability service trait definition.

use async_trait::async_trait;
use courtside_core::{Club, Court, CourtsideResult, Interface, Slot, SlotDate};

/// Cached read access to clubs, courts and slots.
#[async_trait]
pub trait AvailabilityService: Interface + Send + Sync {
    /// Gets the clubs of a place.
    async fn get_clubs(&self, place_id: &str) -> CourtsideResult<Vec<Club>>;

    /// Gets the courts of a club.
    async fn get_courts(&self, club_id: i64) -> CourtsideResult<Vec<Court>>;

    /// Gets the available slots of a court on a calendar date.
    async fn get_available_slots(
        &self,
        club_id: i64,
        court_id: i64,
        date: SlotDate,
    ) -> CourtsideResult<Vec<Slot>>;
}
