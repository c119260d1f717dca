//! Cache key generators.
//!
//! Keys are derived only from query parameters, so identical queries always
//! share one entry. Existing deployments read these keys, so the format has
//! no namespace prefix.

use courtside_core::SlotDate;

/// Key for the clubs listed under a place.
#[must_use]
pub fn clubs(place_id: &str) -> String {
    format!("clubs:{}", place_id)
}

/// Key for the courts of a club.
#[must_use]
pub fn courts(club_id: i64) -> String {
    format!("courts:{}", club_id)
}

/// Key for the available slots of a court on one calendar date.
#[must_use]
pub fn slots(club_id: i64, court_id: i64, date: SlotDate) -> String {
    format!("slots:{}:{}:{}", club_id, court_id, date)
}
