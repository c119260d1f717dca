//! Read-only projections of upstream availability data.
//!
//! Records wrap the JSON value the upstream sent. Nothing in a record is
//! validated or normalised, so a cached record re-serializes to exactly what
//! the upstream returned. Accessors read well-known attributes when present.

mod club;
mod court;
mod slot;

pub use club::Club;
pub use court::Court;
pub use slot::{Slot, SlotDate};
