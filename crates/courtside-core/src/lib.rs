//! # Courtside Core
//!
//! Core types and error definitions shared by every Courtside crate.
//! Domain records here are read-only projections of the upstream
//! availability API and are cached verbatim.

pub mod domain;
pub mod error;
pub mod result;

pub use domain::*;
pub use error::*;
pub use result::*;

// Re-export shaku for dependency injection
pub use shaku::{module, HasComponent, Interface};
