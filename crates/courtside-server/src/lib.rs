//! # Courtside Server Library
//!
//! Dependency injection wiring and startup utilities for the gateway binary.

pub mod di;
pub mod startup;
