//! Service implementations.

mod availability_service_impl;

pub use availability_service_impl::{AvailabilityServiceComponent, CACHE_TTL};
