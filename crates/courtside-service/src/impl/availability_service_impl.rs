//! Cache-aside availability service.

use crate::availability_service::AvailabilityService;
use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::upstream::UpstreamReader;
use async_trait::async_trait;
use courtside_core::{Club, Court, CourtsideResult, Slot, SlotDate};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Lifetime of every entry written by the availability service (1 hour).
pub const CACHE_TTL: Duration = Duration::from_secs(3600);

/// Availability service component for Shaku DI.
///
/// Probes the cache first and only calls upstream on a miss, then stores the
/// upstream answer for [`CACHE_TTL`]. Concurrent misses on one key are not
/// coalesced: each calls upstream and the last write wins.
#[derive(Component)]
#[shaku(interface = AvailabilityService)]
pub struct AvailabilityServiceComponent {
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(inject)]
    upstream: Arc<dyn UpstreamReader>,
}

impl AvailabilityServiceComponent {
    /// Creates the service outside of a DI module.
    pub fn new(cache: Arc<dyn CacheInterface>, upstream: Arc<dyn UpstreamReader>) -> Self {
        Self { cache, upstream }
    }
}

#[async_trait]
impl AvailabilityService for AvailabilityServiceComponent {
    async fn get_clubs(&self, place_id: &str) -> CourtsideResult<Vec<Club>> {
        debug!("Getting clubs for place: {}", place_id);

        let key = cache_keys::clubs(place_id);
        self.cache
            .get_or_fetch(&key, Some(CACHE_TTL), || self.upstream.fetch_clubs(place_id))
            .await
    }

    async fn get_courts(&self, club_id: i64) -> CourtsideResult<Vec<Court>> {
        debug!("Getting courts for club: {}", club_id);

        let key = cache_keys::courts(club_id);
        self.cache
            .get_or_fetch(&key, Some(CACHE_TTL), || self.upstream.fetch_courts(club_id))
            .await
    }

    async fn get_available_slots(
        &self,
        club_id: i64,
        court_id: i64,
        date: SlotDate,
    ) -> CourtsideResult<Vec<Slot>> {
        debug!("Getting slots for club {} court {} on {}", club_id, court_id, date);

        let key = cache_keys::slots(club_id, court_id, date);
        self.cache
            .get_or_fetch(&key, Some(CACHE_TTL), || {
                self.upstream.fetch_slots(club_id, court_id, date)
            })
            .await
    }
}

impl std::fmt::Debug for AvailabilityServiceComponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AvailabilityServiceComponent").finish_non_exhaustive()
    }
}
