use super::{finish, Repository};
use crate::endpoints::{CuratedPlaces, Place, PlaceService};
use crate::error::ApiResult;
use async_trait::async_trait;
use samplekit_telemetry::Timer;

/// Nearby places
pub struct PlaceRepository<S = CuratedPlaces> {
    service: S,
}

impl<S: PlaceService> PlaceRepository<S> {
    /// Repository over any place service
    pub fn new(service: S) -> Self {
        Self { service }
    }
}

impl Default for PlaceRepository<CuratedPlaces> {
    fn default() -> Self {
        Self::new(CuratedPlaces::new())
    }
}

#[async_trait]
impl<S: PlaceService> Repository for PlaceRepository<S> {
    type Entity = Place;
    const SOURCE: &'static str = "places";

    async fn fetch(&self) -> ApiResult<Vec<Place>> {
        let timer = Timer::start(Self::SOURCE);
        let result = self.service.nearby_places().await;
        finish(Self::SOURCE, timer, result)
    }
}
