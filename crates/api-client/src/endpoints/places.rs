//! Nearby places
//!
//! There is no remote endpoint behind this source. [`CuratedPlaces`] serves a
//! fixed list after a short simulated network delay, nearest first.

use crate::error::ApiResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Delay [`CuratedPlaces::new`] waits before answering
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(350);

/// Anything that can list nearby places
#[async_trait]
pub trait PlaceService: Send + Sync {
    /// Places around the user, in whatever order the service prefers
    async fn nearby_places(&self) -> ApiResult<Vec<Place>>;
}

/// A place near the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Short category label such as `Coffee`
    pub category: String,
    /// One-line description
    pub description: String,
    /// Street address
    pub address: String,
    /// Contact phone number
    pub phone_number: String,
    /// Degrees north
    pub latitude: f64,
    /// Degrees east
    pub longitude: f64,
    /// Distance from the user
    pub distance_miles: f64,
    /// Rating out of 5, when known
    #[serde(default)]
    pub rating: Option<f64>,
    /// Open at the time of the request
    #[serde(default = "open_by_default")]
    pub is_open_now: bool,
}

fn open_by_default() -> bool {
    true
}

impl Place {
    /// Map position of this place
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}

/// A latitude/longitude pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Degrees north
    pub latitude: f64,
    /// Degrees east
    pub longitude: f64,
}

/// In-memory place list with simulated latency
#[derive(Debug, Clone)]
pub struct CuratedPlaces {
    places: Vec<Place>,
    latency: Duration,
}

impl Default for CuratedPlaces {
    fn default() -> Self {
        Self::new()
    }
}

impl CuratedPlaces {
    /// The built-in Seattle list with the default latency
    pub fn new() -> Self {
        Self::with_places(seattle_places()).with_latency(SIMULATED_LATENCY)
    }

    /// Serve a custom list with no latency
    pub fn with_places(places: Vec<Place>) -> Self {
        Self {
            places,
            latency: Duration::ZERO,
        }
    }

    /// Change the simulated latency
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait]
impl PlaceService for CuratedPlaces {
    async fn nearby_places(&self) -> ApiResult<Vec<Place>> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let mut places = self.places.clone();
        places.sort_by(|a, b| a.distance_miles.total_cmp(&b.distance_miles));
        Ok(places)
    }
}

#[allow(clippy::too_many_arguments)]
fn place(
    id: &str,
    name: &str,
    category: &str,
    description: &str,
    address: &str,
    phone_number: &str,
    (latitude, longitude): (f64, f64),
    distance_miles: f64,
    rating: f64,
) -> Place {
    Place {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: description.to_string(),
        address: address.to_string(),
        phone_number: phone_number.to_string(),
        latitude,
        longitude,
        distance_miles,
        rating: Some(rating),
        is_open_now: true,
    }
}

fn seattle_places() -> Vec<Place> {
    vec![
        place(
            "coffee_roasters",
            "Pier 42 Coffee Roasters",
            "Coffee",
            "Independent roastery with single-origin espresso flights and seasonal pastries.",
            "1104 Madison St, Seattle, WA",
            "+12065550142",
            (47.61095, -122.32745),
            0.3,
            4.8,
        ),
        place(
            "green_lake_park",
            "Green Lake Park",
            "Outdoors",
            "Tree-lined 2.8 mi loop trail with kayak rentals and open lawns for picnics.",
            "7201 E Green Lake Dr N, Seattle, WA",
            "+12066844070",
            (47.67978, -122.32714),
            4.9,
            4.9,
        ),
        place(
            "noodle_house",
            "Lantern Noodle House",
            "Food",
            "Hand-pulled noodles, warming broths, and shareable small plates until late.",
            "422 9th Ave N, Seattle, WA",
            "+12066559811",
            (47.62251, -122.33921),
            1.2,
            4.6,
        ),
        place(
            "makers_market",
            "South Lake Makers Market",
            "Shopping",
            "Weekend pop-up featuring rotating local artisans, florals, and vinyl DJs.",
            "901 Harrison St, Seattle, WA",
            "+12064558090",
            (47.62203, -122.33995),
            0.8,
            4.7,
        ),
        place(
            "community_climb",
            "Community Climb Gym",
            "Fitness",
            "Bouldering-focused gym with coaching sessions and a sunny cowork nook.",
            "210 Yale Ave N, Seattle, WA",
            "+12066557611",
            (47.62022, -122.32991),
            0.6,
            4.5,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curated_places_nearest_first() {
        let service = CuratedPlaces::new().with_latency(Duration::ZERO);
        let places = tokio_test::block_on(service.nearby_places()).unwrap();

        assert_eq!(places.len(), 5);
        assert_eq!(places[0].id, "coffee_roasters");
        assert_eq!(places[4].id, "green_lake_park");
        assert!(places
            .windows(2)
            .all(|w| w[0].distance_miles <= w[1].distance_miles));
    }

    #[test]
    fn test_coordinate() {
        let places = seattle_places();
        let coordinate = places[0].coordinate();
        assert_eq!(coordinate.latitude, 47.61095);
        assert_eq!(coordinate.longitude, -122.32745);
    }

    #[test]
    fn test_place_defaults_open() {
        let json = r#"{
            "id": "p",
            "name": "Pop-up",
            "category": "Food",
            "description": "",
            "address": "",
            "phoneNumber": "",
            "latitude": 0.0,
            "longitude": 0.0,
            "distanceMiles": 1.0
        }"#;

        let place: Place = serde_json::from_str(json).unwrap();
        assert!(place.is_open_now);
        assert!(place.rating.is_none());
    }
}
