//! Haversine cost provider (fallback when no routing service is available).
//!
//! Uses great-circle distance to estimate travel time.
//! Less accurate than OSRM (ignores roads) but always available.

use crate::error::ProviderError;
use crate::options::TravelMode;
use crate::place::LocationKey;
use crate::traits::{CostProvider, CostRow};

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine-based cost provider.
///
/// Estimates travel time in seconds from straight-line distance and an
/// assumed speed. Locations whose key carries no coordinates cannot be
/// estimated: their own row fails and every pair leading to them is
/// unreachable.
#[derive(Debug, Clone)]
pub struct HaversineMatrix {
    /// Assumed average speed in km/h.
    pub speed_kmh: f64,
}

impl Default for HaversineMatrix {
    fn default() -> Self {
        Self::for_mode(TravelMode::Driving)
    }
}

impl HaversineMatrix {
    pub fn new(speed_kmh: f64) -> Self {
        Self { speed_kmh }
    }

    pub fn for_mode(mode: TravelMode) -> Self {
        Self::new(mode.average_speed_kmh())
    }

    /// Great-circle distance in kilometers between two `(lat, lng)` points.
    pub fn haversine_km((lat1, lng1): (f64, f64), (lat2, lng2): (f64, f64)) -> f64 {
        let half_dlat = (lat2 - lat1).to_radians() / 2.0;
        let half_dlng = (lng2 - lng1).to_radians() / 2.0;
        let h = half_dlat.sin().powi(2)
            + lat1.to_radians().cos() * lat2.to_radians().cos() * half_dlng.sin().powi(2);

        2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
    }

    /// Estimated travel time in whole seconds between two points.
    fn seconds_between(&self, from: (f64, f64), to: (f64, f64)) -> f64 {
        (Self::haversine_km(from, to) / self.speed_kmh * 3600.0).round()
    }
}

impl CostProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[LocationKey]) -> Result<Vec<CostRow>, ProviderError> {
        let coords: Vec<Option<(f64, f64)>> = locations.iter().map(LocationKey::coords).collect();

        let rows: Vec<CostRow> = coords
            .iter()
            .map(|from| -> CostRow {
                let from = (*from)?;
                let row = coords
                    .iter()
                    .map(|to| to.map(|to| self.seconds_between(from, to)))
                    .collect();
                Some(row)
            })
            .collect();

        Ok(rows)
    }
}
