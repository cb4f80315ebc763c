//! Stub cost providers.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use itinerary_planner::error::ProviderError;
use itinerary_planner::place::LocationKey;
use itinerary_planner::traits::{CostProvider, CostRow};

/// Manhattan distance matrix (simple, predictable).
///
/// 1 degree = 60 cost units. Keys without coordinates fail the whole call.
pub struct ManhattanMatrix;

impl CostProvider for ManhattanMatrix {
    fn matrix_for(&self, locations: &[LocationKey]) -> Result<Vec<CostRow>, ProviderError> {
        let coords = locations
            .iter()
            .map(|key| {
                key.coords()
                    .ok_or_else(|| ProviderError::MissingCoordinates(key.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(coords
            .iter()
            .map(|from| {
                Some(
                    coords
                        .iter()
                        .map(|to| Some(((from.0 - to.0).abs() + (from.1 - to.1).abs()) * 60.0))
                        .collect(),
                )
            })
            .collect())
    }
}

/// Always fails, like an unreachable routing service.
pub struct FailingProvider;

impl CostProvider for FailingProvider {
    fn matrix_for(&self, _locations: &[LocationKey]) -> Result<Vec<CostRow>, ProviderError> {
        Err(ProviderError::service("NoRoute", "service unavailable"))
    }
}

/// Fails any request that includes one of the poisoned keys.
pub struct FlakyProvider {
    pub poisoned: HashSet<LocationKey>,
}

impl CostProvider for FlakyProvider {
    fn matrix_for(&self, locations: &[LocationKey]) -> Result<Vec<CostRow>, ProviderError> {
        if locations.iter().any(|key| self.poisoned.contains(key)) {
            return Err(ProviderError::service("TooBig", "request rejected"));
        }
        ManhattanMatrix.matrix_for(locations)
    }
}

/// Wraps a provider and counts calls.
pub struct CountingProvider<P> {
    pub inner: P,
    pub calls: AtomicUsize,
}

impl<P> CountingProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<P: CostProvider> CostProvider for CountingProvider<P> {
    fn matrix_for(&self, locations: &[LocationKey]) -> Result<Vec<CostRow>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.matrix_for(locations)
    }
}
