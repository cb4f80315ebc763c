//! Core seams of the itinerary planner.
//!
//! The planner never talks to a routing service directly. Callers inject a
//! [`CostProvider`] and the engine only consumes the rows it returns.

use crate::error::ProviderError;
use crate::place::LocationKey;

/// One origin's costs to every requested destination, in request order.
///
/// `None` for the whole row means the origin failed; `None` for a cell
/// means that pair is unreachable.
pub type CostRow = Option<Vec<Option<f64>>>;

/// Provides travel costs (seconds or distance) for a set of locations.
///
/// The returned rows are indexed by the provided location order. A failed
/// row must not abort the others; only a failure of the whole call should
/// be reported as an error.
pub trait CostProvider {
    fn matrix_for(&self, locations: &[LocationKey]) -> Result<Vec<CostRow>, ProviderError>;
}
