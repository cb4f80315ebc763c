//! itinerary-planner core
//!
//! Splits candidate places across days and orders each day's visits to keep
//! travel cost low. Travel costs come from an injected provider.

pub mod allocator;
pub mod error;
pub mod haversine;
pub mod itinerary;
pub mod matrix;
pub mod options;
pub mod osrm;
pub mod place;
pub mod tour;
pub mod traits;

pub use allocator::allocate;
pub use error::{PlanError, ProviderError, Result};
pub use itinerary::{DailyItinerary, Itinerary};
pub use matrix::CostMatrix;
pub use options::{FoodMix, OptimizerOptions, PlanOptions, TravelMode};
pub use place::{Category, FoodStyle, Place};
pub use tour::optimize;
pub use traits::CostProvider;
