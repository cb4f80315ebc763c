//! Test fixtures for itinerary-planner.
//!
//! Provides realistic test data and stub cost providers:
//! - Real Las Vegas hotels, attractions and restaurants (from OpenStreetMap)
//! - Providers that are predictable, failing, flaky or counting

#![allow(dead_code)]

pub mod las_vegas_places;
pub mod providers;

pub use las_vegas_places::*;
pub use providers::*;
