//! Per-day results and the multi-day itinerary.

use serde::Serialize;

use crate::place::Place;

/// One planned day.
#[derive(Debug, Clone, Serialize)]
pub struct DailyItinerary<'a> {
    /// Zero-based day index.
    pub day: usize,
    pub anchor: Option<&'a Place>,
    /// Visiting order, anchor first when present.
    pub places: Vec<&'a Place>,
    pub tour_count: usize,
    pub food_count: usize,
    /// `false` when the cost provider failed and `places` is in draw order.
    pub optimized: bool,
    /// Cyclic travel cost of `places`; absent for unoptimized days.
    pub travel_cost: Option<f64>,
    pub restarts: usize,
}

impl<'a> DailyItinerary<'a> {
    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn names(&self) -> Vec<&'a str> {
        self.places.iter().map(|place| place.name.as_str()).collect()
    }
}

/// The full multi-day plan.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Itinerary<'a> {
    pub days: Vec<DailyItinerary<'a>>,
    pub total_tours: usize,
    pub total_food: usize,
}

impl<'a> Itinerary<'a> {
    pub fn new(days: Vec<DailyItinerary<'a>>) -> Self {
        let total_tours = days.iter().map(|day| day.tour_count).sum();
        let total_food = days.iter().map(|day| day.food_count).sum();
        Self {
            days,
            total_tours,
            total_food,
        }
    }

    /// Days whose cost provider failed.
    pub fn unoptimized_days(&self) -> impl Iterator<Item = &DailyItinerary<'a>> {
        self.days.iter().filter(|day| !day.optimized)
    }
}

/// Rotate `order` cyclically so `anchor` comes first.
///
/// The order is returned unchanged when there is no anchor or it is not in
/// the order.
pub fn rotate_to_anchor<'a>(mut order: Vec<&'a Place>, anchor: Option<&Place>) -> Vec<&'a Place> {
    let Some(anchor) = anchor else {
        return order;
    };
    let key = anchor.identity_key();
    if let Some(pos) = order.iter().position(|place| place.identity_key() == key) {
        order.rotate_left(pos);
    }
    order
}
