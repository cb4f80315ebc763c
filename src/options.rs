//! Planner configuration.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Tolerance on the food percentage sum.
const PERCENT_EPSILON: f64 = 1e-6;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OptimizerOptions {
    /// Random restarts allowed after the first local optimum.
    pub max_restarts: usize,
    /// A pass gaining more than this is still improving.
    pub improvement_threshold: f64,
    /// Hard cap on improvement passes per day.
    pub max_passes: usize,
}

impl Default for OptimizerOptions {
    fn default() -> Self {
        Self {
            max_restarts: 10,
            improvement_threshold: 0.1,
            max_passes: 50,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanOptions {
    pub optimizer: OptimizerOptions,
    /// Food slots per day.
    pub meals_per_day: usize,
    pub min_tours_per_day: usize,
    pub max_tours_per_day: usize,
    /// Seed for every random choice of a run. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            optimizer: OptimizerOptions::default(),
            meals_per_day: 3,
            min_tours_per_day: 2,
            max_tours_per_day: 3,
            seed: None,
        }
    }
}

impl PlanOptions {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_tours_per_day > self.max_tours_per_day {
            return Err(PlanError::invalid_options(format!(
                "min_tours_per_day ({}) exceeds max_tours_per_day ({})",
                self.min_tours_per_day, self.max_tours_per_day
            )));
        }
        let threshold = self.optimizer.improvement_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(PlanError::invalid_options(format!(
                "improvement_threshold must be a non-negative number, got {threshold}"
            )));
        }
        Ok(())
    }
}

/// Percentages of food slots per dining style; must sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodMix {
    pub fast: f64,
    pub local: f64,
    pub fine: f64,
}

impl FoodMix {
    pub fn new(fast: f64, local: f64, fine: f64) -> Self {
        Self { fast, local, fine }
    }

    pub fn validate(&self) -> Result<()> {
        let parts = [self.fast, self.local, self.fine];
        let sane = parts.iter().all(|p| p.is_finite() && *p >= 0.0);
        let sum: f64 = parts.iter().sum();
        if !sane || (sum - 100.0).abs() > PERCENT_EPSILON {
            return Err(PlanError::InvalidPercentages {
                fast: self.fast,
                local: self.local,
                fine: self.fine,
            });
        }
        Ok(())
    }
}

/// How the traveller gets around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TravelMode {
    /// Rental car.
    Driving,
    #[default]
    Transit,
    Walking,
}

impl TravelMode {
    pub fn from_rent_car(rent_car: bool) -> Self {
        if rent_car {
            TravelMode::Driving
        } else {
            TravelMode::Transit
        }
    }

    /// OSRM routing profile. OSRM has no transit profile; road times are the
    /// closest estimate.
    pub fn osrm_profile(self) -> &'static str {
        match self {
            TravelMode::Driving | TravelMode::Transit => "car",
            TravelMode::Walking => "foot",
        }
    }

    /// Average speed assumed by straight-line estimates.
    pub fn average_speed_kmh(self) -> f64 {
        match self {
            TravelMode::Driving => 40.0,
            TravelMode::Transit => 25.0,
            TravelMode::Walking => 5.0,
        }
    }
}
