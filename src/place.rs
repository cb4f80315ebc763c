//! Candidate places and their identity/location keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad category of a place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Tour,
    Lodging,
    Other,
}

/// Dining style of a food place, used only to split the food budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodStyle {
    Fast,
    Local,
    Fine,
}

/// A candidate place. Never mutated once built by candidate retrieval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub address: String,
    pub category: Category,
    /// (lat, lng)
    pub coords: Option<(f64, f64)>,
    pub food_style: Option<FoodStyle>,
    /// Forced by the traveller; wins over discovered duplicates.
    #[serde(default)]
    pub must_visit: bool,
}

impl Place {
    pub fn new(name: impl Into<String>, address: impl Into<String>, category: Category) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            category,
            coords: None,
            food_style: None,
            must_visit: false,
        }
    }

    pub fn tour(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::new(name, address, Category::Tour)
    }

    pub fn food(name: impl Into<String>, address: impl Into<String>, style: FoodStyle) -> Self {
        Self::new(name, address, Category::Food).with_food_style(style)
    }

    pub fn lodging(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self::new(name, address, Category::Lodging)
    }

    pub fn with_coords(mut self, lat: f64, lng: f64) -> Self {
        self.coords = Some((lat, lng));
        self
    }

    pub fn with_food_style(mut self, style: FoodStyle) -> Self {
        self.food_style = Some(style);
        self
    }

    pub fn must_visit(mut self) -> Self {
        self.must_visit = true;
        self
    }

    /// Deduplication key: lowercased name and address.
    pub fn identity_key(&self) -> IdentityKey {
        IdentityKey {
            name: self.name.trim().to_lowercase(),
            address: self.address.trim().to_lowercase(),
        }
    }

    pub fn same_identity(&self, other: &Place) -> bool {
        self.identity_key() == other.identity_key()
    }

    /// Key handed to cost providers.
    pub fn location_key(&self) -> LocationKey {
        match self.coords {
            Some(coords) => LocationKey::from_coords(coords),
            None => LocationKey(self.address.trim().to_lowercase()),
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.name, self.address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdentityKey {
    name: String,
    address: String,
}

/// Provider-facing location key: `"lat,lng"` with six decimals when the
/// place has coordinates, otherwise its normalized address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocationKey(String);

impl LocationKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn from_coords(location: (f64, f64)) -> Self {
        Self(format!("{:.6},{:.6}", location.0, location.1))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse the key back into (lat, lng), if it has the coordinate form.
    pub fn coords(&self) -> Option<(f64, f64)> {
        let (lat, lng) = self.0.split_once(',')?;
        let lat = lat.trim().parse::<f64>().ok()?;
        let lng = lng.trim().parse::<f64>().ok()?;
        let valid = (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng);
        valid.then_some((lat, lng))
    }
}

impl fmt::Display for LocationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
