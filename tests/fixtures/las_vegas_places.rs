//! Real Las Vegas places for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap via Overpass API.

use itinerary_planner::{FoodStyle, Place};

/// A named location with coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Spot {
    pub name: &'static str,
    pub address: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Spot {
    pub const fn new(name: &'static str, address: &'static str, lat: f64, lng: f64) -> Self {
        Self {
            name,
            address,
            lat,
            lng,
        }
    }
}

// ============================================================================
// Hotels (anchors)
// ============================================================================

pub const HOTELS: &[Spot] = &[
    Spot::new("Wynn Las Vegas", "3131 Las Vegas Blvd S", 36.1263781, -115.1658180),
    Spot::new("MGM Grand", "3799 Las Vegas Blvd S", 36.1023654, -115.1688720),
    Spot::new("Bellagio", "3600 Las Vegas Blvd S", 36.1126, -115.1767),
];

// ============================================================================
// Attractions
// ============================================================================

pub const ATTRACTIONS: &[Spot] = &[
    Spot::new("Fountains of Bellagio", "3600 Las Vegas Blvd S", 36.1129, -115.1745),
    Spot::new("High Roller", "3545 Las Vegas Blvd S", 36.1175, -115.1682),
    Spot::new("Neon Museum", "770 Las Vegas Blvd N", 36.1769, -115.1353),
    Spot::new("Fremont Street Experience", "425 Fremont St", 36.1707, -115.1441),
    Spot::new("Mob Museum", "300 Stewart Ave", 36.1728, -115.1411),
    Spot::new("Stratosphere Tower", "2000 Las Vegas Blvd S", 36.1475, -115.1566),
    Spot::new("Welcome to Las Vegas Sign", "5200 Las Vegas Blvd S", 36.0820, -115.1728),
    Spot::new("Springs Preserve", "333 S Valley View Blvd", 36.1700, -115.1896),
    Spot::new("Shark Reef Aquarium", "3950 Las Vegas Blvd S", 36.0904, -115.1760),
    Spot::new("Arts District", "1025 S 1st St", 36.1590, -115.1530),
];

// ============================================================================
// Restaurants by dining style
// ============================================================================

pub const FAST_FOOD: &[Spot] = &[
    Spot::new("Earl of Sandwich Planet Hollywood", "3667 Las Vegas Blvd S", 36.1093912, -115.1720087),
    Spot::new("Denny's Mid Strip", "3475 Las Vegas Blvd S", 36.1209774, -115.1717620),
    Spot::new("Slice of Vegas Pizza", "3930 Las Vegas Blvd S", 36.0944330, -115.1759954),
    Spot::new("Roberto's Taco Shop", "4740 E Sahara Ave", 36.1452953, -115.0478347),
];

pub const LOCAL_FOOD: &[Spot] = &[
    Spot::new("Hash House A Go Go", "3535 Las Vegas Blvd S", 36.1181377, -115.1710989),
    Spot::new("Beijing Noodle No. 9", "3570 Las Vegas Blvd S", 36.1158277, -115.1758038),
    Spot::new("Original Lindo Michoacan", "2655 E Desert Inn Rd", 36.1294005, -115.1135106),
    Spot::new("Hello Tokyo", "4632 E Flamingo Rd", 36.1161627, -115.0902096),
];

pub const FINE_DINING: &[Spot] = &[
    Spot::new("L'Atelier De Joel Robuchon", "3799 Las Vegas Blvd S", 36.1026401, -115.1695890),
    Spot::new("Le Cirque", "3600 Las Vegas Blvd S", 36.1135689, -115.1749763),
    Spot::new("Spago by Wolfgang Puck", "3600 Las Vegas Blvd S", 36.1139368, -115.1741462),
    Spot::new("CUT", "3325 Las Vegas Blvd S", 36.1233879, -115.1682073),
];

// ============================================================================
// Place builders
// ============================================================================

pub fn hotel(index: usize) -> Place {
    let spot = HOTELS[index];
    Place::lodging(spot.name, spot.address).with_coords(spot.lat, spot.lng)
}

pub fn attractions() -> Vec<Place> {
    ATTRACTIONS
        .iter()
        .map(|spot| Place::tour(spot.name, spot.address).with_coords(spot.lat, spot.lng))
        .collect()
}

pub fn restaurants() -> Vec<Place> {
    let styled = [
        (FAST_FOOD, FoodStyle::Fast),
        (LOCAL_FOOD, FoodStyle::Local),
        (FINE_DINING, FoodStyle::Fine),
    ];
    styled
        .iter()
        .flat_map(|(spots, style)| {
            spots.iter().map(move |spot| {
                Place::food(spot.name, spot.address, *style).with_coords(spot.lat, spot.lng)
            })
        })
        .collect()
}

#[test]
fn test_coordinates_in_vegas_area() {
    let all = attractions().into_iter().chain(restaurants()).chain((0..HOTELS.len()).map(hotel));
    for place in all {
        let (lat, lng) = place.coords.unwrap();
        assert!(lat > 35.9 && lat < 36.3, "{} lat out of range: {}", place.name, lat);
        assert!(lng > -115.4 && lng < -114.8, "{} lng out of range: {}", place.name, lng);
    }
}
