//! Daily allocation of tour and food candidates.
//!
//! Both pools are deduplicated, food is split across dining styles by
//! percentage, and each day draws its stops from the front of the pools.
//! Days are then optimized independently, in parallel.

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::itinerary::{DailyItinerary, Itinerary, rotate_to_anchor};
use crate::options::{FoodMix, OptimizerOptions, PlanOptions};
use crate::place::{FoodStyle, IdentityKey, Place};
use crate::tour::optimize_day;
use crate::traits::CostProvider;

/// Food slots per dining style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FoodQuota {
    pub fast: usize,
    pub local: usize,
    pub fine: usize,
}

impl FoodQuota {
    pub fn total(&self) -> usize {
        self.fast + self.local + self.fine
    }
}

/// A day's stops before optimization.
#[derive(Debug, Clone)]
struct DayDraft<'a> {
    day: usize,
    places: Vec<&'a Place>,
    tour_count: usize,
    food_count: usize,
    seed: u64,
}

/// Plan `num_days` days from the tour and food pools.
///
/// Fails only on invalid configuration. A day whose cost matrix cannot be
/// built keeps its draw order and is marked unoptimized; running out of
/// candidates just yields smaller days.
pub fn allocate<'a, P>(
    tour_pool: &'a [Place],
    food_pool: &'a [Place],
    num_days: usize,
    food_mix: FoodMix,
    anchor: Option<&'a Place>,
    provider: &P,
    options: &PlanOptions,
) -> Result<Itinerary<'a>>
where
    P: CostProvider + Sync + ?Sized,
{
    food_mix.validate()?;
    options.validate()?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut excluded: HashSet<IdentityKey> = anchor.map(Place::identity_key).into_iter().collect();
    let tours = dedupe(tour_pool, &excluded);
    excluded.extend(tours.iter().map(|place| place.identity_key()));
    let food = dedupe(food_pool, &excluded);

    if num_days == 0 {
        return Ok(Itinerary::default());
    }

    let quota = split_food(&food_mix, options.meals_per_day * num_days);
    let food = select_food(&food, quota, &mut rng);
    debug!(
        tours = tours.len(),
        food = food.len(),
        fast = quota.fast,
        local = quota.local,
        fine = quota.fine,
        "candidate pools ready"
    );

    let drafts = draw_days(&tours, &food, num_days, anchor, options, &mut rng);

    let days: Vec<DailyItinerary<'a>> = drafts
        .into_par_iter()
        .map(|draft| plan_day(draft, anchor, provider, &options.optimizer))
        .collect();

    let itinerary = Itinerary::new(days);
    info!(
        days = itinerary.days.len(),
        total_tours = itinerary.total_tours,
        total_food = itinerary.total_food,
        unoptimized = itinerary.unoptimized_days().count(),
        "itinerary planned"
    );
    Ok(itinerary)
}

/// Drop duplicates by identity key, and anything in `excluded`.
///
/// A must-visit duplicate replaces a discovered one in place; must-visit
/// places then move to the front so they are drawn first.
pub fn dedupe<'a>(pool: &'a [Place], excluded: &HashSet<IdentityKey>) -> Vec<&'a Place> {
    let mut seen: HashMap<IdentityKey, usize> = HashMap::new();
    let mut unique: Vec<&Place> = Vec::new();

    for place in pool {
        let key = place.identity_key();
        if excluded.contains(&key) {
            continue;
        }
        match seen.get(&key) {
            Some(&pos) => {
                if place.must_visit && !unique[pos].must_visit {
                    unique[pos] = place;
                }
            }
            None => {
                seen.insert(key, unique.len());
                unique.push(place);
            }
        }
    }

    let (mut forced, discovered): (Vec<_>, Vec<_>) =
        unique.into_iter().partition(|place| place.must_visit);
    forced.extend(discovered);
    forced
}

/// Split `total_slots` across dining styles.
///
/// Each style gets the floor of its share; the rounding shortfall goes to
/// fine dining.
pub fn split_food(mix: &FoodMix, total_slots: usize) -> FoodQuota {
    let share = |percent: f64| (percent * total_slots as f64 / 100.0).floor() as usize;

    let fast = share(mix.fast);
    let local = share(mix.local);
    let fine = share(mix.fine);
    let shortfall = total_slots.saturating_sub(fast + local + fine);

    FoodQuota {
        fast,
        local,
        fine: fine + shortfall,
    }
}

fn style_of(place: &Place) -> FoodStyle {
    place.food_style.unwrap_or(FoodStyle::Local)
}

/// Take each style's quota from the front of `food`, capped by what is
/// available, then shuffle so style order does not follow day order.
fn select_food<'a, R>(food: &[&'a Place], quota: FoodQuota, rng: &mut R) -> Vec<&'a Place>
where
    R: Rng + ?Sized,
{
    let mut selected = Vec::with_capacity(quota.total());
    for (style, count) in [
        (FoodStyle::Fast, quota.fast),
        (FoodStyle::Local, quota.local),
        (FoodStyle::Fine, quota.fine),
    ] {
        selected.extend(
            food.iter()
                .copied()
                .filter(|place| style_of(place) == style)
                .take(count),
        );
    }
    selected.shuffle(rng);
    selected
}

fn tours_for_day<R>(remaining: usize, options: &PlanOptions, rng: &mut R) -> usize
where
    R: Rng + ?Sized,
{
    if remaining < options.min_tours_per_day {
        return remaining;
    }
    rng.gen_range(options.min_tours_per_day..=options.max_tours_per_day)
        .min(remaining)
}

fn draw_days<'a, R>(
    tours: &[&'a Place],
    food: &[&'a Place],
    num_days: usize,
    anchor: Option<&'a Place>,
    options: &PlanOptions,
    rng: &mut R,
) -> Vec<DayDraft<'a>>
where
    R: RngCore + ?Sized,
{
    let mut tours_left = tours;
    let mut food_left = food;
    let mut drafts = Vec::with_capacity(num_days);

    for day in 0..num_days {
        let mut places: Vec<&Place> = anchor.into_iter().collect();

        let tour_count = tours_for_day(tours_left.len(), options, rng);
        let (taken, rest) = tours_left.split_at(tour_count);
        places.extend_from_slice(taken);
        tours_left = rest;

        let food_count = options.meals_per_day.min(food_left.len());
        let (taken, rest) = food_left.split_at(food_count);
        places.extend_from_slice(taken);
        food_left = rest;

        drafts.push(DayDraft {
            day,
            places,
            tour_count,
            food_count,
            seed: rng.next_u64(),
        });
    }

    drafts
}

fn plan_day<'a, P>(
    draft: DayDraft<'a>,
    anchor: Option<&'a Place>,
    provider: &P,
    options: &OptimizerOptions,
) -> DailyItinerary<'a>
where
    P: CostProvider + ?Sized,
{
    let mut rng = StdRng::seed_from_u64(draft.seed);

    let (places, optimized, travel_cost, restarts) =
        match optimize_day(&draft.places, provider, options, &mut rng) {
            Ok(result) => (
                rotate_to_anchor(result.order, anchor),
                true,
                Some(result.cost),
                result.restarts,
            ),
            Err(err) => {
                warn!(day = draft.day, error = %err, "cost provider failed, keeping draw order");
                (draft.places, false, None, 0)
            }
        };

    info!(
        day = draft.day,
        stops = places.len(),
        tours = draft.tour_count,
        food = draft.food_count,
        optimized,
        "day planned"
    );

    DailyItinerary {
        day: draft.day,
        anchor,
        places,
        tour_count: draft.tour_count,
        food_count: draft.food_count,
        optimized,
        travel_cost,
        restarts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_food_example() {
        let quota = split_food(&FoodMix::new(50.0, 30.0, 20.0), 6);
        assert_eq!(
            quota,
            FoodQuota {
                fast: 3,
                local: 1,
                fine: 2
            }
        );
        assert_eq!(quota.total(), 6);
    }

    #[test]
    fn test_split_food_all_one_style() {
        let quota = split_food(&FoodMix::new(0.0, 100.0, 0.0), 9);
        assert_eq!(quota.local, 9);
        assert_eq!(quota.total(), 9);
    }

    #[test]
    fn test_split_food_thirds_shortfall_goes_to_fine() {
        let third = 100.0 / 3.0;
        let quota = split_food(&FoodMix::new(third, third, 100.0 - 2.0 * third), 3);
        assert_eq!(quota.total(), 3);
        assert!(quota.fine >= 1);
    }

    #[test]
    fn test_dedupe_prefers_must_visit() {
        let pool = vec![
            Place::tour("Neon Museum", "770 Las Vegas Blvd N"),
            Place::tour("Hoover Dam", "NV-172"),
            Place::tour("neon museum", "770 las vegas blvd n").must_visit(),
        ];
        let unique = dedupe(&pool, &HashSet::new());

        assert_eq!(unique.len(), 2);
        assert!(unique[0].must_visit);
        assert_eq!(unique[0].name, "neon museum");
        assert_eq!(unique[1].name, "Hoover Dam");
    }

    #[test]
    fn test_dedupe_drops_excluded() {
        let hotel = Place::lodging("Bellagio", "3600 S Las Vegas Blvd");
        let pool = vec![
            Place::tour("Bellagio", "3600 S Las Vegas Blvd"),
            Place::tour("Fremont Street", "Fremont St"),
        ];
        let excluded = HashSet::from([hotel.identity_key()]);
        let unique = dedupe(&pool, &excluded);

        assert_eq!(unique.len(), 1);
        assert_eq!(unique[0].name, "Fremont Street");
    }

    #[test]
    fn test_select_food_caps_by_availability() {
        let pool = vec![
            Place::food("In-N-Out", "1", FoodStyle::Fast),
            Place::food("Lotus of Siam", "2", FoodStyle::Local),
            Place::food("Joel Robuchon", "3", FoodStyle::Fine),
        ];
        let refs: Vec<&Place> = pool.iter().collect();
        let mut rng = StdRng::seed_from_u64(9);

        let selected = select_food(
            &refs,
            FoodQuota {
                fast: 3,
                local: 1,
                fine: 2,
            },
            &mut rng,
        );
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_tours_for_day_bounds() {
        let options = PlanOptions::default();
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(tours_for_day(0, &options, &mut rng), 0);
        assert_eq!(tours_for_day(1, &options, &mut rng), 1);
        assert_eq!(tours_for_day(2, &options, &mut rng), 2);
        for _ in 0..50 {
            let count = tours_for_day(10, &options, &mut rng);
            assert!((2..=3).contains(&count));
        }
    }
}
