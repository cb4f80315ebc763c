//! Per-day tour optimization: 2-opt local search with random restarts.
//!
//! Tours are closed: the cost includes the edge from the last stop back to
//! the first, even though callers present the day as a one-way sequence.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::ProviderError;
use crate::matrix::CostMatrix;
use crate::options::OptimizerOptions;
use crate::place::Place;
use crate::traits::CostProvider;

/// Best ordering found for one day.
#[derive(Debug, Clone)]
pub struct Optimized<'a> {
    pub order: Vec<&'a Place>,
    /// Cyclic cost of `order`.
    pub cost: f64,
    pub restarts: usize,
    pub passes: usize,
}

impl<'a> Optimized<'a> {
    fn trivial(places: &[&'a Place]) -> Self {
        Self {
            order: places.to_vec(),
            cost: 0.0,
            restarts: 0,
            passes: 0,
        }
    }
}

/// Working state of one day's search.
///
/// Orderings are stored as positions into `places`; `nodes` maps each
/// position to its row in the cost matrix.
#[derive(Debug)]
pub struct Tour<'m, 'a> {
    matrix: &'m CostMatrix,
    places: Vec<&'a Place>,
    nodes: Vec<usize>,
    current: Vec<usize>,
    best: Vec<usize>,
    best_cost: f64,
    restarts: usize,
    passes: usize,
}

impl<'m, 'a> Tour<'m, 'a> {
    pub fn new(matrix: &'m CostMatrix) -> Self {
        Self {
            matrix,
            places: Vec::new(),
            nodes: Vec::new(),
            current: Vec::new(),
            best: Vec::new(),
            best_cost: f64::INFINITY,
            restarts: 0,
            passes: 0,
        }
    }

    /// Append a stop to the working ordering.
    ///
    /// # Panics
    ///
    /// Panics if the place's location is not in the matrix.
    pub fn add_place(&mut self, place: &'a Place) {
        let node = self.matrix.index_of(&place.location_key());
        self.current.push(self.places.len());
        self.places.push(place);
        self.nodes.push(node);
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn restarts(&self) -> usize {
        self.restarts
    }

    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    fn edge(&self, from: usize, to: usize) -> f64 {
        self.matrix.cost_at(self.nodes[from], self.nodes[to])
    }

    fn cost_of(&self, order: &[usize]) -> f64 {
        if order.len() < 2 {
            return 0.0;
        }
        let path: f64 = order.windows(2).map(|w| self.edge(w[0], w[1])).sum();
        path + self.edge(order[order.len() - 1], order[0])
    }

    pub fn current_cost(&self) -> f64 {
        self.cost_of(&self.current)
    }

    /// Gain of reversing positions `i+1..=j` of the current ordering.
    ///
    /// The first term is the classic 2-opt edge exchange; the second
    /// accounts for edges inside the segment changing direction, which is
    /// zero when costs are symmetric.
    fn exchange_gain(&self, i: usize, j: usize) -> f64 {
        let n = self.current.len();
        let tour = &self.current;
        let next = tour[(j + 1) % n];

        let removed = self.edge(tour[i], tour[i + 1]) + self.edge(tour[j], next);
        let added = self.edge(tour[i], tour[j]) + self.edge(tour[i + 1], next);

        let mut reversal = 0.0;
        for k in i + 1..j {
            let forward = self.edge(tour[k], tour[k + 1]);
            let backward = self.edge(tour[k + 1], tour[k]);
            if forward != backward {
                reversal += forward - backward;
            }
        }

        removed - added + reversal
    }

    /// One improvement pass over every position pair, applying each strictly
    /// improving exchange immediately. Returns the total gain.
    pub fn improve(&mut self) -> f64 {
        let n = self.current.len();
        if n < 3 {
            return 0.0;
        }

        let mut improvement = 0.0;
        for i in 0..n - 1 {
            for j in i + 1..n {
                let gain = self.exchange_gain(i, j);
                // NaN (infinite on both sides) is never an improvement.
                if gain > 0.0 {
                    self.current[i + 1..=j].reverse();
                    improvement += gain;
                }
            }
        }
        improvement
    }

    fn record_current(&mut self) {
        let cost = self.current_cost();
        if self.best.is_empty() || cost < self.best_cost {
            self.best_cost = cost;
            self.best = self.current.clone();
        }
    }

    /// Run one improvement pass and, once it converges, snapshot the result
    /// and restart from a random ordering. Returns `true` when the restart
    /// budget is exhausted.
    pub fn execute_step<R>(&mut self, options: &OptimizerOptions, rng: &mut R) -> bool
    where
        R: Rng + ?Sized,
    {
        self.passes += 1;
        let gain = self.improve();
        if gain > options.improvement_threshold {
            debug!(pass = self.passes, gain, "tour still improving");
            return false;
        }

        self.record_current();

        if self.restarts < options.max_restarts {
            self.restarts += 1;
            self.current = (0..self.places.len()).collect();
            self.current.shuffle(rng);
            debug!(
                restart = self.restarts,
                best_cost = self.best_cost,
                "restarting from random ordering"
            );
            return false;
        }
        true
    }

    /// Accept the best ordering seen, including the current one.
    pub fn finish(mut self) -> Optimized<'a> {
        self.record_current();
        Optimized {
            order: self.best.iter().map(|&pos| self.places[pos]).collect(),
            cost: self.best_cost,
            restarts: self.restarts,
            passes: self.passes,
        }
    }
}

/// Cyclic cost of visiting `places` in order.
///
/// # Panics
///
/// Panics if a place's location is not in the matrix.
pub fn cyclic_cost(places: &[&Place], matrix: &CostMatrix) -> f64 {
    if places.len() < 2 {
        return 0.0;
    }
    let keys: Vec<_> = places.iter().map(|place| place.location_key()).collect();
    let path: f64 = keys.windows(2).map(|w| matrix.cost(&w[0], &w[1])).sum();
    path + matrix.cost(&keys[keys.len() - 1], &keys[0])
}

/// Order `places` to minimize cyclic travel cost.
///
/// Runs improvement passes until the restart budget is spent or
/// `max_passes` passes have run. Zero or one place is returned as is
/// without touching the matrix.
pub fn optimize<'a, R>(
    places: &[&'a Place],
    matrix: &CostMatrix,
    options: &OptimizerOptions,
    rng: &mut R,
) -> Optimized<'a>
where
    R: Rng + ?Sized,
{
    if places.len() <= 1 {
        return Optimized::trivial(places);
    }

    let mut tour = Tour::new(matrix);
    for &place in places {
        tour.add_place(place);
    }

    for _ in 0..options.max_passes {
        if tour.execute_step(options, rng) {
            break;
        }
    }

    tour.finish()
}

/// Build the day's cost matrix through `provider` and optimize.
///
/// Days with fewer than two places never reach the provider.
pub fn optimize_day<'a, P, R>(
    places: &[&'a Place],
    provider: &P,
    options: &OptimizerOptions,
    rng: &mut R,
) -> Result<Optimized<'a>, ProviderError>
where
    P: CostProvider + ?Sized,
    R: Rng + ?Sized,
{
    if places.len() <= 1 {
        return Ok(Optimized::trivial(places));
    }

    let keys: Vec<_> = places.iter().map(|place| place.location_key()).collect();
    let matrix = CostMatrix::build(&keys, provider)?;
    Ok(optimize(places, &matrix, options, rng))
}
