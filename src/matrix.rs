//! Pairwise travel-cost matrix for one day's places.

use std::collections::HashMap;

use tracing::warn;

use crate::error::ProviderError;
use crate::place::LocationKey;
use crate::traits::{CostProvider, CostRow};

/// Cost of an unreachable pair.
pub const INFINITE: f64 = f64::INFINITY;

/// Complete cost lookup for a fixed set of location keys.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    index: HashMap<LocationKey, usize>,
    costs: Vec<Vec<f64>>,
}

impl CostMatrix {
    /// Query `provider` once for `keys` and fill every ordered pair.
    ///
    /// Duplicate keys collapse to a single row. Failed or truncated rows and
    /// unreachable cells become [`INFINITE`]; only a failure of the whole
    /// call, or a wrong number of rows, is an error.
    pub fn build<P>(keys: &[LocationKey], provider: &P) -> Result<Self, ProviderError>
    where
        P: CostProvider + ?Sized,
    {
        let keys = dedupe_keys(keys);
        if keys.is_empty() {
            return Ok(Self::from_rows(&keys, Vec::new()));
        }

        let mut rows = provider.matrix_for(&keys)?;
        if rows.len() != keys.len() {
            return Err(ProviderError::Shape {
                expected: keys.len(),
                actual: rows.len(),
            });
        }

        for (key, row) in keys.iter().zip(rows.iter_mut()) {
            let actual = match row.as_ref() {
                None => {
                    warn!(origin = %key, "cost row unavailable, treating as unreachable");
                    continue;
                }
                Some(cells) => cells.len(),
            };
            if actual != keys.len() {
                warn!(
                    origin = %key,
                    expected = keys.len(),
                    actual,
                    "cost row has wrong length, treating as unreachable"
                );
                *row = None;
            }
        }

        Ok(Self::from_rows(&keys, rows))
    }

    /// Build a matrix from already-fetched rows, indexed like `keys`.
    ///
    /// Missing rows or cells are unreachable; negative or NaN costs are
    /// treated as unreachable too. The diagonal is always zero.
    pub fn from_rows(keys: &[LocationKey], rows: Vec<CostRow>) -> Self {
        let n = keys.len();
        let index = location_index(keys);
        let mut costs = vec![vec![INFINITE; n]; n];

        for (i, row) in rows.into_iter().enumerate().take(n) {
            let Some(row) = row else { continue };
            for (j, cell) in row.into_iter().enumerate().take(n) {
                costs[i][j] = match cell {
                    Some(cost) if cost >= 0.0 => cost,
                    _ => INFINITE,
                };
            }
        }
        for (i, row) in costs.iter_mut().enumerate() {
            row[i] = 0.0;
        }

        Self { index, costs }
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn contains(&self, key: &LocationKey) -> bool {
        self.index.contains_key(key)
    }

    /// Row/column of `key`.
    ///
    /// # Panics
    ///
    /// Panics if `key` was not part of the set the matrix was built from.
    pub fn index_of(&self, key: &LocationKey) -> usize {
        match self.index.get(key) {
            Some(&i) => i,
            None => panic!("location {key} is not part of this cost matrix"),
        }
    }

    /// Cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either key was not part of the build.
    pub fn cost(&self, from: &LocationKey, to: &LocationKey) -> f64 {
        self.costs[self.index_of(from)][self.index_of(to)]
    }

    /// Cost by row/column index.
    pub fn cost_at(&self, from: usize, to: usize) -> f64 {
        self.costs[from][to]
    }
}

fn dedupe_keys(keys: &[LocationKey]) -> Vec<LocationKey> {
    let mut seen = HashMap::new();
    let mut unique = Vec::new();
    for key in keys {
        if seen.contains_key(key) {
            continue;
        }
        seen.insert(key.clone(), unique.len());
        unique.push(key.clone());
    }
    unique
}

fn location_index(keys: &[LocationKey]) -> HashMap<LocationKey, usize> {
    let mut index = HashMap::new();
    for (i, key) in keys.iter().enumerate() {
        index.insert(key.clone(), i);
    }
    index
}
