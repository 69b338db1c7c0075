//! Input arrays for the visualizer
//!
//! A [`DataSource`] draws random arrays the way the visualizer presents them:
//! values in `1..=50`, sorted ascending for the search algorithms, with a
//! target picked from the array itself. Seeding the source makes a session
//! reproducible.

use crate::algorithms::AlgorithmKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Smallest value a random array can contain
pub const MIN_VALUE: i64 = 1;
/// Largest value a random array can contain
pub const MAX_VALUE: i64 = 50;

/// The array (and, for searches, the target) a run operates on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    pub values: Vec<i64>,
    pub target: Option<i64>,
}

impl Dataset {
    pub fn new(values: Vec<i64>, target: Option<i64>) -> Self {
        Dataset { values, target }
    }

    /// Move the target to the next (or previous) distinct value of the array
    ///
    /// Wraps around at either end. A target that is not in the array jumps to
    /// the first value. Does nothing without a target or without values.
    pub fn cycle_target(&mut self, forward: bool) {
        let Some(current) = self.target else {
            return;
        };

        let mut distinct = self.values.clone();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.is_empty() {
            return;
        }

        let next = match distinct.iter().position(|&v| v == current) {
            Some(pos) if forward => distinct[(pos + 1) % distinct.len()],
            Some(pos) => distinct[(pos + distinct.len() - 1) % distinct.len()],
            None => distinct[0],
        };
        self.target = Some(next);
    }
}

/// Seedable generator of random datasets
#[derive(Debug)]
pub struct DataSource {
    rng: StdRng,
}

impl DataSource {
    /// A source seeded from `seed`, or from the OS when `None`
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        DataSource { rng }
    }

    /// `size` values in `MIN_VALUE..=MAX_VALUE`, unordered
    pub fn sort_array(&mut self, size: usize) -> Dataset {
        let values = self.random_values(size);
        Dataset::new(values, None)
    }

    /// `size` ascending values with a target drawn from among them
    pub fn search_array(&mut self, size: usize) -> Dataset {
        let mut values = self.random_values(size);
        values.sort_unstable();
        let target = if values.is_empty() {
            None
        } else {
            Some(values[self.rng.gen_range(0..values.len())])
        };
        Dataset::new(values, target)
    }

    /// Dataset appropriate for `kind`
    pub fn dataset_for(&mut self, kind: AlgorithmKind, size: usize) -> Dataset {
        match kind {
            AlgorithmKind::Search => self.search_array(size),
            AlgorithmKind::Sort => self.sort_array(size),
        }
    }

    fn random_values(&mut self, size: usize) -> Vec<i64> {
        (0..size)
            .map(|_| self.rng.gen_range(MIN_VALUE..=MAX_VALUE))
            .collect()
    }
}
