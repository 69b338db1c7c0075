//! The six visualized algorithms and their step generators
//!
//! - [`search`]: linear, binary and exponential search
//! - [`sort`]: bubble, selection and insertion sort
//! - [`errors`]: precondition failures raised before any step is produced
//!
//! [`Algorithm`] is the closed set of identifiers; [`Algorithm::generate`]
//! validates the input for the chosen algorithm and returns the complete
//! [`Trace`] in one synchronous call.

pub mod errors;
pub mod search;
pub mod sort;

use crate::step::{Step, Trace};
use errors::GeneratorError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Whether an algorithm looks for a target or reorders the array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmKind {
    Search,
    Sort,
}

/// Every algorithm the visualizer can trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Linear,
    Binary,
    Exponential,
    Bubble,
    Selection,
    Insertion,
}

/// Descriptive text shown next to the visualization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub title: &'static str,
    pub description: &'static str,
    pub time_complexity: &'static str,
    pub space_complexity: &'static str,
    pub best_case: &'static str,
    pub worst_case: &'static str,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Linear,
        Algorithm::Binary,
        Algorithm::Exponential,
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
    ];

    pub fn kind(self) -> AlgorithmKind {
        match self {
            Algorithm::Linear | Algorithm::Binary | Algorithm::Exponential => {
                AlgorithmKind::Search
            }
            Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion => AlgorithmKind::Sort,
        }
    }

    pub fn is_search(self) -> bool {
        self.kind() == AlgorithmKind::Search
    }

    /// Next algorithm in the order of [`Algorithm::ALL`], wrapping around
    pub fn next(self) -> Self {
        let pos = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(pos + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in the order of [`Algorithm::ALL`], wrapping around
    pub fn prev(self) -> Self {
        let pos = Self::ALL.iter().position(|&a| a == self).unwrap_or(0);
        Self::ALL[(pos + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            Algorithm::Linear => AlgorithmInfo {
                title: "Linear Search",
                description: "Sequentially checks each element of the list until a match is found or the whole list has been searched.",
                time_complexity: "O(n)",
                space_complexity: "O(1)",
                best_case: "O(1)",
                worst_case: "O(n)",
            },
            Algorithm::Binary => AlgorithmInfo {
                title: "Binary Search",
                description: "Finds the position of a target value within a sorted array by repeatedly dividing the search interval in half.",
                time_complexity: "O(log n)",
                space_complexity: "O(1)",
                best_case: "O(1)",
                worst_case: "O(log n)",
            },
            Algorithm::Exponential => AlgorithmInfo {
                title: "Exponential Search",
                description: "Finds a range where the target might be and then uses binary search within that range.",
                time_complexity: "O(log n)",
                space_complexity: "O(1)",
                best_case: "O(1)",
                worst_case: "O(log n)",
            },
            Algorithm::Bubble => AlgorithmInfo {
                title: "Bubble Sort",
                description: "Repeatedly steps through the list, compares adjacent elements and swaps them if they are in the wrong order.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
                best_case: "O(n)",
                worst_case: "O(n²)",
            },
            Algorithm::Selection => AlgorithmInfo {
                title: "Selection Sort",
                description: "Divides the input list into a sorted and an unsorted region, and repeatedly selects the smallest element from the unsorted region and moves it to the sorted region.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
                best_case: "O(n²)",
                worst_case: "O(n²)",
            },
            Algorithm::Insertion => AlgorithmInfo {
                title: "Insertion Sort",
                description: "Builds the sorted array one item at a time by comparing each new element to the already-sorted elements and inserting it into the correct position.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
                best_case: "O(n)",
                worst_case: "O(n²)",
            },
        }
    }

    /// Compute the full trace of this algorithm over `values`
    ///
    /// Search algorithms require `target`; sort algorithms ignore it. The
    /// caller's slice is never modified.
    pub fn generate(self, values: &[i64], target: Option<i64>) -> Result<Trace, GeneratorError> {
        let target_for = |algorithm| target.ok_or(GeneratorError::MissingTarget { algorithm });

        let steps: Vec<Step> = match self {
            Algorithm::Linear => into_steps(search::linear(values, target_for(self)?)?),
            Algorithm::Binary => into_steps(search::binary(values, target_for(self)?)?),
            Algorithm::Exponential => into_steps(search::exponential(values, target_for(self)?)?),
            Algorithm::Bubble => into_steps(sort::bubble(values)?),
            Algorithm::Selection => into_steps(sort::selection(values)?),
            Algorithm::Insertion => into_steps(sort::insertion(values)?),
        };

        tracing::debug!(
            algorithm = %self,
            len = values.len(),
            steps = steps.len(),
            "generated trace"
        );

        let target = if self.is_search() { target } else { None };
        Ok(Trace::new(self, values.to_vec(), target, steps))
    }
}

fn into_steps<S: Into<Step>>(steps: Vec<S>) -> Vec<Step> {
    steps.into_iter().map(Into::into).collect()
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.info().title)
    }
}

impl FromStr for Algorithm {
    type Err = String;

    /// Accepts the lowercase identifiers used on the command line, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Algorithm as clap::ValueEnum>::from_str(s, true)
    }
}
