// Step records and the pre-computed trace they form

use crate::algorithms::Algorithm;
use serde::Serialize;

/// One moment of a search run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStep {
    pub comparing_indices: Vec<usize>,
    /// Set only on the step where the target was just matched
    pub found_index: Option<usize>,
    pub message: String,
}

impl SearchStep {
    pub(crate) fn comparing(index: usize, found: bool, message: String) -> Self {
        SearchStep {
            comparing_indices: vec![index],
            found_index: found.then_some(index),
            message,
        }
    }

    /// A step with nothing highlighted, used for narration between probes
    pub(crate) fn narrative(message: String) -> Self {
        SearchStep {
            comparing_indices: Vec::new(),
            found_index: None,
            message,
        }
    }
}

/// One moment of a sort run
///
/// `array_snapshot` is an owned copy of the working array at the instant the
/// step was emitted. The generators mutate their working array in place, so a
/// step never borrows from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortStep {
    pub array_snapshot: Vec<i64>,
    pub comparing_indices: Vec<usize>,
    pub swapping_indices: Vec<usize>,
    /// Append-only within a run
    pub sorted_indices: Vec<usize>,
    pub message: String,
}

/// A step of either shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Step {
    Search(SearchStep),
    Sort(SortStep),
}

impl Step {
    pub fn comparing_indices(&self) -> &[usize] {
        match self {
            Step::Search(step) => &step.comparing_indices,
            Step::Sort(step) => &step.comparing_indices,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Step::Search(step) => &step.message,
            Step::Sort(step) => &step.message,
        }
    }

    pub fn as_search(&self) -> Option<&SearchStep> {
        match self {
            Step::Search(step) => Some(step),
            Step::Sort(_) => None,
        }
    }

    pub fn as_sort(&self) -> Option<&SortStep> {
        match self {
            Step::Sort(step) => Some(step),
            Step::Search(_) => None,
        }
    }
}

impl From<SearchStep> for Step {
    fn from(step: SearchStep) -> Self {
        Step::Search(step)
    }
}

impl From<SortStep> for Step {
    fn from(step: SortStep) -> Self {
        Step::Sort(step)
    }
}

/// The full step sequence of one run, together with the input it was computed from.
///
/// A trace is produced in a single synchronous pass and never changes
/// afterwards; playback only reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Trace {
    algorithm: Algorithm,
    input: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    target: Option<i64>,
    steps: Vec<Step>,
}

impl Trace {
    pub fn new(
        algorithm: Algorithm,
        input: Vec<i64>,
        target: Option<i64>,
        steps: Vec<Step>,
    ) -> Self {
        Trace {
            algorithm,
            input,
            target,
            steps,
        }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The array as it was before the first step
    pub fn input(&self) -> &[i64] {
        &self.input
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Get a step by index
    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Get the number of steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Iterate search steps; empty for sort traces
    pub fn search_steps(&self) -> impl Iterator<Item = &SearchStep> {
        self.steps.iter().filter_map(Step::as_search)
    }

    /// Iterate sort steps; empty for search traces
    pub fn sort_steps(&self) -> impl Iterator<Item = &SortStep> {
        self.steps.iter().filter_map(Step::as_sort)
    }
}
