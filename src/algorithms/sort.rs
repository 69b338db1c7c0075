//! Sort step generators
//!
//! Every generator sorts a private copy of its input. [`Recorder`] owns that
//! working buffer and the accumulated sorted positions, and copies both into
//! each emitted [`SortStep`] so that later in-place updates never leak into
//! earlier steps.

use super::errors::{require_non_empty, GeneratorError};
use crate::step::SortStep;

/// Working state shared by the three sorts
struct Recorder {
    values: Vec<i64>,
    sorted: Vec<usize>,
    steps: Vec<SortStep>,
}

impl Recorder {
    fn new(values: &[i64]) -> Self {
        Recorder {
            values: values.to_vec(),
            sorted: Vec::new(),
            steps: Vec::new(),
        }
    }

    fn emit(&mut self, comparing: Vec<usize>, swapping: Vec<usize>, message: String) {
        self.steps.push(SortStep {
            array_snapshot: self.values.clone(),
            comparing_indices: comparing,
            swapping_indices: swapping,
            sorted_indices: self.sorted.clone(),
            message,
        });
    }

    fn compare(&mut self, indices: Vec<usize>, message: String) {
        self.emit(indices, Vec::new(), message);
    }

    fn swap_highlight(&mut self, a: usize, b: usize, message: String) {
        self.emit(Vec::new(), vec![a, b], message);
    }

    fn narrate(&mut self, message: String) {
        self.emit(Vec::new(), Vec::new(), message);
    }

    /// Record `index` as final and announce it
    fn finalize(&mut self, index: usize) {
        self.sorted.push(index);
        let message = format!(
            "Element {} is now in its sorted position",
            self.values[index]
        );
        self.narrate(message);
    }

    fn finish(self) -> Vec<SortStep> {
        self.steps
    }
}

/// Repeatedly swap adjacent out-of-order pairs, fixing the largest remaining
/// element at the end of each pass
pub fn bubble(values: &[i64]) -> Result<Vec<SortStep>, GeneratorError> {
    require_non_empty(values)?;

    let mut rec = Recorder::new(values);
    let n = values.len();

    for i in 0..n {
        for j in 0..n - i - 1 {
            let (a, b) = (rec.values[j], rec.values[j + 1]);
            rec.compare(vec![j, j + 1], format!("Comparing {} and {}", a, b));

            if a > b {
                rec.swap_highlight(j, j + 1, format!("Swapping {} and {}", a, b));
                rec.values.swap(j, j + 1);
                rec.narrate(format!(
                    "Swapped {} and {}",
                    rec.values[j],
                    rec.values[j + 1]
                ));
            }
        }
        rec.finalize(n - i - 1);
    }

    Ok(rec.finish())
}

/// Select the minimum of the unsorted tail and swap it into place
pub fn selection(values: &[i64]) -> Result<Vec<SortStep>, GeneratorError> {
    require_non_empty(values)?;

    let mut rec = Recorder::new(values);
    let n = values.len();

    for i in 0..n - 1 {
        let mut min_index = i;
        rec.compare(
            vec![i],
            format!("Finding minimum element starting from index {}", i),
        );

        for j in i + 1..n {
            rec.compare(
                vec![min_index, j],
                format!(
                    "Comparing current minimum {} with {}",
                    rec.values[min_index], rec.values[j]
                ),
            );

            if rec.values[j] < rec.values[min_index] {
                min_index = j;
                rec.compare(
                    vec![min_index],
                    format!(
                        "New minimum found: {} at index {}",
                        rec.values[min_index], min_index
                    ),
                );
            }
        }

        if min_index != i {
            rec.swap_highlight(
                i,
                min_index,
                format!(
                    "Swapping {} and {}",
                    rec.values[i], rec.values[min_index]
                ),
            );
            rec.values.swap(i, min_index);
        }

        rec.finalize(i);
    }

    // Whatever is left in the last slot is the maximum
    rec.finalize(n - 1);

    Ok(rec.finish())
}

/// Grow a sorted prefix by shifting larger elements right and dropping each
/// new key into the gap
pub fn insertion(values: &[i64]) -> Result<Vec<SortStep>, GeneratorError> {
    require_non_empty(values)?;

    let mut rec = Recorder::new(values);
    let n = values.len();

    rec.sorted.push(0);
    rec.narrate(format!(
        "Starting with first element {} already sorted",
        rec.values[0]
    ));

    for i in 1..n {
        let key = rec.values[i];
        rec.compare(vec![i], format!("Current element to insert: {}", key));

        // `hole` is the slot `key` will land in; the element left of it is `j`
        let mut hole = i;
        while hole > 0 && rec.values[hole - 1] > key {
            let j = hole - 1;
            rec.compare(
                vec![j, hole],
                format!("Comparing {} with {}", rec.values[j], key),
            );
            rec.swap_highlight(
                j,
                hole,
                format!("Shifting {} to the right", rec.values[j]),
            );
            rec.values[hole] = rec.values[j];
            hole = j;
        }

        rec.values[hole] = key;
        rec.sorted.push(i);
        rec.narrate(format!("Inserted {} at position {}", key, hole));
    }

    Ok(rec.finish())
}
