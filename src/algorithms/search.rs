//! Search step generators
//!
//! Each generator validates its input, then walks the array exactly as the
//! textbook algorithm does, recording one [`SearchStep`] per probe plus
//! narrative steps where the search range changes.
//!
//! Binary and exponential search end with an explicit "not found" step when the
//! target is absent. Linear search does not: its last probe already covers the
//! final index.

use super::errors::{require_non_empty, require_sorted, GeneratorError};
use crate::step::SearchStep;

/// Scan left to right until `target` is matched
///
/// Produces `k + 1` steps when the first match is at `k`, or `values.len()`
/// steps when there is no match. Order of `values` does not matter.
pub fn linear(values: &[i64], target: i64) -> Result<Vec<SearchStep>, GeneratorError> {
    require_non_empty(values)?;

    let mut steps = Vec::new();
    for (i, &value) in values.iter().enumerate() {
        let found = value == target;
        steps.push(SearchStep::comparing(
            i,
            found,
            format!("Checking if {} equals {}...", value, target),
        ));
        if found {
            break;
        }
    }
    Ok(steps)
}

/// Halve the search interval until `target` is matched or the interval is empty
pub fn binary(values: &[i64], target: i64) -> Result<Vec<SearchStep>, GeneratorError> {
    require_non_empty(values)?;
    require_sorted(values)?;

    let mut steps = Vec::new();
    bisect(values, target, 0, values.len() - 1, &mut steps);
    Ok(steps)
}

/// Double a probe bound until it passes `target`, then binary search the last gap
pub fn exponential(values: &[i64], target: i64) -> Result<Vec<SearchStep>, GeneratorError> {
    require_non_empty(values)?;
    require_sorted(values)?;

    let mut steps = Vec::new();
    if values[0] == target {
        steps.push(SearchStep::comparing(
            0,
            true,
            format!("First element {} equals {}", values[0], target),
        ));
        return Ok(steps);
    }

    let n = values.len();
    let mut bound = 1;
    while bound < n && values[bound] <= target {
        let found = values[bound] == target;
        steps.push(SearchStep::comparing(
            bound,
            found,
            format!("Checking bound at index {}: {}", bound, values[bound]),
        ));
        if found {
            return Ok(steps);
        }
        bound *= 2;
    }

    // The bound may have doubled past the end; the tail still needs searching.
    let lo = bound / 2;
    let hi = bound.min(n - 1);
    steps.push(SearchStep::narrative(format!(
        "Performing binary search between indices {} and {}",
        lo, hi
    )));
    bisect(values, target, lo, hi, &mut steps);
    Ok(steps)
}

/// Binary search restricted to `values[lo..=hi]`, reporting positions in `values`
///
/// Equivalent to searching the sub-slice and shifting every reported index by
/// `lo`; the midpoint floors toward the lower index either way.
fn bisect(values: &[i64], target: i64, lo: usize, hi: usize, steps: &mut Vec<SearchStep>) {
    // Signed so that `right` can drop to `lo - 1` when `lo` is 0
    let mut left = lo as isize;
    let mut right = hi as isize;

    while left <= right {
        let mid = ((left + right) / 2) as usize;
        let probe = values[mid];
        let found = probe == target;
        steps.push(SearchStep::comparing(
            mid,
            found,
            format!("Checking middle element at index {}: {}", mid, probe),
        ));

        if found {
            return;
        } else if probe < target {
            left = mid as isize + 1;
            steps.push(SearchStep::narrative(format!(
                "{} < {}, so search in right half ({} to {})",
                probe, target, left, right
            )));
        } else {
            right = mid as isize - 1;
            steps.push(SearchStep::narrative(format!(
                "{} > {}, so search in left half ({} to {})",
                probe, target, left, right
            )));
        }
    }

    steps.push(SearchStep::narrative(format!(
        "{} not found in the array",
        target
    )));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probes(steps: &[SearchStep]) -> Vec<usize> {
        steps
            .iter()
            .filter_map(|s| s.comparing_indices.first().copied())
            .collect()
    }

    #[test]
    fn test_linear_stops_at_first_match() {
        let steps = linear(&[4, 9, 9, 1], 9).unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].found_index, Some(1));
        assert_eq!(steps[0].message, "Checking if 4 equals 9...");
    }

    #[test]
    fn test_linear_handles_unsorted_input() {
        let steps = linear(&[8, 3, 5], 5).unwrap();
        assert_eq!(steps.last().unwrap().found_index, Some(2));
    }

    #[test]
    fn test_binary_single_element_miss() {
        let steps = binary(&[4], 3).unwrap();
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[1].message, "4 > 3, so search in left half (0 to -1)");
        assert_eq!(steps[2].message, "3 not found in the array");
    }

    #[test]
    fn test_binary_rejects_unsorted() {
        assert_eq!(
            binary(&[3, 1, 2], 1),
            Err(GeneratorError::UnsortedInput { index: 1 })
        );
    }

    #[test]
    fn test_exponential_first_element() {
        let steps = exponential(&[2, 4, 6], 2).unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].found_index, Some(0));
        assert_eq!(steps[0].message, "First element 2 equals 2");
    }

    #[test]
    fn test_exponential_probes_powers_of_two() {
        let values: Vec<i64> = (0..20).collect();
        let steps = exponential(&values, 13).unwrap();
        // bounds 1, 2, 4, 8 then binary search over [8, 16]
        assert_eq!(&probes(&steps)[..4], &[1, 2, 4, 8]);
        assert!(steps
            .iter()
            .any(|s| s.message == "Performing binary search between indices 8 and 16"));
        assert_eq!(steps.last().unwrap().found_index, Some(13));
    }

    #[test]
    fn test_exponential_searches_tail_after_overshoot() {
        // bound goes 1, 2, 4, 8; 8 is past the end so the range clamps to [4, 5]
        let steps = exponential(&[1, 2, 3, 4, 5, 6], 6).unwrap();
        assert!(steps
            .iter()
            .any(|s| s.message == "Performing binary search between indices 4 and 5"));
        assert_eq!(steps.last().unwrap().found_index, Some(5));
    }

    #[test]
    fn test_exponential_reports_absent_target() {
        let steps = exponential(&[1, 3, 5, 7], 4).unwrap();
        assert!(steps.iter().all(|s| s.found_index.is_none()));
        assert_eq!(steps.last().unwrap().message, "4 not found in the array");
    }

    #[test]
    fn test_bisect_reports_full_array_positions() {
        let values = [10, 20, 30, 40, 50, 60, 70];
        let mut steps = Vec::new();
        bisect(&values, 60, 4, 6, &mut steps);
        assert_eq!(probes(&steps), vec![5]);
        assert_eq!(steps[0].found_index, Some(5));
    }
}
