// Integration tests for the sort step generators

use algotty::algorithms::{sort, Algorithm};
use algotty::dataset::DataSource;
use algotty::step::SortStep;

const SORTS: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Selection, Algorithm::Insertion];

fn sort_steps(algorithm: Algorithm, values: &[i64]) -> Vec<SortStep> {
    let trace = algorithm.generate(values, None).expect("Generation failed");
    trace.sort_steps().cloned().collect()
}

fn sorted_copy(values: &[i64]) -> Vec<i64> {
    let mut copy = values.to_vec();
    copy.sort();
    copy
}

fn assert_complete(algorithm: Algorithm, values: &[i64]) {
    let steps = sort_steps(algorithm, values);
    let last = steps.last().expect("No steps generated");

    assert_eq!(
        last.array_snapshot,
        sorted_copy(values),
        "{} left {:?} unsorted",
        algorithm,
        values
    );

    let mut sorted = last.sorted_indices.clone();
    sorted.sort();
    assert_eq!(
        sorted,
        (0..values.len()).collect::<Vec<_>>(),
        "{} did not mark every index sorted for {:?}",
        algorithm,
        values
    );
}

#[test]
fn test_bubble_scenario() {
    let steps = sort::bubble(&[3, 1, 2]).expect("Generation failed");

    let swaps: Vec<&SortStep> = steps
        .iter()
        .filter(|s| !s.swapping_indices.is_empty())
        .collect();
    assert_eq!(swaps.len(), 2);
    assert_eq!(swaps[0].swapping_indices, vec![0, 1]);
    assert_eq!(swaps[0].message, "Swapping 3 and 1");
    assert_eq!(swaps[1].swapping_indices, vec![1, 2]);
    assert_eq!(swaps[1].array_snapshot, vec![1, 3, 2]);

    let last = steps.last().unwrap();
    assert_eq!(last.array_snapshot, vec![1, 2, 3]);
    assert_eq!(last.sorted_indices, vec![2, 1, 0]);
}

#[test]
fn test_bubble_first_pass_sequence() {
    let steps = sort::bubble(&[3, 1, 2]).expect("Generation failed");
    let messages: Vec<&str> = steps.iter().take(7).map(|s| s.message.as_str()).collect();

    assert_eq!(
        messages,
        vec![
            "Comparing 3 and 1",
            "Swapping 3 and 1",
            "Swapped 1 and 3",
            "Comparing 3 and 2",
            "Swapping 3 and 2",
            "Swapped 2 and 3",
            "Element 3 is now in its sorted position",
        ]
    );
}

#[test]
fn test_insertion_scenario() {
    let steps = sort::insertion(&[5, 2, 4]).expect("Generation failed");

    let inserted: Vec<&SortStep> = steps
        .iter()
        .filter(|s| s.message.starts_with("Inserted"))
        .collect();
    assert_eq!(inserted.len(), 2);

    // After i = 1 (key 2)
    assert_eq!(inserted[0].message, "Inserted 2 at position 0");
    assert_eq!(inserted[0].array_snapshot, vec![2, 5, 4]);
    assert_eq!(inserted[0].sorted_indices, vec![0, 1]);

    // After i = 2 (key 4)
    assert_eq!(inserted[1].message, "Inserted 4 at position 1");
    assert_eq!(inserted[1].array_snapshot, vec![2, 4, 5]);
    assert_eq!(inserted[1].sorted_indices, vec![0, 1, 2]);
}

#[test]
fn test_insertion_shift_step_shows_pre_shift_array() {
    let steps = sort::insertion(&[5, 2]).expect("Generation failed");
    let shift = steps
        .iter()
        .find(|s| s.message == "Shifting 5 to the right")
        .unwrap();
    assert_eq!(shift.array_snapshot, vec![5, 2]);
    assert_eq!(shift.swapping_indices, vec![0, 1]);
}

#[test]
fn test_selection_swaps_minimum_into_place() {
    let steps = sort::selection(&[3, 1, 2]).expect("Generation failed");
    let swap = steps
        .iter()
        .find(|s| !s.swapping_indices.is_empty())
        .unwrap();

    assert_eq!(swap.swapping_indices, vec![0, 1]);
    assert_eq!(swap.message, "Swapping 3 and 1");
    assert_eq!(swap.array_snapshot, vec![3, 1, 2]);

    let last = steps.last().unwrap();
    assert_eq!(last.message, "Element 3 is now in its sorted position");
    assert_eq!(last.sorted_indices, vec![0, 1, 2]);
}

#[test]
fn test_selection_no_swap_when_already_minimum() {
    let steps = sort::selection(&[1, 2, 3]).expect("Generation failed");
    assert!(steps.iter().all(|s| s.swapping_indices.is_empty()));
}

#[test]
fn test_every_sort_completes_on_random_input() {
    let mut source = DataSource::new(Some(99));
    for size in [1, 2, 3, 5, 8, 15, 30] {
        for _ in 0..10 {
            let data = source.sort_array(size);
            for algorithm in SORTS {
                assert_complete(algorithm, &data.values);
            }
        }
    }
}

#[test]
fn test_edge_shapes() {
    let cases: [&[i64]; 6] = [
        &[7],
        &[1, 2, 3, 4, 5],
        &[5, 4, 3, 2, 1],
        &[2, 2, 2, 2],
        &[-3, 10, -7, 0, 4],
        &[1, 3, 1, 3, 1],
    ];
    for values in cases {
        for algorithm in SORTS {
            assert_complete(algorithm, values);
        }
    }
}

#[test]
fn test_sorted_indices_are_append_only() {
    let values = [9, 4, 7, 1, 8, 2, 6];
    for algorithm in SORTS {
        let steps = sort_steps(algorithm, &values);
        for pair in steps.windows(2) {
            let (before, after) = (&pair[0].sorted_indices, &pair[1].sorted_indices);
            assert!(
                after.starts_with(before),
                "{} dropped sorted indices: {:?} -> {:?}",
                algorithm,
                before,
                after
            );
        }
    }
}

#[test]
fn test_snapshots_are_permutations_of_input() {
    let values = [6, 3, 9, 3, 1];
    let expected = sorted_copy(&values);
    for algorithm in [Algorithm::Bubble, Algorithm::Selection] {
        for step in sort_steps(algorithm, &values) {
            assert_eq!(sorted_copy(&step.array_snapshot), expected);
        }
    }
}

#[test]
fn test_caller_array_is_untouched() {
    let values = vec![4, 3, 2, 1];
    for algorithm in SORTS {
        let trace = algorithm.generate(&values, None).expect("Generation failed");
        assert_eq!(trace.input(), &[4, 3, 2, 1]);
    }
    assert_eq!(values, vec![4, 3, 2, 1]);
}

#[test]
fn test_sort_is_deterministic() {
    let values = [5, 1, 4, 2, 3];
    for algorithm in SORTS {
        let first = algorithm.generate(&values, None).expect("Generation failed");
        let second = algorithm
            .generate(&values.to_vec(), None)
            .expect("Generation failed");
        assert_eq!(first, second);
    }
}
