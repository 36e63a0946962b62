// SPDX-License-Identifier: MPL-2.0
//! Bar generation and merge-sort tracing for the sorting visualizer.
//!
//! The home screen animates a stable merge sort over randomly generated bar
//! heights. The sort runs eagerly here and produces a trace of snapshots,
//! one per comparison/placement, which the UI replays at a fixed interval.
//! The merge is performed in place (rotation variant), so every snapshot is
//! a true permutation of the input sequence.

use rand::Rng;

/// Number of bars generated for a fresh visualizer.
pub const BAR_COUNT: usize = 100;

/// Smallest bar height, inclusive.
pub const BAR_MIN: u32 = 10;

/// Largest bar height, inclusive.
pub const BAR_MAX: u32 = 59;

/// Generates `count` bar heights, each drawn uniformly from `[min, max]`.
///
/// Always succeeds; `count = 0` yields an empty sequence.
pub fn generate(count: usize, min: u32, max: u32) -> Vec<u32> {
    let mut rng = rand::thread_rng();
    (0..count).map(|_| rng.gen_range(min..=max)).collect()
}

/// Runs a stable merge sort over `bars` and records one snapshot of the
/// full working sequence per comparison/placement.
///
/// The trace ends with the fully sorted sequence; inputs with fewer than
/// two elements need no work and produce an empty trace. Replaying the
/// trace element by element reproduces the sort exactly as it happened.
pub fn merge_sort_trace(bars: &[u32]) -> Vec<Vec<u32>> {
    let mut work = bars.to_vec();
    let mut trace = Vec::new();
    let len = work.len();
    if len > 1 {
        sort_range(&mut work, 0, len - 1, &mut trace);
    }
    trace
}

/// Classic divide-at-midpoint recursion over the inclusive range
/// `[left, right]`.
fn sort_range(arr: &mut [u32], left: usize, right: usize, trace: &mut Vec<Vec<u32>>) {
    if left >= right {
        return;
    }
    let mid = (left + right) / 2;
    sort_range(arr, left, mid, trace);
    sort_range(arr, mid + 1, right, trace);
    merge(arr, left, mid, right, trace);
}

/// Merges the sorted runs `[left, mid]` and `[mid + 1, right]` in place.
///
/// Ties keep the left run's element first, so equal values never swap
/// relative order. When the right run's head wins it is rotated into
/// position, which keeps the buffer a permutation of the input at every
/// recorded step. Once one run is exhausted the remainder is already in
/// place, so leftover handling emits no further snapshots.
fn merge(arr: &mut [u32], left: usize, mid: usize, right: usize, trace: &mut Vec<Vec<u32>>) {
    let mut i = left;
    let mut m = mid;
    let mut j = mid + 1;

    while i <= m && j <= right {
        if arr[i] <= arr[j] {
            i += 1;
        } else {
            arr[i..=j].rotate_right(1);
            i += 1;
            m += 1;
            j += 1;
        }
        trace.push(arr.to_vec());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same_multiset(a: &[u32], b: &[u32]) -> bool {
        let mut a = a.to_vec();
        let mut b = b.to_vec();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }

    #[test]
    fn generate_respects_bounds() {
        let bars = generate(BAR_COUNT, BAR_MIN, BAR_MAX);
        assert_eq!(bars.len(), BAR_COUNT);
        assert!(bars.iter().all(|&v| (BAR_MIN..=BAR_MAX).contains(&v)));
    }

    #[test]
    fn generate_zero_count_yields_empty_sequence() {
        assert!(generate(0, BAR_MIN, BAR_MAX).is_empty());
    }

    #[test]
    fn generate_degenerate_range_is_constant() {
        let bars = generate(10, 7, 7);
        assert!(bars.iter().all(|&v| v == 7));
    }

    #[test]
    fn trace_ends_sorted() {
        let bars = generate(BAR_COUNT, BAR_MIN, BAR_MAX);
        let trace = merge_sort_trace(&bars);
        let last = trace.last().expect("non-trivial input produces steps");
        assert!(last.windows(2).all(|w| w[0] <= w[1]));
        assert!(same_multiset(last, &bars));
    }

    #[test]
    fn every_snapshot_is_a_permutation() {
        let bars = generate(64, BAR_MIN, BAR_MAX);
        for snapshot in merge_sort_trace(&bars) {
            assert!(same_multiset(&snapshot, &bars));
        }
    }

    #[test]
    fn four_element_scenario() {
        // [5,3,8,1] splits into [5,3] and [8,1], sorts the halves to [3,5]
        // and [1,8], and the final merge yields [1,3,5,8].
        let trace = merge_sort_trace(&[5, 3, 8, 1]);
        assert_eq!(trace.last().unwrap(), &vec![1, 3, 5, 8]);
    }

    #[test]
    fn already_sorted_input_is_untouched() {
        let bars: Vec<u32> = (1..=32).collect();
        let trace = merge_sort_trace(&bars);
        for snapshot in &trace {
            assert_eq!(snapshot, &bars);
        }
        assert_eq!(trace.last().unwrap(), &bars);
    }

    #[test]
    fn empty_and_singleton_need_no_steps() {
        assert!(merge_sort_trace(&[]).is_empty());
        assert!(merge_sort_trace(&[7]).is_empty());
    }

    #[test]
    fn duplicates_sort_correctly() {
        let bars = vec![4, 4, 2, 9, 2, 4];
        let trace = merge_sort_trace(&bars);
        assert_eq!(trace.last().unwrap(), &vec![2, 2, 4, 4, 4, 9]);
    }

    #[test]
    fn reversed_input_sorts_ascending() {
        let bars: Vec<u32> = (1..=50).rev().collect();
        let trace = merge_sort_trace(&bars);
        let expected: Vec<u32> = (1..=50).collect();
        assert_eq!(trace.last().unwrap(), &expected);
    }
}
