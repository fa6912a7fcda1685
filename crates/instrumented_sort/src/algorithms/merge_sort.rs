use log::trace;

use crate::{SortError, SortMeter, SortStatistics, Sorter};

/// Top-down stable merge sort over index ranges of one owned buffer.
#[derive(Clone, Debug, Default)]
pub struct MergeSort {
    meter: SortMeter,
}

impl MergeSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sort_by_key<T, K, F>(&mut self, input: &[T], key: F) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: Fn(&T) -> K,
    {
        self.meter.begin();
        let mut output = input.to_vec();
        let mut scratch = Vec::with_capacity(output.len());
        let len = output.len();
        merge_sort_recursive(&mut output, &mut scratch, 0, len, &key, &mut self.meter);
        self.meter.finish();

        trace!(
            "merge_sort: {} values, {}",
            output.len(),
            self.meter.statistics()
        );
        output
    }
}

fn merge_sort_recursive<T, K, F>(
    data: &mut [T],
    scratch: &mut Vec<T>,
    left: usize,
    right: usize,
    key: &F,
    meter: &mut SortMeter,
) where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let len = right - left;
    if len <= 1 {
        meter.record_iteration();
        return;
    }

    let mid = left + len / 2;
    merge_sort_recursive(data, scratch, left, mid, key, meter);
    merge_sort_recursive(data, scratch, mid, right, key, meter);
    merge_ranges(data, scratch, left, mid, right, key, meter);
}

fn merge_ranges<T, K, F>(
    data: &mut [T],
    scratch: &mut Vec<T>,
    left: usize,
    mid: usize,
    right: usize,
    key: &F,
    meter: &mut SortMeter,
) where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    scratch.clear();
    scratch.extend_from_slice(&data[left..right]);

    let half = mid - left;
    let len = right - left;
    let mut i = 0usize;
    let mut j = half;
    let mut k = left;

    while i < half && j < len {
        meter.record_iteration();
        meter.record_comparison();
        // Left wins ties.
        if key(&scratch[i]) <= key(&scratch[j]) {
            data[k] = scratch[i].clone();
            i += 1;
        } else {
            data[k] = scratch[j].clone();
            j += 1;
        }
        k += 1;
    }

    for item in scratch[i..half].iter().chain(&scratch[j..len]) {
        meter.record_iteration();
        data[k] = item.clone();
        k += 1;
    }
}

impl Sorter for MergeSort {
    fn name(&self) -> &'static str {
        "merge_sort"
    }

    fn sort(&mut self, input: &[i64]) -> Result<Vec<i64>, SortError> {
        Ok(self.sort_by_key(input, |&x| x))
    }

    fn statistics(&self) -> SortStatistics {
        self.meter.statistics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts_reversed_five() {
        let mut sorter = MergeSort::new();
        assert_eq!(sorter.sort(&[5, 4, 3, 2, 1]).unwrap(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn trivial_inputs_count_one_terminal_step() {
        let mut sorter = MergeSort::new();
        assert_eq!(sorter.sort(&[]).unwrap(), Vec::<i64>::new());
        assert_eq!(sorter.statistics().iterations, 1);
        assert_eq!(sorter.statistics().comparisons, 0);

        assert_eq!(sorter.sort(&[9]).unwrap(), vec![9]);
        assert_eq!(sorter.statistics().iterations, 1);
        assert_eq!(sorter.statistics().comparisons, 0);
    }

    #[test]
    fn sorted_power_of_two_counts() {
        let data: Vec<i64> = (1..=8).collect();
        let mut sorter = MergeSort::new();
        assert_eq!(sorter.sort(&data).unwrap(), data);
        // Each merge of two sorted runs of length a costs a comparisons,
        // then copies the a leftover right-hand values.
        assert_eq!(sorter.statistics().comparisons, 12);
        assert_eq!(sorter.statistics().iterations, 8 + 3 * 8);
    }

    #[test]
    fn counts_are_deterministic() {
        let data = [9, 3, 7, 1, 8, 2, 6, 4, 5, 0, 3];
        let mut sorter = MergeSort::new();
        sorter.sort(&data).unwrap();
        let first = sorter.statistics();
        sorter.sort(&data).unwrap();
        let second = sorter.statistics();
        assert_eq!(first.comparisons, second.comparisons);
        assert_eq!(first.iterations, second.iterations);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let tagged: Vec<(i64, usize)> = [4, 2, 4, 2, 0, 4, 0, 2, 4]
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();

        let mut sorter = MergeSort::new();
        let sorted = sorter.sort_by_key(&tagged, |&(v, _)| v);
        for pair in sorted.windows(2) {
            assert!(pair[0].0 <= pair[1].0);
            if pair[0].0 == pair[1].0 {
                assert!(pair[0].1 < pair[1].1, "{pair:?}");
            }
        }
    }
}
