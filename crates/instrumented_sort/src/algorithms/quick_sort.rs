use log::trace;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::insertion_sort;
use crate::{SortError, SortMeter, SortStatistics, Sorter};

/// In-place quicksort with a randomized median-of-three pivot.
///
/// The three candidates are drawn one from each third of the current range
/// and ordered with the insertion sort routine; its work is charged to this
/// sorter. The pivot source is injectable so tests can pin pivot choices.
#[derive(Clone, Debug)]
pub struct QuickSort<R = StdRng> {
    meter: SortMeter,
    rng: R,
}

impl QuickSort<StdRng> {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl Default for QuickSort<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> QuickSort<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            meter: SortMeter::new(),
            rng,
        }
    }

    fn sort_range(&mut self, data: &mut [i64], mut start: usize, mut end: usize) {
        loop {
            let len = end - start;
            if len <= 1 {
                self.meter.record_iteration();
                return;
            }
            if len == 2 {
                self.meter.record_iteration();
                self.meter.record_comparison();
                if data[start] > data[start + 1] {
                    data.swap(start, start + 1);
                }
                return;
            }

            let pivot_index = self.find_median(data, start, end);
            let last = end - 1;
            data.swap(pivot_index, last);
            let pivot = data[last];

            let mut midpoint = start;
            for i in start..last {
                self.meter.record_iteration();
                self.meter.record_comparison();
                if data[i] <= pivot {
                    data.swap(i, midpoint);
                    midpoint += 1;
                }
            }
            data.swap(midpoint, last);

            // Recurse into the smaller side so the stack stays logarithmic.
            if midpoint - start < end - midpoint - 1 {
                self.sort_range(data, start, midpoint);
                start = midpoint + 1;
            } else {
                self.sort_range(data, midpoint + 1, end);
                end = midpoint;
            }
        }
    }

    /// Index of the median of three candidates, one per third of
    /// `[start, end)`. Requires `end - start >= 3`.
    fn find_median(&mut self, data: &[i64], start: usize, end: usize) -> usize {
        let len = end - start;
        let third = len / 3;
        debug_assert!(third >= 1);

        let left = start + self.rng.random_range(0..third);
        let mid = start + third + self.rng.random_range(0..third);
        let right = start + 2 * third + self.rng.random_range(0..len - 2 * third);

        let mut candidates = [data[left], data[mid], data[right]];
        insertion_sort::insert_all(&mut candidates, &|&x: &i64| x, &mut self.meter);
        let median = candidates[1];

        if data[left] == median {
            left
        } else if data[mid] == median {
            mid
        } else {
            right
        }
    }
}

impl<R: Rng> Sorter for QuickSort<R> {
    fn name(&self) -> &'static str {
        "quick_sort"
    }

    fn sort(&mut self, input: &[i64]) -> Result<Vec<i64>, SortError> {
        self.meter.begin();
        let mut output = input.to_vec();
        let len = output.len();
        self.sort_range(&mut output, 0, len);
        self.meter.finish();

        trace!(
            "quick_sort: {} values, {}",
            output.len(),
            self.meter.statistics()
        );
        Ok(output)
    }

    fn statistics(&self) -> SortStatistics {
        self.meter.statistics()
    }
}
