use log::trace;

use crate::{SortError, SortMeter, SortStatistics, Sorter};

/// Stable shifting insertion sort.
///
/// Every outer step is charged one iteration and one comparison for the
/// "is a shift needed" probe, every shift another of each.
#[derive(Clone, Debug, Default)]
pub struct InsertionSort {
    meter: SortMeter,
}

impl InsertionSort {
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
        insert_all(&mut output, &key, &mut self.meter);
        self.meter.finish();

        trace!(
            "insertion_sort: {} values, {}",
            output.len(),
            self.meter.statistics()
        );
        output
    }
}

pub(crate) fn insert_all<T, K, F>(data: &mut [T], key: &F, meter: &mut SortMeter)
where
    K: Ord,
    F: Fn(&T) -> K,
{
    for i in 1..data.len() {
        let current = key(&data[i]);
        meter.record_iteration();
        meter.record_comparison();

        let mut slot = i;
        while slot > 0 && key(&data[slot - 1]) > current {
            meter.record_iteration();
            meter.record_comparison();
            slot -= 1;
        }
        data[slot..=i].rotate_right(1);
    }
}

impl Sorter for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion_sort"
    }

    fn sort(&mut self, input: &[i64]) -> Result<Vec<i64>, SortError> {
        Ok(self.sort_by_key(input, |&x| x))
    }

    fn statistics(&self) -> SortStatistics {
        self.meter.statistics()
    }
}
