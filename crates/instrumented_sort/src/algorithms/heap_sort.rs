use log::trace;

use crate::{SortError, SortMeter, SortStatistics, Sorter};

#[derive(Clone, Debug, Default)]
pub struct HeapSort {
    meter: SortMeter,
}

impl HeapSort {
    pub fn new() -> Self {
        Self::default()
    }
}

fn heap_sort(data: &mut [i64], meter: &mut SortMeter) {
    let len = data.len();

    for root in (0..len / 2).rev() {
        heapify(data, len, root, meter);
    }

    for end in (1..len).rev() {
        data.swap(0, end);
        heapify(data, end, 0, meter);
    }
}

/// Sifts `data[root]` down a max-heap occupying `data[..heap_size]`.
///
/// Each call is one iteration; both child-existence checks are charged as
/// comparisons, plus one per child value actually compared.
fn heapify(data: &mut [i64], heap_size: usize, root: usize, meter: &mut SortMeter) {
    meter.record_iteration();

    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    meter.record_comparison();
    if left < heap_size {
        meter.record_comparison();
        if data[left] > data[largest] {
            largest = left;
        }
    }

    meter.record_comparison();
    if right < heap_size {
        meter.record_comparison();
        if data[right] > data[largest] {
            largest = right;
        }
    }

    if largest != root {
        data.swap(root, largest);
        heapify(data, heap_size, largest, meter);
    }
}

impl Sorter for HeapSort {
    fn name(&self) -> &'static str {
        "heap_sort"
    }

    fn sort(&mut self, input: &[i64]) -> Result<Vec<i64>, SortError> {
        self.meter.begin();
        let mut output = input.to_vec();
        heap_sort(&mut output, &mut self.meter);
        self.meter.finish();

        trace!(
            "heap_sort: {} values, {}",
            output.len(),
            self.meter.statistics()
        );
        Ok(output)
    }

    fn statistics(&self) -> SortStatistics {
        self.meter.statistics()
    }
}
