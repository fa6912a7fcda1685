mod algorithms;
mod error;
pub mod harness;
mod stats;

pub use algorithms::counting_sort::CountingSort;
pub use algorithms::heap_sort::HeapSort;
pub use algorithms::insertion_sort::InsertionSort;
pub use algorithms::merge_sort::MergeSort;
pub use algorithms::quick_sort::QuickSort;
pub use algorithms::radix_sort::RadixSort;
pub use error::SortError;
pub use stats::{SortMeter, SortStatistics};

/// Uniform interface over the instrumented sorters.
///
/// `sort` never touches `input`; it returns a new non-decreasing sequence
/// holding the same multiset of values. `statistics` reports only the most
/// recent call.
pub trait Sorter {
    fn name(&self) -> &'static str;
    fn sort(&mut self, input: &[i64]) -> Result<Vec<i64>, SortError>;
    fn statistics(&self) -> SortStatistics;
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortAlgorithm {
    InsertionSort,
    MergeSort,
    QuickSort,
    HeapSort,
    CountingSort,
    RadixSort,
}

pub const ALL_ALGORITHMS: [SortAlgorithm; 6] = [
    SortAlgorithm::InsertionSort,
    SortAlgorithm::MergeSort,
    SortAlgorithm::QuickSort,
    SortAlgorithm::HeapSort,
    SortAlgorithm::CountingSort,
    SortAlgorithm::RadixSort,
];

pub fn all_algorithms() -> &'static [SortAlgorithm] {
    &ALL_ALGORITHMS
}

impl SortAlgorithm {
    pub fn name(self) -> &'static str {
        match self {
            Self::InsertionSort => "insertion_sort",
            Self::MergeSort => "merge_sort",
            Self::QuickSort => "quick_sort",
            Self::HeapSort => "heap_sort",
            Self::CountingSort => "counting_sort",
            Self::RadixSort => "radix_sort",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::InsertionSort => "Insertion Sort",
            Self::MergeSort => "Merge Sort",
            Self::QuickSort => "Quick Sort",
            Self::HeapSort => "Heap Sort",
            Self::CountingSort => "Counting Sort",
            Self::RadixSort => "Radix Sort",
        }
    }

    pub fn is_stable(self) -> bool {
        !matches!(self, Self::QuickSort | Self::HeapSort)
    }

    /// Counting and radix sort index tables by key and reject negatives.
    pub fn supports_negative(self) -> bool {
        !matches!(self, Self::CountingSort | Self::RadixSort)
    }

    /// Fresh instance with default configuration: inferred counting bound,
    /// OS-seeded pivot selection.
    pub fn build(self) -> Box<dyn Sorter> {
        match self {
            Self::InsertionSort => Box::new(InsertionSort::new()),
            Self::MergeSort => Box::new(MergeSort::new()),
            Self::QuickSort => Box::new(QuickSort::new()),
            Self::HeapSort => Box::new(HeapSort::new()),
            Self::CountingSort => Box::new(CountingSort::new()),
            Self::RadixSort => Box::new(RadixSort::new()),
        }
    }
}
