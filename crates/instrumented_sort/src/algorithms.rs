pub(crate) mod counting_sort;
pub(crate) mod heap_sort;
pub(crate) mod insertion_sort;
pub(crate) mod merge_sort;
pub(crate) mod quick_sort;
pub(crate) mod radix_sort;
