use thiserror::Error;

/// Reasons a key-range sort refuses its input.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum SortError {
    #[error("counting sort bound must be non-negative, got {bound}")]
    NegativeBound { bound: i64 },

    #[error("negative key {value} at index {index}")]
    NegativeValue { index: usize, value: i64 },

    #[error("key {value} at index {index} exceeds the configured bound {bound}")]
    ValueExceedsBound { index: usize, value: i64, bound: i64 },

    #[error("frequency table of {entries} entries cannot be allocated")]
    TableTooLarge { entries: u128 },
}
