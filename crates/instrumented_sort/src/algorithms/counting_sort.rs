use log::{debug, trace};

use crate::{SortError, SortMeter, SortStatistics, Sorter};

/// Stable counting sort for keys in `0..=k`.
///
/// A bound of zero means "infer `k` from the largest key of each input".
/// Keys outside the range are rejected before any output is built.
#[derive(Clone, Debug, Default)]
pub struct CountingSort {
    meter: SortMeter,
    bound: i64,
}

impl CountingSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bound(bound: i64) -> Result<Self, SortError> {
        if bound < 0 {
            return Err(SortError::NegativeBound { bound });
        }
        Ok(Self {
            meter: SortMeter::new(),
            bound,
        })
    }

    pub fn bound(&self) -> i64 {
        self.bound
    }

    pub fn sort_by_key<T, F>(&mut self, input: &[T], key: F) -> Result<Vec<T>, SortError>
    where
        T: Clone,
        F: Fn(&T) -> i64,
    {
        self.meter.begin();
        let result = self.sort_keyed(input, &key);
        self.meter.finish();

        if let Ok(output) = &result {
            trace!(
                "counting_sort: {} values, {}",
                output.len(),
                self.meter.statistics()
            );
        }
        result
    }

    fn sort_keyed<T, F>(&mut self, input: &[T], key: &F) -> Result<Vec<T>, SortError>
    where
        T: Clone,
        F: Fn(&T) -> i64,
    {
        let configured = (self.bound > 0).then_some(self.bound);
        check_keys(input, key, configured)?;
        if input.len() <= 1 {
            return Ok(input.to_vec());
        }

        let bound = match configured {
            Some(bound) => bound,
            None => {
                let max = max_key(input, key, &mut self.meter);
                debug!("counting_sort: inferred bound {max}");
                max
            }
        };

        let buckets = usize::try_from(bound as u128 + 1).map_err(|_| SortError::TableTooLarge {
            entries: bound as u128 + 1,
        })?;
        counting_pass(input, |item| key(item) as usize, buckets, &mut self.meter)
    }
}

/// Rejects negative keys, and keys above `bound` when one is given.
pub(crate) fn check_keys<T, F>(input: &[T], key: &F, bound: Option<i64>) -> Result<(), SortError>
where
    F: Fn(&T) -> i64,
{
    for (index, item) in input.iter().enumerate() {
        let value = key(item);
        if value < 0 {
            return Err(SortError::NegativeValue { index, value });
        }
        match bound {
            Some(bound) if value > bound => {
                return Err(SortError::ValueExceedsBound {
                    index,
                    value,
                    bound,
                });
            }
            _ => {}
        }
    }
    Ok(())
}

fn max_key<T, F>(input: &[T], key: &F, meter: &mut SortMeter) -> i64
where
    F: Fn(&T) -> i64,
{
    let mut max = 0;
    for item in input {
        meter.record_iteration();
        meter.record_comparison();
        let value = key(item);
        if value > max {
            max = value;
        }
    }
    max
}

/// One stable counting pass: tally bucket sizes, prefix-sum them, then
/// place items right to left. Every step of every phase is one iteration.
///
/// `bucket` must map each item into `0..buckets`.
pub(crate) fn counting_pass<T, F>(
    input: &[T],
    bucket: F,
    buckets: usize,
    meter: &mut SortMeter,
) -> Result<Vec<T>, SortError>
where
    T: Clone,
    F: Fn(&T) -> usize,
{
    let mut counts: Vec<usize> = Vec::new();
    counts
        .try_reserve_exact(buckets)
        .map_err(|_| SortError::TableTooLarge {
            entries: buckets as u128,
        })?;
    counts.resize(buckets, 0);

    for item in input {
        meter.record_iteration();
        counts[bucket(item)] += 1;
    }

    for i in 1..buckets {
        meter.record_iteration();
        counts[i] += counts[i - 1];
    }

    let mut order = vec![0usize; input.len()];
    for (index, item) in input.iter().enumerate().rev() {
        meter.record_iteration();
        let slot = &mut counts[bucket(item)];
        *slot -= 1;
        order[*slot] = index;
    }

    Ok(order.into_iter().map(|index| input[index].clone()).collect())
}

impl Sorter for CountingSort {
    fn name(&self) -> &'static str {
        "counting_sort"
    }

    fn sort(&mut self, input: &[i64]) -> Result<Vec<i64>, SortError> {
        self.sort_by_key(input, |&x| x)
    }

    fn statistics(&self) -> SortStatistics {
        self.meter.statistics()
    }
}
