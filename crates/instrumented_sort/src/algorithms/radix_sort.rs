use log::{debug, trace};

use super::counting_sort::{check_keys, counting_pass};
use crate::{SortError, SortMeter, SortStatistics, Sorter};

const RADIX: u64 = 10;

/// LSD radix sort in base 10, one stable counting pass per digit.
///
/// `max_level` is the first power of ten known to exceed every key seen so
/// far. It persists across calls and only grows, so a sorter that once saw a
/// large key keeps running that many digit passes.
#[derive(Clone, Debug)]
pub struct RadixSort {
    meter: SortMeter,
    max_level: u64,
}

impl Default for RadixSort {
    fn default() -> Self {
        Self {
            meter: SortMeter::new(),
            max_level: 1,
        }
    }
}

impl RadixSort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_level(&self) -> u64 {
        self.max_level
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
                "radix_sort: {} values, {}",
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
        check_keys(input, key, None)?;
        let mut current = input.to_vec();
        if current.len() <= 1 {
            return Ok(current);
        }

        let mut level = 1_u64;
        loop {
            self.meter.record_iteration();
            if level == 1 {
                self.grow_max_level(&current, key);
            }

            current = counting_pass(
                &current,
                |item| ((key(item) as u64 / level) % RADIX) as usize,
                RADIX as usize,
                &mut self.meter,
            )?;

            match level.checked_mul(RADIX) {
                Some(next) if next <= self.max_level => level = next,
                _ => break,
            }
        }

        Ok(current)
    }

    fn grow_max_level<T, F>(&mut self, items: &[T], key: &F)
    where
        F: Fn(&T) -> i64,
    {
        let before = self.max_level;
        for item in items {
            self.meter.record_comparison();
            let value = key(item) as u64;
            while value >= self.max_level {
                match self.max_level.checked_mul(RADIX) {
                    Some(next) => self.max_level = next,
                    None => break,
                }
            }
        }

        if self.max_level != before {
            debug!(
                "radix_sort: max level grew from {before} to {}",
                self.max_level
            );
        }
    }
}

impl Sorter for RadixSort {
    fn name(&self) -> &'static str {
        "radix_sort"
    }

    fn sort(&mut self, input: &[i64]) -> Result<Vec<i64>, SortError> {
        self.sort_by_key(input, |&x| x)
    }

    fn statistics(&self) -> SortStatistics {
        self.meter.statistics()
    }
}
