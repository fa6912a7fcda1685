use std::fmt;
use std::time::{Duration, Instant};

/// Work counters and elapsed time of the most recent sort call.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SortStatistics {
    pub comparisons: u64,
    pub iterations: u64,
    pub duration: Duration,
}

impl fmt::Display for SortStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Statistics for last sort: Duration {:?} / {} Iterations / {} Comparisons",
            self.duration, self.iterations, self.comparisons
        )
    }
}

/// Counter/timer pair owned by every sorter.
///
/// A sort call brackets its whole body with [`SortMeter::begin`] and
/// [`SortMeter::finish`]; everything in between charges work through
/// [`SortMeter::record_comparison`] and [`SortMeter::record_iteration`].
#[derive(Clone, Debug, Default)]
pub struct SortMeter {
    stats: SortStatistics,
    started: Option<Instant>,
}

impl SortMeter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.stats.comparisons = 0;
        self.stats.iterations = 0;
    }

    #[inline]
    pub fn record_comparison(&mut self) {
        self.stats.comparisons += 1;
    }

    #[inline]
    pub fn record_iteration(&mut self) {
        self.stats.iterations += 1;
    }

    pub fn start_timing(&mut self) {
        self.stats.duration = Duration::ZERO;
        self.started = Some(Instant::now());
    }

    pub fn stop_timing(&mut self) {
        if let Some(start) = self.started.take() {
            self.stats.duration = start.elapsed();
        }
    }

    pub fn begin(&mut self) {
        self.reset();
        self.start_timing();
    }

    pub fn finish(&mut self) {
        self.stop_timing();
    }

    pub fn statistics(&self) -> SortStatistics {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_clears_previous_counters() {
        let mut meter = SortMeter::new();
        meter.begin();
        meter.record_comparison();
        meter.record_iteration();
        meter.record_iteration();
        meter.finish();
        assert_eq!(meter.statistics().comparisons, 1);
        assert_eq!(meter.statistics().iterations, 2);

        meter.begin();
        meter.finish();
        assert_eq!(meter.statistics().comparisons, 0);
        assert_eq!(meter.statistics().iterations, 0);
    }

    #[test]
    fn stop_without_start_keeps_duration() {
        let mut meter = SortMeter::new();
        meter.stop_timing();
        assert_eq!(meter.statistics().duration, Duration::ZERO);
    }

    #[test]
    fn display_lists_all_fields() {
        let stats = SortStatistics {
            comparisons: 7,
            iterations: 11,
            duration: Duration::from_micros(3),
        };
        assert_eq!(
            stats.to_string(),
            "Statistics for last sort: Duration 3µs / 11 Iterations / 7 Comparisons"
        );
    }
}
