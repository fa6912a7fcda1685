use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::SeedableRng;
use rand::rngs::StdRng;

const RNG_SEED: u64 = 0x5EED_2026;

/// Measurement budget for one benchmark group, scaled by input length.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RuntimeTier {
    Small,
    Medium,
    Large,
}

impl RuntimeTier {
    pub fn for_input_len(len: usize) -> Self {
        if len <= 1_000 {
            Self::Small
        } else if len <= 10_000 {
            Self::Medium
        } else {
            Self::Large
        }
    }

    fn sample_size(self) -> usize {
        match self {
            Self::Small | Self::Medium => 15,
            Self::Large => 10,
        }
    }

    fn warm_up(self) -> Duration {
        match self {
            Self::Small => Duration::from_millis(100),
            Self::Medium => Duration::from_millis(500),
            Self::Large => Duration::from_millis(800),
        }
    }

    fn measurement(self) -> Duration {
        match self {
            Self::Small => Duration::from_millis(200),
            Self::Medium => Duration::from_millis(1000),
            Self::Large => Duration::from_millis(1500),
        }
    }

    // Quadratic sorters make large inputs too slow for linear sampling.
    fn sampling_mode(self) -> SamplingMode {
        match self {
            Self::Small => SamplingMode::Auto,
            Self::Medium | Self::Large => SamplingMode::Flat,
        }
    }

    pub fn apply<M: Measurement>(self, group: &mut BenchmarkGroup<'_, M>) {
        group.sample_size(self.sample_size());
        group.warm_up_time(self.warm_up());
        group.measurement_time(self.measurement());
        group.sampling_mode(self.sampling_mode());
    }
}

pub fn default_rng() -> StdRng {
    StdRng::seed_from_u64(RNG_SEED)
}
