//! Benchmark suite: canonical datasets, verification against the ascending
//! reference, and human-readable reports.

use std::fmt;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::{ALL_ALGORITHMS, SortError, SortStatistics, Sorter};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Dataset {
    Sorted,
    Reversed,
    Random,
}

pub const DATASETS: [Dataset; 3] = [Dataset::Sorted, Dataset::Reversed, Dataset::Random];

impl Dataset {
    pub fn label(self) -> &'static str {
        match self {
            Self::Sorted => "Sorted",
            Self::Reversed => "Reversed",
            Self::Random => "Random",
        }
    }
}

/// Values `1..=size` in the order the dataset asks for.
pub fn generate<R: Rng + ?Sized>(dataset: Dataset, size: usize, rng: &mut R) -> Vec<i64> {
    let top = size as i64;
    match dataset {
        Dataset::Sorted => (1..=top).collect(),
        Dataset::Reversed => (1..=top).rev().collect(),
        Dataset::Random => {
            let mut data: Vec<i64> = (1..=top).collect();
            data.shuffle(rng);
            data
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SuiteConfig {
    pub size: usize,
    /// `None` shuffles the random dataset from OS entropy.
    pub seed: Option<u64>,
}

pub const DEFAULT_SUITE: SuiteConfig = SuiteConfig {
    size: 1000,
    seed: None,
};

impl Default for SuiteConfig {
    fn default() -> Self {
        DEFAULT_SUITE
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    Passed,
    Unsorted,
    Failed(SortError),
}

#[derive(Clone, Debug)]
pub struct RunReport {
    pub sorter: &'static str,
    pub dataset: Dataset,
    pub verdict: Verdict,
    pub statistics: SortStatistics,
}

impl RunReport {
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dataset = self.dataset.label();
        match &self.verdict {
            Verdict::Passed => write!(f, "[{} - {}] {}", self.sorter, dataset, self.statistics),
            Verdict::Unsorted => write!(
                f,
                "{} failed to sort list {} correctly ({})",
                self.sorter, dataset, self.statistics
            ),
            Verdict::Failed(err) => write!(
                f,
                "{} failed to sort list {} correctly: {} ({})",
                self.sorter, dataset, err, self.statistics
            ),
        }
    }
}

/// Ordered `(label, sorter)` pairs; reports follow this order.
pub type Lineup = Vec<(&'static str, Box<dyn Sorter>)>;

pub fn default_lineup() -> Lineup {
    ALL_ALGORITHMS
        .iter()
        .map(|&algo| (algo.label(), algo.build()))
        .collect()
}

/// Sorts every dataset with every sorter and checks each result against
/// the ascending reference.
pub fn run_suite(lineup: &mut Lineup, config: SuiteConfig) -> Vec<RunReport> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let datasets: Vec<(Dataset, Vec<i64>)> = DATASETS
        .iter()
        .map(|&dataset| (dataset, generate(dataset, config.size, &mut rng)))
        .collect();
    let reference = generate(Dataset::Sorted, config.size, &mut rng);

    let mut reports = Vec::with_capacity(lineup.len() * datasets.len());
    for (label, sorter) in lineup.iter_mut() {
        for (dataset, data) in &datasets {
            let verdict = match sorter.sort(data) {
                Ok(output) if output == reference => Verdict::Passed,
                Ok(_) => Verdict::Unsorted,
                Err(err) => Verdict::Failed(err),
            };
            let report = RunReport {
                sorter: *label,
                dataset: *dataset,
                verdict,
                statistics: sorter.statistics(),
            };

            if report.passed() {
                debug!("{report}");
            } else {
                warn!("{report}");
            }
            reports.push(report);
        }
    }
    reports
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{CountingSort, InsertionSort};

    /// Returns its input untouched.
    struct Identity;

    impl Sorter for Identity {
        fn name(&self) -> &'static str {
            "identity"
        }

        fn sort(&mut self, input: &[i64]) -> Result<Vec<i64>, SortError> {
            Ok(input.to_vec())
        }

        fn statistics(&self) -> SortStatistics {
            SortStatistics::default()
        }
    }

    #[test]
    fn datasets_are_permutations_of_one_to_n() {
        let mut rng = StdRng::seed_from_u64(0xDA7A_2026);
        let expected: Vec<i64> = (1..=64).collect();
        for &dataset in &DATASETS {
            let mut data = generate(dataset, 64, &mut rng);
            assert_eq!(data.len(), 64);
            data.sort_unstable();
            assert_eq!(data, expected, "dataset={}", dataset.label());
        }
    }

    #[test]
    fn reversed_dataset_descends() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate(Dataset::Reversed, 4, &mut rng), vec![4, 3, 2, 1]);
        assert_eq!(generate(Dataset::Sorted, 0, &mut rng), Vec::<i64>::new());
    }

    #[test]
    fn default_suite_passes_everywhere() {
        let mut lineup = default_lineup();
        let config = SuiteConfig {
            size: 300,
            seed: Some(0x5EED_2026),
        };
        let reports = run_suite(&mut lineup, config);
        assert_eq!(reports.len(), ALL_ALGORITHMS.len() * DATASETS.len());
        for report in &reports {
            assert!(report.passed(), "{report}");
        }
    }

    #[test]
    fn reports_follow_lineup_order() {
        let mut lineup = default_lineup();
        let config = SuiteConfig {
            size: 10,
            seed: Some(3),
        };
        let reports = run_suite(&mut lineup, config);
        let order: Vec<(&str, Dataset)> = reports.iter().map(|r| (r.sorter, r.dataset)).collect();

        let mut expected = Vec::new();
        for algo in ALL_ALGORITHMS {
            for dataset in DATASETS {
                expected.push((algo.label(), dataset));
            }
        }
        assert_eq!(order, expected);
    }

    #[test]
    fn detects_unsorted_and_failed_runs() {
        let tiny_counting = CountingSort::with_bound(2).unwrap();
        let mut lineup: Lineup = vec![
            ("Identity", Box::new(Identity) as Box<dyn Sorter>),
            ("Tiny Counting Sort", Box::new(tiny_counting) as Box<dyn Sorter>),
            ("Insertion Sort", Box::new(InsertionSort::new()) as Box<dyn Sorter>),
        ];
        let config = SuiteConfig {
            size: 20,
            seed: Some(9),
        };
        let reports = run_suite(&mut lineup, config);

        let identity: Vec<&Verdict> = reports[0..3].iter().map(|r| &r.verdict).collect();
        assert_eq!(
            identity,
            vec![&Verdict::Passed, &Verdict::Unsorted, &Verdict::Unsorted]
        );
        for report in &reports[3..6] {
            assert!(matches!(
                report.verdict,
                Verdict::Failed(SortError::ValueExceedsBound { bound: 2, .. })
            ));
        }
        assert!(reports[6..].iter().all(RunReport::passed));
    }

    #[test]
    fn report_lines() {
        let passed = RunReport {
            sorter: "Merge Sort",
            dataset: Dataset::Random,
            verdict: Verdict::Passed,
            statistics: SortStatistics::default(),
        };
        assert_eq!(
            passed.to_string(),
            "[Merge Sort - Random] Statistics for last sort: Duration 0ns / 0 Iterations / 0 Comparisons"
        );

        let unsorted = RunReport {
            verdict: Verdict::Unsorted,
            ..passed.clone()
        };
        assert!(
            unsorted
                .to_string()
                .starts_with("Merge Sort failed to sort list Random correctly (")
        );
    }

    #[test]
    fn lineup_labels_are_unique() {
        let lineup = default_lineup();
        let labels: HashSet<&str> = lineup.iter().map(|(label, _)| *label).collect();
        assert_eq!(labels.len(), lineup.len());
    }
}
