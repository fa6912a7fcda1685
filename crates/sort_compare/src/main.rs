use std::process::ExitCode;

use instrumented_sort::harness::{DEFAULT_SUITE, default_lineup, run_suite};
use log::{LevelFilter, error};

fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(LevelFilter::Info)
        .parse_default_env()
        .init();

    println!("Sorting Algorithm Comparison");
    println!("~~~~~~~~~~~~~~~~~~~~~~~~~~~~");

    let mut lineup = default_lineup();
    let reports = run_suite(&mut lineup, DEFAULT_SUITE);
    for report in &reports {
        println!("{report}");
    }

    let failures = reports.iter().filter(|report| !report.passed()).count();
    if failures > 0 {
        error!("{failures} of {} runs failed", reports.len());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
