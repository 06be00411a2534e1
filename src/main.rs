// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Conformance testing of the ISAAC family PRNGs against published
//! reference output.

pub mod conformance;
pub mod rngs;
pub mod stats;
mod strings;
pub mod testdata;
pub mod utils;

fn main() {
    let start = std::time::Instant::now();
    // One optional signed argument: a positive value benchmarks that
    // many extra refills after conformance, a negative value spins a
    // do-nothing loop of the same length.
    let extra_iterations = std::env::args()
        .nth(1)
        .map(|arg| utils::parse_c_long(&arg))
        .unwrap_or(0);
    if let Err(mismatch) = conformance::run_all(extra_iterations) {
        utils::write_and_print(mismatch.format(), &conformance::result_file_path());
        std::process::exit(1);
    }
    println!("Full program runtime: {:?}", start.elapsed());
}
