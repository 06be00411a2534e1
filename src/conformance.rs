// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Conformance driving of the ISAAC generators against embedded
//! reference output, plus the optional benchmark loop.

use std::time::{Duration, Instant};

use rand::{RngCore, SeedableRng};

use crate::rngs::{isaac32::Isaac32, isaac64::Isaac64, BlockRng, BLOCK_WORDS};
use crate::utils::write_and_print;
use crate::{stats, strings, testdata, utils};

/// Words drawn per family for the statistical smoke screen.
const SMOKE_SAMPLE_WORDS: usize = 1 << 16;

/// First point of divergence between produced and reference output.
#[derive(Debug, Copy, Clone)]
pub struct Mismatch {
    pub family: &'static str,
    pub block: usize,
    pub word: usize,
    pub expected: u64,
    pub produced: u64,
}

impl Mismatch {
    pub fn format(&self) -> String {
        format!(
            "{}: conformance {} at block {} word {}: expected {:#x} produced {:#x}",
            self.family,
            strings::FAIL_STR,
            self.block,
            self.word,
            self.expected,
            self.produced
        )
    }
}

/// Get the file path used for saving harness results.
pub fn result_file_path() -> String {
    "rslt.txt".to_owned()
}

/// Benchmark tail driven by a signed repeat count.
/// Only a non-negative remaining count performs a real refill; a
/// negative count spins the same number of iterations without touching
/// the generator, so timing loops stay symmetric.
pub fn benchmark_tail<R: BlockRng>(rng: &mut R, block: &mut R::Block, count: i64) {
    let mut iterations = count;
    while iterations != 0 {
        if iterations >= 0 {
            rng.refill(block);
        }
        iterations += if iterations < 0 { 1 } else { -1 };
    }
}

/// Seed the 32-bit family with zeros, discard the first block as the
/// reference programs do, then compare every reference block word for
/// word, stopping at the first divergence.
pub fn verify_isaac32(rng: &mut Isaac32) -> Result<(), Mismatch> {
    rng.seed();
    let mut block = [0u32; BLOCK_WORDS];
    rng.refill(&mut block);
    for (block_idx, expected) in testdata::ISAAC32_EXPECTED.iter().enumerate() {
        rng.refill(&mut block);
        for (word_idx, (&produced, &want)) in block.iter().zip(expected.iter()).enumerate() {
            if produced != want {
                return Err(Mismatch {
                    family: strings::ISAAC32_NAME,
                    block: block_idx,
                    word: word_idx,
                    expected: want as u64,
                    produced: produced as u64,
                });
            }
        }
    }
    Ok(())
}

/// 64-bit counterpart of verify_isaac32.
pub fn verify_isaac64(rng: &mut Isaac64) -> Result<(), Mismatch> {
    rng.seed();
    let mut block = [0u64; BLOCK_WORDS];
    rng.refill(&mut block);
    for (block_idx, expected) in testdata::ISAAC64_EXPECTED.iter().enumerate() {
        rng.refill(&mut block);
        for (word_idx, (&produced, &want)) in block.iter().zip(expected.iter()).enumerate() {
            if produced != want {
                return Err(Mismatch {
                    family: strings::ISAAC64_NAME,
                    block: block_idx,
                    word: word_idx,
                    expected: want,
                    produced,
                });
            }
        }
    }
    Ok(())
}

/// Verify both families, run the optional benchmark tail and the
/// statistical smoke screen on each.
pub fn run_all(extra_iterations: i64) -> Result<(), Mismatch> {
    let result_file_path = result_file_path();
    run_isaac32(extra_iterations, &result_file_path)?;
    run_isaac64(extra_iterations, &result_file_path)?;
    Ok(())
}

fn run_isaac32(extra_iterations: i64, result_file_path: &str) -> Result<(), Mismatch> {
    let mut rng = Isaac32::new();
    verify_isaac32(&mut rng)?;
    write_and_print(
        format!(
            "{:<10}: conformance {}",
            strings::ISAAC32_NAME,
            strings::PASS_STR
        ),
        result_file_path,
    );
    if extra_iterations != 0 {
        let mut block = [0u32; BLOCK_WORDS];
        let start = Instant::now();
        benchmark_tail(&mut rng, &mut block, extra_iterations);
        report_speed(
            strings::ISAAC32_NAME,
            extra_iterations,
            BLOCK_WORDS * 4,
            start.elapsed(),
            result_file_path,
        );
    }
    smoke_screen(strings::ISAAC32_NAME, &mut rng, result_file_path);
    Ok(())
}

fn run_isaac64(extra_iterations: i64, result_file_path: &str) -> Result<(), Mismatch> {
    let mut rng = Isaac64::new();
    verify_isaac64(&mut rng)?;
    write_and_print(
        format!(
            "{:<10}: conformance {}",
            strings::ISAAC64_NAME,
            strings::PASS_STR
        ),
        result_file_path,
    );
    if extra_iterations != 0 {
        let mut block = [0u64; BLOCK_WORDS];
        let start = Instant::now();
        benchmark_tail(&mut rng, &mut block, extra_iterations);
        report_speed(
            strings::ISAAC64_NAME,
            extra_iterations,
            BLOCK_WORDS * 8,
            start.elapsed(),
            result_file_path,
        );
    }
    smoke_screen(strings::ISAAC64_NAME, &mut rng, result_file_path);
    Ok(())
}

/// Run the statistical smoke screen over freshly drawn output.
fn smoke_screen(family: &'static str, test_rng: &mut impl BlockRng, result_file_path: &str) {
    let test_data = stats::generate_test_data(test_rng, SMOKE_SAMPLE_WORDS);
    for (test_id, test) in stats::STAT_TEST_POINTERS.iter().enumerate() {
        let start = Instant::now();
        let p = test(&test_data);
        write_and_print(
            format!(
                "{:<10}: {:<8} Time: {}     p: {:.6}   - {}",
                family,
                strings::STAT_TEST_NAMES[test_id],
                utils::format_elapsed_time(start.elapsed()),
                p,
                if (0.0001..0.9999).contains(&p) {
                    strings::PASS_STR
                } else {
                    strings::FAIL_STR
                }
            ),
            result_file_path,
        );
    }
}

/// Report benchmark throughput, relative to the rand crate's StdRng.
fn report_speed(
    family: &'static str,
    iterations: i64,
    block_bytes: usize,
    elapsed: Duration,
    result_file_path: &str,
) {
    if iterations < 0 {
        // Nothing was generated, only the loop overhead was timed.
        write_and_print(
            format!(
                "{:<10}: {} idle iterations in {}",
                family,
                iterations.unsigned_abs(),
                utils::format_elapsed_time(elapsed)
            ),
            result_file_path,
        );
        return;
    }
    let num_bytes = iterations as usize * block_bytes;
    let speed = num_bytes as f64 / elapsed.as_secs_f64();
    let rel_speed = (speed / reference_speed(num_bytes)) * 100.0;
    write_and_print(
        format!(
            "{:<10}: generated {} in {} (Speed: {}/s  ({:.4}%))",
            family,
            utils::format_byte_count(num_bytes),
            utils::format_elapsed_time(elapsed),
            utils::format_byte_count(speed as usize),
            rel_speed
        ),
        result_file_path,
    );
}

/// Measure the speed of the rand crates default RNG.
/// Return in bytes per second.
fn reference_speed(num_bytes: usize) -> f64 {
    let mut ref_rng = rand::rngs::StdRng::seed_from_u64(0);
    let mut sink: u64 = 0;
    let start = Instant::now();
    for _ in 0..num_bytes / 8 {
        sink ^= ref_rng.next_u64();
    }
    let elapsed = start.elapsed().as_secs_f64();
    std::hint::black_box(sink);
    num_bytes as f64 / elapsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isaac32_conforms() {
        let mut rng = Isaac32::new();
        assert!(verify_isaac32(&mut rng).is_ok());
    }

    #[test]
    fn isaac64_conforms() {
        let mut rng = Isaac64::new();
        assert!(verify_isaac64(&mut rng).is_ok());
    }

    #[test]
    fn negative_count_leaves_state_untouched() {
        let mut spun = Isaac64::new();
        spun.seed();
        let mut control = spun.clone();
        let mut block = [0u64; BLOCK_WORDS];
        benchmark_tail(&mut spun, &mut block, -7);
        let mut a = [0u64; BLOCK_WORDS];
        let mut b = [0u64; BLOCK_WORDS];
        spun.refill(&mut a);
        control.refill(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn positive_count_advances_state() {
        let mut bench = Isaac32::new();
        bench.seed();
        let mut control = bench.clone();
        let mut block = [0u32; BLOCK_WORDS];
        benchmark_tail(&mut bench, &mut block, 3);
        // Exactly three refills happened.
        let mut expected = [0u32; BLOCK_WORDS];
        for _ in 0..3 {
            control.refill(&mut expected);
        }
        assert_eq!(block, expected);
        let mut next_bench = [0u32; BLOCK_WORDS];
        let mut next_control = [0u32; BLOCK_WORDS];
        bench.refill(&mut next_bench);
        control.refill(&mut next_control);
        assert_eq!(next_bench, next_control);
        assert_ne!(next_bench, expected);
    }

    #[test]
    fn zero_count_is_a_no_op() {
        let mut rng = Isaac32::new();
        rng.seed();
        let mut control = rng.clone();
        let mut block = [0u32; BLOCK_WORDS];
        benchmark_tail(&mut rng, &mut block, 0);
        let mut a = [0u32; BLOCK_WORDS];
        let mut b = [0u32; BLOCK_WORDS];
        rng.refill(&mut a);
        control.refill(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn mismatch_report_names_the_divergence() {
        let mismatch = Mismatch {
            family: strings::ISAAC32_NAME,
            block: 1,
            word: 200,
            expected: 0x1234,
            produced: 0x4321,
        };
        let line = mismatch.format();
        assert!(line.contains("block 1"));
        assert!(line.contains("word 200"));
        assert!(line.contains("0x1234"));
        assert!(line.contains(strings::FAIL_STR));
    }
}
