// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Statistical sanity checks applied to generator output.
//! These are quality smoke screens, not a substitute for the
//! byte-exact conformance comparison.

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::rngs::BlockRng;
use crate::utils;

/// All sanity tests, indexed in step with `strings::STAT_TEST_NAMES`.
pub const STAT_TEST_POINTERS: [fn(&[u64]) -> f64; 2] = [byte_distribution_test, monobit_test];

/// Collect `sample_size` u64 words from the supplied generator.
pub fn generate_test_data(test_rng: &mut impl BlockRng, sample_size: usize) -> Vec<u64> {
    (0..sample_size).map(|_| test_rng.next()).collect()
}

/// Get p value for given degrees of freedom and chi squared value.
fn chi_squared_p_value(df: u32, chi_squared: f64) -> f64 {
    let chi_squared_dist = ChiSquared::new(df as f64).unwrap();
    chi_squared_dist.cdf(chi_squared)
}

/// Measures the distribution among the bytes of the samples.
/// Returns the p value.
pub fn byte_distribution_test(test_data: &[u64]) -> f64 {
    let mut counts: [usize; 256] = [0; 256];
    for sample in test_data {
        for by in sample.to_le_bytes() {
            counts[by as usize] += 1;
        }
    }
    let expected: f64 = (test_data.len() as f64 * 8.0) / 256.0;
    let mut chi_squared: f64 = 0.0;
    for value in counts {
        chi_squared += (value as f64 - expected).powi(2) / expected;
    }
    1.0 - chi_squared_p_value(255, chi_squared)
}

/// Measures the difference between the number of ones and zeros generated.
/// NIST Special Publication 800-22 Test 2.1
/// Returns the p value.
pub fn monobit_test(test_data: &[u64]) -> f64 {
    let mut difference: i64 = 0;
    for sample in test_data {
        difference += (sample.count_ones() as i64) - 32;
    }
    statrs::function::erf::erfc(
        (difference.abs() as f64 / f64::sqrt(test_data.len() as f64 * 64.0)) * utils::INV_ROOT2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rngs::isaac64::Isaac64;

    const SAMPLE_WORDS: usize = 1 << 14;

    fn isaac_sample() -> Vec<u64> {
        let mut rng = Isaac64::new();
        rng.seed();
        generate_test_data(&mut rng, SAMPLE_WORDS)
    }

    #[test]
    fn isaac_output_is_unremarkable() {
        let data = isaac_sample();
        for test in STAT_TEST_POINTERS {
            let p = test(&data);
            assert!((0.0001..0.9999).contains(&p), "p = {}", p);
        }
    }

    #[test]
    fn degenerate_data_is_flagged() {
        let zeros = vec![0u64; SAMPLE_WORDS];
        assert!(byte_distribution_test(&zeros) < 1e-6);
        assert!(monobit_test(&zeros) < 1e-6);
    }
}
