// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Misc utility functions.

use std::{fs::OpenOptions, io::Write, path::Path, time::Duration};

pub const INV_ROOT2: f64 = 0.7071067811865475;

/// XOR b into a element by element.
/// Excess elements of either slice are left alone.
pub fn xor_in_place<T: std::ops::BitXorAssign + Copy>(a: &mut [T], b: &[T]) {
    for (b1, b2) in a.iter_mut().zip(b.iter()) {
        *b1 ^= *b2;
    }
}

/// Parse a signed decimal integer the way strtol(arg, NULL, 10) does:
/// leading whitespace, optional sign, then the longest run of digits.
/// Anything unparsable yields 0; overflow saturates.
pub fn parse_c_long(arg: &str) -> i64 {
    let trimmed = arg.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let mut value: i64 = 0;
    for ch in digits.chars() {
        match ch.to_digit(10) {
            Some(d) => value = value.saturating_mul(10).saturating_add(d as i64),
            None => break,
        }
    }
    if negative {
        -value
    } else {
        value
    }
}

/// Print a line and append it to the result file.
/// A failed file write is reported but never fatal.
pub fn write_and_print(line: String, file_path: &str) {
    println!("{}", line);
    if let Err(err) = append_line(&line, file_path) {
        eprintln!("Could not write to {}: {}", file_path, err);
    }
}

fn append_line(line: &str, file_path: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(Path::new(file_path))?;
    writeln!(file, "{}", line)
}

/// Format a number of bytes into a pretty String.
/// e.g. 1048576 is 1 MiB
pub fn format_byte_count(num_bytes: usize) -> String {
    // 2**30 = 1073741824
    if num_bytes > 1073741824 {
        format!("{:.2} GiB", (num_bytes as f64 / 1073741824.0))
    // 2**20 = 1048576
    } else if num_bytes > 1048576 {
        format!("{:.2} MiB", (num_bytes as f64 / 1048576.0))
    // 2**10 = 1024
    } else if num_bytes > 1024 {
        format!("{:.2} KiB", (num_bytes as f64 / 1024.0))
    } else {
        format!("{:.2} B", num_bytes as f64)
    }
}

/// Format a duration with millisecond precision.
pub fn format_elapsed_time(elapsed: Duration) -> String {
    format!("{:>9.3}ms", elapsed.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_like_strtol() {
        assert_eq!(parse_c_long("42"), 42);
        assert_eq!(parse_c_long("-17"), -17);
        assert_eq!(parse_c_long("+8"), 8);
        assert_eq!(parse_c_long("  12"), 12);
        // Longest valid prefix only.
        assert_eq!(parse_c_long("99bottles"), 99);
        assert_eq!(parse_c_long("12 34"), 12);
        // No digits at all.
        assert_eq!(parse_c_long(""), 0);
        assert_eq!(parse_c_long("x12"), 0);
        assert_eq!(parse_c_long("-"), 0);
        // Saturation instead of wraparound.
        assert_eq!(parse_c_long("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn xor_handles_short_operands() {
        let mut a = [1u32, 2, 3, 4];
        xor_in_place(&mut a, &[0xff, 0xff]);
        assert_eq!(a, [0xfe, 0xfd, 3, 4]);
    }

    #[test]
    fn byte_counts_are_human_readable() {
        assert_eq!(format_byte_count(512), "512.00 B");
        assert_eq!(format_byte_count(2 * 1048576), "2.00 MiB");
    }
}
