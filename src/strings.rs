// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! User interaction strings are stored here.

pub const FAIL_STR: &str = "FAILED!!";
pub const PASS_STR: &str = "PASSED";

pub const ISAAC32_NAME: &str = "ISAAC";
pub const ISAAC64_NAME: &str = "ISAAC64";

pub const STAT_TEST_NAMES: [&str; 2] = ["Bytes", "Mono"];
