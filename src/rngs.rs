// Copyright 2025 N. Dornseif
//
// Dual-licensed under Apache 2.0 and MIT terms.

//! Implementation of the ISAAC family of PRNGs.
//! Both word widths implement the BlockRng interface, some feature
//! additional methods like:
//! seed_from_words(seed: &[word])

/// log2 of the state table size.
pub const BLOCK_WORDS_LOG: usize = 8;
/// Words per state table and per refill (2^8 = 256).
pub const BLOCK_WORDS: usize = 1 << BLOCK_WORDS_LOG;

/// General trait for block-refill PRNGs.
pub trait BlockRng {
    /// One refill's worth of output.
    type Block;
    /// Construct an unseeded state with an all-zero seed table.
    fn new() -> Self;
    /// Derive the full internal state from the seed material currently
    /// in the table and reset the accumulators. Must be called once
    /// before any output is drawn.
    fn seed(&mut self);
    /// Advance the state one full sweep and write one block of output
    /// into the caller's buffer.
    fn refill(&mut self, out: &mut Self::Block);
    /// Draw a single u32 from the buffered output and advance the
    /// stream one step.
    fn next_u32(&mut self) -> u32;
    /// Draw a single u64 from the buffered output.
    /// The 32-bit family advances the stream two steps for this.
    fn next(&mut self) -> u64;
}

/// ISAAC, the 32-bit word family.
pub mod isaac32 {
    use super::{BlockRng, BLOCK_WORDS, BLOCK_WORDS_LOG};
    use crate::utils;

    /// Golden ratio bit pattern used to charge the mixing registers.
    const GOLDEN_RATIO: u32 = 0x9e3779b9;
    const HALF: usize = BLOCK_WORDS / 2;

    #[derive(Clone)]
    pub struct Isaac32 {
        /// State table, doubles as the seed material before seed().
        m: [u32; BLOCK_WORDS],
        /// Accumulator.
        a: u32,
        /// Previous result.
        b: u32,
        /// Refill counter.
        c: u32,
        /// Buffered results for single-word draws, consumed from the back.
        buf: [u32; BLOCK_WORDS],
        /// Buffered words remaining.
        n: usize,
    }

    impl core::fmt::Debug for Isaac32 {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.debug_struct("Isaac32")
                .field("a", &self.a)
                .field("b", &self.b)
                .field("c", &self.c)
                .field("n", &self.n)
                .finish()
        }
    }

    /// One pass over the eight mixing registers.
    fn mix(x: &mut [u32; 8]) {
        const SHIFT: [u32; 8] = [11, 2, 8, 16, 10, 4, 8, 9];
        for i in 0..8 {
            if i & 1 == 0 {
                x[i] ^= x[(i + 1) & 7] << SHIFT[i];
            } else {
                x[i] ^= x[(i + 1) & 7] >> SHIFT[i];
            }
            x[(i + 3) & 7] = x[(i + 3) & 7].wrapping_add(x[i]);
            x[(i + 1) & 7] = x[(i + 1) & 7].wrapping_add(x[(i + 2) & 7]);
        }
    }

    /// Table index from the low-order word bits (above the byte offset).
    #[inline]
    fn lower_index(x: u32) -> usize {
        ((x >> 2) as usize) & (BLOCK_WORDS - 1)
    }

    /// Table index from the mid-order word bits.
    #[inline]
    fn upper_index(y: u32) -> usize {
        ((y >> (BLOCK_WORDS_LOG + 2)) as usize) & (BLOCK_WORDS - 1)
    }

    impl Isaac32 {
        /// XOR seed material into the table. Call before seed(); at most
        /// BLOCK_WORDS words are folded in, the rest is ignored.
        pub fn seed_from_words(&mut self, seed: &[u32]) {
            utils::xor_in_place(&mut self.m, seed);
        }
    }

    impl BlockRng for Isaac32 {
        type Block = [u32; BLOCK_WORDS];

        fn new() -> Self {
            Isaac32 {
                m: [0; BLOCK_WORDS],
                a: 0,
                b: 0,
                c: 0,
                buf: [0; BLOCK_WORDS],
                n: 0,
            }
        }

        fn seed(&mut self) {
            self.a = 0;
            self.b = 0;
            self.c = 0;
            self.n = 0;
            let mut x = [GOLDEN_RATIO; 8];
            for _ in 0..4 {
                mix(&mut x);
            }
            // First pass folds the seed material in, second pass feeds
            // the provisional table back into itself.
            for _ in 0..2 {
                for i in (0..BLOCK_WORDS).step_by(8) {
                    for j in 0..8 {
                        x[j] = x[j].wrapping_add(self.m[i + j]);
                    }
                    mix(&mut x);
                    self.m[i..i + 8].copy_from_slice(&x);
                }
            }
        }

        fn refill(&mut self, out: &mut [u32; BLOCK_WORDS]) {
            self.c = self.c.wrapping_add(1);
            let mut a = self.a;
            let mut b = self.b.wrapping_add(self.c);
            for i in 0..BLOCK_WORDS {
                let x = self.m[i];
                let mixed = match i & 3 {
                    0 => a ^ (a << 13),
                    1 => a ^ (a >> 6),
                    2 => a ^ (a << 2),
                    _ => a ^ (a >> 16),
                };
                a = mixed.wrapping_add(self.m[i ^ HALF]);
                let y = self.m[lower_index(x)].wrapping_add(a).wrapping_add(b);
                self.m[i] = y;
                b = self.m[upper_index(y)].wrapping_add(x);
                out[i] = b;
            }
            self.a = a;
            self.b = b;
        }

        fn next_u32(&mut self) -> u32 {
            if self.n == 0 {
                let mut block = [0u32; BLOCK_WORDS];
                self.refill(&mut block);
                self.buf = block;
                self.n = BLOCK_WORDS;
            }
            self.n -= 1;
            self.buf[self.n]
        }

        fn next(&mut self) -> u64 {
            let hi: u64 = self.next_u32() as u64;
            let lo: u64 = self.next_u32() as u64;
            (hi << 32) | lo
        }
    }
}

/// ISAAC64, the 64-bit word family.
/// Shares the structure of the 32-bit family but none of its constants.
pub mod isaac64 {
    use super::{BlockRng, BLOCK_WORDS, BLOCK_WORDS_LOG};
    use crate::utils;

    const GOLDEN_RATIO: u64 = 0x9e3779b97f4a7c13;
    const HALF: usize = BLOCK_WORDS / 2;

    #[derive(Clone)]
    pub struct Isaac64 {
        m: [u64; BLOCK_WORDS],
        a: u64,
        b: u64,
        c: u64,
        buf: [u64; BLOCK_WORDS],
        n: usize,
    }

    impl core::fmt::Debug for Isaac64 {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.debug_struct("Isaac64")
                .field("a", &self.a)
                .field("b", &self.b)
                .field("c", &self.c)
                .field("n", &self.n)
                .finish()
        }
    }

    /// One pass over the eight mixing registers.
    /// Subtract/xor/add with shift directions alternating per step.
    fn mix(x: &mut [u64; 8]) {
        const SHIFT: [u32; 8] = [9, 9, 23, 15, 14, 20, 17, 14];
        for i in 0..8 {
            x[i] = x[i].wrapping_sub(x[(i + 4) & 7]);
            if i & 1 == 0 {
                x[(i + 5) & 7] ^= x[(i + 7) & 7] >> SHIFT[i];
            } else {
                x[(i + 5) & 7] ^= x[(i + 7) & 7] << SHIFT[i];
            }
            x[(i + 7) & 7] = x[(i + 7) & 7].wrapping_add(x[i]);
        }
    }

    #[inline]
    fn lower_index(x: u64) -> usize {
        ((x >> 3) as usize) & (BLOCK_WORDS - 1)
    }

    #[inline]
    fn upper_index(y: u64) -> usize {
        ((y >> (BLOCK_WORDS_LOG + 3)) as usize) & (BLOCK_WORDS - 1)
    }

    impl Isaac64 {
        /// XOR seed material into the table. Call before seed(); at most
        /// BLOCK_WORDS words are folded in, the rest is ignored.
        pub fn seed_from_words(&mut self, seed: &[u64]) {
            utils::xor_in_place(&mut self.m, seed);
        }
    }

    impl BlockRng for Isaac64 {
        type Block = [u64; BLOCK_WORDS];

        fn new() -> Self {
            Isaac64 {
                m: [0; BLOCK_WORDS],
                a: 0,
                b: 0,
                c: 0,
                buf: [0; BLOCK_WORDS],
                n: 0,
            }
        }

        fn seed(&mut self) {
            self.a = 0;
            self.b = 0;
            self.c = 0;
            self.n = 0;
            let mut x = [GOLDEN_RATIO; 8];
            for _ in 0..4 {
                mix(&mut x);
            }
            for _ in 0..2 {
                for i in (0..BLOCK_WORDS).step_by(8) {
                    for j in 0..8 {
                        x[j] = x[j].wrapping_add(self.m[i + j]);
                    }
                    mix(&mut x);
                    self.m[i..i + 8].copy_from_slice(&x);
                }
            }
        }

        fn refill(&mut self, out: &mut [u64; BLOCK_WORDS]) {
            self.c = self.c.wrapping_add(1);
            let mut a = self.a;
            let mut b = self.b.wrapping_add(self.c);
            for i in 0..BLOCK_WORDS {
                let x = self.m[i];
                let mixed = match i & 3 {
                    0 => !(a ^ (a << 21)),
                    1 => a ^ (a >> 5),
                    2 => a ^ (a << 12),
                    _ => a ^ (a >> 33),
                };
                a = mixed.wrapping_add(self.m[i ^ HALF]);
                let y = self.m[lower_index(x)].wrapping_add(a).wrapping_add(b);
                self.m[i] = y;
                b = self.m[upper_index(y)].wrapping_add(x);
                out[i] = b;
            }
            self.a = a;
            self.b = b;
        }

        fn next_u32(&mut self) -> u32 {
            self.next() as u32
        }

        fn next(&mut self) -> u64 {
            if self.n == 0 {
                let mut block = [0u64; BLOCK_WORDS];
                self.refill(&mut block);
                self.buf = block;
                self.n = BLOCK_WORDS;
            }
            self.n -= 1;
            self.buf[self.n]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::isaac32::Isaac32;
    use super::isaac64::Isaac64;
    use super::{BlockRng, BLOCK_WORDS};

    #[test]
    fn isaac32_known_first_words() {
        // Zero seed, first block discarded, as in the reference programs.
        let mut rng = Isaac32::new();
        rng.seed();
        let mut block = [0u32; BLOCK_WORDS];
        rng.refill(&mut block);
        rng.refill(&mut block);
        assert_eq!(block[0], 0xf650e4c8);
        rng.refill(&mut block);
        assert_eq!(block[0], 0x82ac484f);
    }

    #[test]
    fn isaac64_known_first_words() {
        let mut rng = Isaac64::new();
        rng.seed();
        let mut block = [0u64; BLOCK_WORDS];
        rng.refill(&mut block);
        rng.refill(&mut block);
        assert_eq!(block[0], 0x12a8f216af9418c2);
        rng.refill(&mut block);
        assert_eq!(block[0], 0xd20d8c88c8ffe65f);
    }

    #[test]
    fn identical_seeds_give_identical_streams() {
        let mut first = Isaac64::new();
        let mut second = Isaac64::new();
        first.seed();
        second.seed();
        for _ in 0..1000 {
            assert_eq!(first.next(), second.next());
        }
    }

    #[test]
    fn refill_is_not_idempotent() {
        let mut rng = Isaac32::new();
        rng.seed();
        let mut one = [0u32; BLOCK_WORDS];
        let mut two = [0u32; BLOCK_WORDS];
        rng.refill(&mut one);
        rng.refill(&mut two);
        assert_ne!(one, two);
    }

    #[test]
    fn instances_share_no_state() {
        // Two identically seeded states advanced from different
        // call-sites stay in lockstep.
        let mut first = Isaac32::new();
        let mut second = Isaac32::new();
        first.seed();
        second.seed();
        let mut a = [0u32; BLOCK_WORDS];
        let mut b = [0u32; BLOCK_WORDS];
        first.refill(&mut a);
        first.refill(&mut a);
        second.refill(&mut b);
        second.refill(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn streaming_matches_block_output() {
        // Single-word draws consume the refill buffer from the back.
        let mut blocks = Isaac64::new();
        let mut stream = Isaac64::new();
        blocks.seed();
        stream.seed();
        let mut block = [0u64; BLOCK_WORDS];
        blocks.refill(&mut block);
        for i in (0..BLOCK_WORDS).rev() {
            assert_eq!(stream.next(), block[i]);
        }
    }

    #[test]
    fn seed_material_changes_output() {
        let mut zeroed = Isaac32::new();
        let mut salted = Isaac32::new();
        salted.seed_from_words(&[0xdeadbeef, 17]);
        zeroed.seed();
        salted.seed();
        let mut a = [0u32; BLOCK_WORDS];
        let mut b = [0u32; BLOCK_WORDS];
        zeroed.refill(&mut a);
        salted.refill(&mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn seed_material_is_deterministic() {
        let seed: Vec<u64> = (0..BLOCK_WORDS as u64).collect();
        let mut first = Isaac64::new();
        let mut second = Isaac64::new();
        first.seed_from_words(&seed);
        second.seed_from_words(&seed);
        first.seed();
        second.seed();
        for _ in 0..512 {
            assert_eq!(first.next(), second.next());
        }
    }

    #[test]
    fn fresh_state_replays_the_stream() {
        // Seeding is one-way: a used table no longer holds seed
        // material, so replay needs a fresh state.
        let mut rng = Isaac64::new();
        rng.seed();
        let first = rng.next();
        let mut block = [0u64; BLOCK_WORDS];
        rng.refill(&mut block);
        let mut replay = Isaac64::new();
        replay.seed();
        assert_eq!(replay.next(), first);
    }
}
