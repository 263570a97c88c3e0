//! Deterministic hashing and seeded pseudo-randomness.
//!
//! Every "random" choice in page synthesis is derived from the slug, so the
//! same slug yields the same page on every run and every platform. Both
//! functions here are bit-compatible with the classic JavaScript string hash
//! and the `9301/49297/233280` linear congruential generator, which keeps
//! already-published titles and link orders stable.

/// Multiplier of the LCG.
const LCG_MULTIPLIER: u64 = 9301;
/// Increment of the LCG.
const LCG_INCREMENT: u64 = 49297;
/// Modulus of the LCG.
const LCG_MODULUS: u64 = 233_280;

/// Polynomial rolling hash over UTF-16 code units.
///
/// Computes `h = h * 31 + unit` with 32-bit signed wraparound and returns
/// the absolute value, so the result is always non-negative.
pub fn string_hash(s: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}

/// Linear congruential generator seeded from an integer.
///
/// Each call to [`SeededRandom::next_f64`] advances the state and yields a
/// value in `[0, 1)`. Two generators built from the same seed produce the
/// same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    state: u64,
}

impl SeededRandom {
    /// Create a generator from a seed.
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
        }
    }

    /// Create a generator seeded from the hash of `s`.
    pub fn from_str_seed(s: &str) -> Self {
        Self::new(string_hash(s))
    }

    /// Advance the generator and return a value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
        self.state as f64 / LCG_MODULUS as f64
    }

    /// Pick an index in `0..len` as `floor(next * len)`.
    ///
    /// Returns `None` for an empty range.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = (self.next_f64() * len as f64).floor() as usize;
        Some(index.min(len - 1))
    }
}
