use xxhash_rust::xxh3::Xxh3;

const XXH3_SEED: u64 = 0x5eed_ca11_0f_7a_b1e5;

/// Derive a stable 64-bit seed from a base seed and a sequence of string parts.
///
/// Used to key placeholder generators (chart bars) by screen and component path so that
/// rendering stays a pure function of its inputs.
pub(crate) fn derive_seed<'a>(base: u64, parts: impl IntoIterator<Item = &'a str>) -> u64 {
    let mut h = Xxh3::with_seed(XXH3_SEED);
    h.update(&base.to_le_bytes());
    for p in parts {
        h.update(&(p.len() as u64).to_le_bytes());
        h.update(p.as_bytes());
    }
    h.digest()
}

/// Small seedable PRNG (SplitMix64).
#[derive(Clone, Copy, Debug)]
pub(crate) struct SplitMix64(u64);

impl SplitMix64 {
    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform `f64` in `[0, 1)`.
    pub(crate) fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform `f64` in `[lo, hi)`.
    pub(crate) fn range_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
