//! Random Source
//!
//! Small injectable source of uniform indices. The gallery uses it to backfill
//! similar-artwork suggestions; tests swap in a seeded or scripted source.

/// Source of uniformly distributed indices
pub trait RandomSource {
    /// Return an index in `0..upper`. `upper` is always non-zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// xorshift64* generator. Not cryptographically secure.
#[derive(Debug, Clone)]
pub struct Prng {
    state: u64,
}

impl Prng {
    pub fn new(seed: u64) -> Self {
        // Zero is a fixed point of xorshift.
        let seed = if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed };
        Self { state: seed }
    }

    /// Seed from the wall clock, giving a different sequence per run
    pub fn from_clock() -> Self {
        let now = chrono::Utc::now();
        let nanos = now
            .timestamp_nanos_opt()
            .unwrap_or_else(|| now.timestamp_millis().wrapping_mul(1_000_000));
        Self::new(nanos as u64)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }
}

impl Default for Prng {
    fn default() -> Self {
        Self::from_clock()
    }
}

impl RandomSource for Prng {
    fn next_index(&mut self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        ((self.next_u64() >> 32) % upper as u64) as usize
    }
}

/// Replays a fixed list of indices, clamped to the requested range.
/// Falls back to 0 once the script runs out.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    pos: usize,
}

#[cfg(test)]
impl ScriptedSource {
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            pos: 0,
        }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedSource {
    fn next_index(&mut self, upper: usize) -> usize {
        let value = self.script.get(self.pos).copied().unwrap_or(0);
        self.pos += 1;
        value.min(upper.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prng_stays_in_range() {
        let mut rng = Prng::new(7);
        for upper in 1..20 {
            for _ in 0..50 {
                assert!(rng.next_index(upper) < upper);
            }
        }
    }

    #[test]
    fn test_prng_is_reproducible() {
        let mut a = Prng::new(42);
        let mut b = Prng::new(42);
        let xs: Vec<_> = (0..10).map(|_| a.next_index(100)).collect();
        let ys: Vec<_> = (0..10).map(|_| b.next_index(100)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = Prng::new(0);
        let draws: Vec<_> = (0..8).map(|_| rng.next_index(1000)).collect();
        assert!(draws.iter().any(|d| *d != draws[0]));
    }

    #[test]
    fn test_scripted_source_clamps() {
        let mut src = ScriptedSource::new(vec![5, 1]);
        assert_eq!(src.next_index(3), 2);
        assert_eq!(src.next_index(3), 1);
        assert_eq!(src.next_index(3), 0);
    }
}
