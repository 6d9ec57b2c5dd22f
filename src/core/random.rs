/// Xorshift32 step. State must be non-zero.
#[inline]
pub fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Seed that differs between calls and between page loads.
pub fn entropy_seed() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        (js_sys::Math::random() * f64::from(u32::MAX)) as u32
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        use std::sync::atomic::{AtomicU32, Ordering};
        use std::time::{SystemTime, UNIX_EPOCH};

        static CALLS: AtomicU32 = AtomicU32::new(0);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.subsec_nanos())
            .unwrap_or(0);
        let call = CALLS.fetch_add(1, Ordering::Relaxed);
        // Weyl step keeps back-to-back calls apart within one clock tick
        nanos ^ call.wrapping_add(1).wrapping_mul(0x9E37_79B9)
    }
}

/// Small deterministic generator used for spawn randomization.
#[derive(Clone, Debug)]
pub struct Rng {
    state: u32,
}

impl Rng {
    pub fn new(seed: u32) -> Self {
        // Zero is a fixed point of xorshift
        Self { state: if seed == 0 { 0x9E37_79B9 } else { seed } }
    }

    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// Uniform in [0, 1)
    #[inline]
    pub fn next_f32(&mut self) -> f32 {
        (xorshift32(&mut self.state) >> 8) as f32 / (1u32 << 24) as f32
    }

    /// Uniform index in 0..len. `len` must be non-zero.
    #[inline]
    pub fn index(&mut self, len: usize) -> usize {
        ((self.next_f32() * len as f32) as usize).min(len - 1)
    }

    /// Uniform in [min, max)
    #[inline]
    pub fn range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_f32_stays_in_unit_interval() {
        let mut rng = Rng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f32();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn zero_seed_does_not_stall() {
        let mut rng = Rng::new(0);
        let a = rng.next_f32();
        let b = rng.next_f32();
        assert_ne!(a, b);
    }

    #[test]
    fn entropy_seeds_differ_between_calls() {
        let seeds: Vec<u32> = (0..8).map(|_| entropy_seed()).collect();
        for (i, a) in seeds.iter().enumerate() {
            assert!(seeds[i + 1..].iter().all(|b| b != a), "repeated seed {a}");
        }
    }

    #[test]
    fn index_covers_every_slot() {
        let mut rng = Rng::new(99);
        let mut seen = [false; 9];
        for _ in 0..2_000 {
            seen[rng.index(9)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
