//! Tiny, fast LCG for the demo data sets.
//! Avoids rand dependency

#[derive(Clone)]
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub fn seed(seed: u64) -> Self {
        Self(seed)
    }
    #[must_use]
    pub fn seed_from_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        Self(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0x9e37_79b9, |d| d.as_nanos() as u64),
        )
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Uniform sample in `[0, 1]`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / (f64::from(u32::MAX))
    }

    /// One step of an integer random walk: a whole number in `-2..=2`,
    /// biased towards zero.
    #[inline]
    pub fn walk_step(&mut self) -> f64 {
        let magnitude = self.next_f64();
        let direction = if self.next_f64() > 0.5 { 2.0 } else { -2.0 };
        (magnitude * direction).round()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_stream() {
        let mut a = Lcg::seed(42);
        let mut b = Lcg::seed(42);
        for _ in 0..16 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn walk_steps_are_small_integers() {
        let mut rng = Lcg::seed(7);
        for _ in 0..1000 {
            let s = rng.walk_step();
            assert_eq!(s, s.trunc());
            assert!((-2.0..=2.0).contains(&s));
        }
    }
}
