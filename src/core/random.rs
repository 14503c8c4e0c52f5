use rand::{seq::SliceRandom, Rng};

/// Randomness capability the challenge draw depends on.
///
/// Any [`rand::Rng`] satisfies it, so production can pass `rand::thread_rng()`
/// and tests a seeded `StdRng`.
pub trait RandomSource {
    /// Uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Fisher–Yates shuffle in place.
    fn shuffle<T>(&mut self, items: &mut [T]);
}

impl<R: Rng> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn seeded_sources_repeat() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        let mut left = [1, 2, 3, 4, 5];
        let mut right = [1, 2, 3, 4, 5];
        RandomSource::shuffle(&mut a, &mut left);
        RandomSource::shuffle(&mut b, &mut right);
        assert_eq!(left, right);
        assert_eq!(a.next_f64(), b.next_f64());
    }

    #[test]
    fn next_f64_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1_000 {
            let value = rng.next_f64();
            assert!((0.0..1.0).contains(&value));
        }
    }
}
