use crate::math::vec2::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable source of uniform samples.
///
/// Ranges accept their bounds in either order. Floating point ranges are
/// quantized to 101 evenly spaced values between the bounds.
#[derive(Debug, Clone)]
pub struct Random {
    rng: StdRng,
}

impl Random {
    /// Seeded generator, or one seeded from entropy when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Restarts the sequence from `seed`.
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Integer in `[min(a, b), max(a, b)]`, both ends inclusive.
    pub fn range_i32(&mut self, a: i32, b: i32) -> i32 {
        self.rng.gen_range(a.min(b)..=a.max(b))
    }

    pub fn range_f64(&mut self, a: f64, b: f64) -> f64 {
        let (min, max) = (a.min(b), a.max(b));
        min + (max - min) * self.percent()
    }

    pub fn range_f32(&mut self, a: f32, b: f32) -> f32 {
        let (min, max) = (a.min(b), a.max(b));
        min + (max - min) * self.percent() as f32
    }

    /// Value in `[0, 1]`.
    pub fn value(&mut self) -> f64 {
        self.range_f64(0.0, 1.0)
    }

    /// Value in `[-1, 1]`.
    pub fn axis(&mut self) -> f64 {
        self.range_f64(-1.0, 1.0)
    }

    /// Either `-1` or `1`.
    pub fn axis_raw(&mut self) -> f64 {
        loop {
            let sample = self.axis();
            if sample < 0.0 {
                return -1.0;
            }
            if sample > 0.0 {
                return 1.0;
            }
        }
    }

    /// Uniformly picked element, `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let last = i32::try_from(items.len() - 1).unwrap_or(i32::MAX);
        let index = self.range_i32(0, last) as usize;
        items.get(index)
    }

    /// Point inside the unit circle.
    pub fn in_circle(&mut self) -> Vec2 {
        let angle = self.rng.gen_range(0..360) as f64;
        let radius = self.rng.gen::<f64>().sqrt();
        Vec2::new(radius, 0.0).rotate(angle)
    }

    fn percent(&mut self) -> f64 {
        self.rng.gen_range(0..=100) as f64 / 100.0
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_degenerate_returns_bound() {
        let mut rnd = Random::new(Some(1));
        for _ in 0..50 {
            assert_eq!(rnd.range_i32(1, 1), 1);
            assert_eq!(rnd.range_f64(2.5, 2.5), 2.5);
        }
    }

    #[test]
    fn test_range_is_order_independent() {
        let mut forward = Random::new(Some(42));
        let mut backward = Random::new(Some(42));
        for _ in 0..100 {
            let f = forward.range_i32(1, 5);
            assert_eq!(f, backward.range_i32(5, 1));
            assert!((1..=5).contains(&f));
        }
    }

    #[test]
    fn test_float_range_is_quantized() {
        let mut rnd = Random::new(Some(3));
        for _ in 0..100 {
            let v = rnd.range_f64(0.0, 1.0);
            assert!((0.0..=1.0).contains(&v));
            let steps = v * 100.0;
            assert!((steps - steps.round()).abs() < 1e-9);
            let f = rnd.range_f32(10.0, -10.0);
            assert!((-10.0..=10.0).contains(&f));
        }
    }

    #[test]
    fn test_set_seed_restarts_sequence() {
        let mut rnd = Random::new(None);
        rnd.set_seed(9);
        let first: Vec<i32> = (0..10).map(|_| rnd.range_i32(0, 359)).collect();
        rnd.set_seed(9);
        let second: Vec<i32> = (0..10).map(|_| rnd.range_i32(0, 359)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_axis_raw_choose_and_in_circle() {
        let mut rnd = Random::new(Some(5));
        for _ in 0..50 {
            let a = rnd.axis_raw();
            assert!(a == 1.0 || a == -1.0);
            assert!(rnd.in_circle().length() <= 1.0 + 1e-12);
        }
        let items = ["a", "b", "c"];
        assert!(items.contains(rnd.choose(&items).unwrap()));
        assert!(rnd.choose::<u8>(&[]).is_none());
    }
}
