//! Color drift: the slow, bounded random walk the screensaver applies to
//! the object colors every frame.

use rand::Rng;

/// Number of drifting color slots (the original scene drove three objects).
pub const SLOTS: usize = 3;

/// RGBA colors plus the per-channel increments driving the walk.
#[derive(Clone, Debug)]
pub struct ColorDrift {
    pub colors: [[f32; 4]; SLOTS],
    addends: [[f32; 4]; SLOTS],
}

impl ColorDrift {
    /// Start from randomized colors, as the screensaver does on load.
    pub fn new(rng: &mut impl Rng) -> Self {
        let mut drift = Self {
            colors: [[1.0, 0.7, 0.5, 1.0]; SLOTS],
            addends: [[0.001, 0.001, 0.001, 0.0]; SLOTS],
        };
        drift.randomize(rng);
        drift
    }

    /// Re-roll every RGB channel to a random value in [0, 1] (2 decimals).
    /// Alpha is left alone.
    pub fn randomize(&mut self, rng: &mut impl Rng) {
        for color in &mut self.colors {
            for channel in &mut color[..3] {
                *channel = random_float(rng, 0.0, 1.0, 2);
            }
        }
    }

    /// Advance the walk one step: reflect each addend at the [0, 1] channel
    /// boundary, apply it, then jitter it slightly. An addend that lands on
    /// exactly ±0.1 is reset to 0.001 to keep the drift slow.
    pub fn update(&mut self, rng: &mut impl Rng) {
        for slot in 0..SLOTS {
            for ch in 0..3 {
                let channel = &mut self.colors[slot][ch];
                let step = &mut self.addends[slot][ch];
                if *channel >= 1.0 || *channel <= 0.0 {
                    *step = -*step;
                }
                *channel += *step;
                *step += random_float(rng, -0.0001, 0.0001, 4);
                if *step == 0.1 || *step == -0.1 {
                    *step = 0.001;
                }
            }
        }
    }
}

/// Random value in [min, max) rounded to the given number of decimals.
/// `min` must be strictly less than `max`.
pub fn random_float(rng: &mut impl Rng, min: f32, max: f32, decimals: i32) -> f32 {
    let factor = 10f32.powi(decimals);
    (rng.gen_range(min..max) * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn randomize_keeps_channels_in_unit_range() {
        let mut r = rng();
        let drift = ColorDrift::new(&mut r);
        for color in &drift.colors {
            for channel in &color[..3] {
                assert!((0.0..=1.0).contains(channel));
                // Two decimals: scaling by 100 lands on an integer.
                assert!((channel * 100.0 - (channel * 100.0).round()).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn alpha_never_drifts() {
        let mut r = rng();
        let mut drift = ColorDrift::new(&mut r);
        for _ in 0..1000 {
            drift.update(&mut r);
        }
        for color in &drift.colors {
            assert_eq!(color[3], 1.0);
        }
        drift.randomize(&mut r);
        for color in &drift.colors {
            assert_eq!(color[3], 1.0);
        }
    }

    #[test]
    fn update_moves_every_rgb_channel() {
        let mut r = rng();
        let mut drift = ColorDrift::new(&mut r);
        let before = drift.colors;
        drift.update(&mut r);
        for (now, was) in drift.colors.iter().zip(&before) {
            for (a, b) in now[..3].iter().zip(&was[..3]) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn random_float_respects_bounds_and_rounding() {
        let mut r = rng();
        for _ in 0..100 {
            let v = random_float(&mut r, -0.0001, 0.0001, 4);
            assert!((-0.0001..=0.0001).contains(&v));
            assert!((v * 10_000.0 - (v * 10_000.0).round()).abs() < 1e-3);
        }
    }
}
