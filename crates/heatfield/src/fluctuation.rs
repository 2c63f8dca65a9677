// Simulated coil power jitter: a clamped first-order random walk

use crate::heat::HeatSource;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerBounds {
    pub min_power: f32,
    pub max_power: f32,
    /// Peak-to-peak width of one draw; each tick moves power by at most half of it
    pub max_fluctuation: f32,
}

impl PowerBounds {
    pub fn new(min_power: f32, max_power: f32, max_fluctuation: f32) -> Self {
        Self {
            min_power,
            max_power,
            max_fluctuation,
        }
    }

    /// Unlike `f32::clamp`, a NaN bound is ignored instead of panicking
    pub fn clamp(&self, power: f32) -> f32 {
        power.max(self.min_power).min(self.max_power)
    }
}

/// Pure power fluctuation logic (no engine dependencies)
pub struct PowerFluctuator;

impl PowerFluctuator {
    /// Jitter every source's power using the thread-local generator
    pub fn tick(sources: &mut [HeatSource], bounds: &PowerBounds) {
        Self::tick_with(&mut rand::rng(), sources, bounds);
    }

    /// Jitter every source's power with a caller-supplied generator
    ///
    /// # Arguments
    /// * `rng` - Random source for the uniform draws
    /// * `sources` - Coils to mutate in place
    /// * `bounds` - Clamp range and fluctuation width
    pub fn tick_with<R: Rng>(rng: &mut R, sources: &mut [HeatSource], bounds: &PowerBounds) {
        let half = bounds.max_fluctuation * 0.5;

        for source in sources.iter_mut() {
            let delta = if half.is_finite() && half > 0.0 {
                rng.random_range(-half..=half)
            } else {
                0.0
            };
            source.power = bounds.clamp(source.power + delta);
        }
    }
}
