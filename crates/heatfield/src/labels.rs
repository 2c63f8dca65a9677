// Display helpers for coil temperature labels

use serde::{Deserialize, Serialize};

/// Linear mapping from coil power to a displayed whole-degree temperature
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureScale {
    pub gain: f32,
    pub offset: f32,
}

impl TemperatureScale {
    /// Show raw power as the temperature
    pub const IDENTITY: Self = Self {
        gain: 1.0,
        offset: 0.0,
    };

    /// `power / 2 + 20`, used by the single-block rig
    pub const HALF_POWER: Self = Self {
        gain: 0.5,
        offset: 20.0,
    };

    pub fn temperature(&self, power: f32) -> i32 {
        (power * self.gain + self.offset).floor() as i32
    }
}

impl Default for TemperatureScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Fixed-interval gate deciding when labels should be rebuilt
#[derive(Debug, Clone, PartialEq)]
pub struct LabelTimer {
    pub interval: f64,
    last_update: Option<f64>,
}

impl LabelTimer {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            last_update: None,
        }
    }

    /// Returns true on the first call, then once more than `interval` has passed
    pub fn ready(&mut self, now: f64) -> bool {
        let due = match self.last_update {
            None => true,
            Some(last) => now - last > self.interval,
        };
        if due {
            self.last_update = Some(now);
        }
        due
    }
}

/// Human readable carousel position, e.g. "Station 2 of 5"
pub fn station_label(step_index: usize, step_count: usize) -> String {
    format!("Station {} of {}", step_index + 1, step_count)
}
