use crate::carousel::carousel_positions;
use crate::constants::*;
use crate::error::{HeatSealError, Result};
use crate::fluctuation::PowerBounds;
use crate::grid::PlaneGrid;
use crate::heat::{HeatField, HeatSource};
use crate::labels::TemperatureScale;
use crate::rotation::StepRotationScheduler;
use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::path::Path;
use std::sync::{Mutex, OnceLock, PoisonError};

pub const CONFIG_PATH: &str = "heatseal_config.toml";

static CONFIG: OnceLock<Mutex<HeatSealConfig>> = OnceLock::new();

/// Get a copy of the current configuration, loading it from `CONFIG_PATH` on first use.
/// Falls back to the carousel preset when the file is missing or invalid.
pub fn get_config() -> HeatSealConfig {
    let config_mutex = CONFIG.get_or_init(|| {
        let config = HeatSealConfig::load_from_file(CONFIG_PATH).unwrap_or_default();
        Mutex::new(config)
    });
    config_mutex
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Re-read `CONFIG_PATH`. The cached config is only replaced when the file is valid.
pub fn reload_config() -> Result<HeatSealConfig> {
    let new_config = HeatSealConfig::load_from_file(CONFIG_PATH)?;

    let config_mutex = CONFIG.get_or_init(|| Mutex::new(new_config.clone()));
    *config_mutex.lock().unwrap_or_else(PoisonError::into_inner) = new_config.clone();
    Ok(new_config)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatSealConfig {
    pub heat: HeatConfig,
    pub power: PowerConfig,
    pub rotation: RotationConfig,
    pub layout: LayoutConfig,
    pub labels: LabelConfig,
    pub coils: Vec<CoilConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatConfig {
    pub spread: f32,
    pub normalization: f32,
    /// Contribution multiplier of the innermost coil
    pub inner_boost: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerConfig {
    pub min_power: f32,
    pub max_power: f32,
    pub max_fluctuation: f32,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotationConfig {
    pub step_count: usize,
    pub wait_seconds: f64,
    pub max_step_per_tick: f32,
    pub epsilon: f32,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub block_size: f32,
    pub block_thickness: f32,
    pub subdivisions: usize,
    pub block_count: usize,
    pub circle_radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelConfig {
    pub interval_seconds: f64,
    pub gain: f32,
    pub offset: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoilConfig {
    pub radius: f32,
    pub power: f32,
}

fn coils_with_power(powers: [f32; 4]) -> Vec<CoilConfig> {
    COIL_RADII
        .iter()
        .zip(powers)
        .map(|(&radius, power)| CoilConfig { radius, power })
        .collect()
}

impl HeatSealConfig {
    /// Five blocks on a stepped carousel
    pub fn carousel() -> Self {
        Self {
            heat: HeatConfig {
                spread: DEFAULT_SPREAD,
                normalization: DEFAULT_NORMALIZATION,
                inner_boost: 1.0,
            },
            power: PowerConfig {
                min_power: DEFAULT_MIN_POWER,
                max_power: DEFAULT_MAX_POWER,
                max_fluctuation: DEFAULT_MAX_FLUCTUATION,
                enabled: true,
            },
            rotation: RotationConfig {
                step_count: DEFAULT_STEP_COUNT,
                wait_seconds: DEFAULT_WAIT_SECONDS,
                max_step_per_tick: DEFAULT_MAX_STEP_PER_TICK,
                epsilon: DEFAULT_SNAP_EPSILON,
                enabled: true,
            },
            layout: LayoutConfig {
                block_size: DEFAULT_BLOCK_SIZE,
                block_thickness: DEFAULT_BLOCK_THICKNESS,
                subdivisions: DEFAULT_SUBDIVISIONS,
                block_count: DEFAULT_BLOCK_COUNT,
                circle_radius: DEFAULT_CIRCLE_RADIUS,
            },
            labels: LabelConfig {
                interval_seconds: DEFAULT_LABEL_INTERVAL_SECONDS,
                gain: TemperatureScale::IDENTITY.gain,
                offset: TemperatureScale::IDENTITY.offset,
            },
            coils: coils_with_power([300.0, 180.0, 150.0, 120.0]),
        }
    }

    /// One block at the origin with live power jitter
    pub fn single_block() -> Self {
        let mut config = Self::carousel();
        config.power.max_power = 250.0;
        config.rotation.enabled = false;
        config.layout.block_count = 1;
        config.layout.circle_radius = 0.0;
        config.labels.gain = TemperatureScale::HALF_POWER.gain;
        config.labels.offset = TemperatureScale::HALF_POWER.offset;
        config.coils = coils_with_power([200.0, 180.0, 150.0, 120.0]);
        config
    }

    /// One static block with a boosted inner coil and tighter spread
    pub fn boosted_static() -> Self {
        let mut config = Self::single_block();
        config.heat.spread = 2.2;
        config.heat.inner_boost = 1.6;
        config.power.enabled = false;
        config.power.max_power = 800.0;
        config.labels.gain = TemperatureScale::IDENTITY.gain;
        config.labels.offset = TemperatureScale::IDENTITY.offset;
        config.coils = coils_with_power([800.0, 240.0, 200.0, 160.0]);
        config
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: HeatSealConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        fn invalid(message: &str) -> Result<()> {
            Err(HeatSealError::InvalidParameter(message.to_string()))
        }

        let floats = [
            self.heat.spread,
            self.heat.normalization,
            self.heat.inner_boost,
            self.power.min_power,
            self.power.max_power,
            self.power.max_fluctuation,
            self.rotation.max_step_per_tick,
            self.rotation.epsilon,
            self.layout.block_size,
            self.layout.block_thickness,
            self.layout.circle_radius,
            self.labels.gain,
            self.labels.offset,
        ];
        let coil_floats = self.coils.iter().flat_map(|coil| [coil.radius, coil.power]);
        if !floats.into_iter().chain(coil_floats).all(f32::is_finite)
            || !self.rotation.wait_seconds.is_finite()
            || !self.labels.interval_seconds.is_finite()
        {
            return invalid("every numeric setting must be finite");
        }

        if self.heat.spread <= 0.0 {
            return invalid("heat.spread must be positive");
        }
        if self.heat.normalization <= 0.0 {
            return invalid("heat.normalization must be positive");
        }
        if self.power.min_power > self.power.max_power {
            return invalid("power.min_power must not exceed power.max_power");
        }
        if self.power.max_fluctuation < 0.0 {
            return invalid("power.max_fluctuation must not be negative");
        }
        if self.rotation.step_count == 0 {
            return invalid("rotation.step_count must be at least 1");
        }
        if self.rotation.wait_seconds < 0.0 || self.rotation.max_step_per_tick <= 0.0 {
            return invalid("rotation timing must be positive");
        }
        if self.layout.block_size <= 0.0 {
            return invalid("layout.block_size must be positive");
        }
        if !(1..=MAX_SUBDIVISIONS).contains(&self.layout.subdivisions) {
            return Err(HeatSealError::InvalidParameter(format!(
                "layout.subdivisions must be between 1 and {}",
                MAX_SUBDIVISIONS
            )));
        }
        if self.coils.iter().any(|coil| coil.radius < 0.0) {
            return invalid("coil radius must not be negative");
        }
        Ok(())
    }

    pub fn heat_field(&self) -> HeatField {
        HeatField::new(self.heat.spread, self.heat.normalization)
    }

    pub fn power_bounds(&self) -> PowerBounds {
        PowerBounds::new(
            self.power.min_power,
            self.power.max_power,
            self.power.max_fluctuation,
        )
    }

    pub fn temperature_scale(&self) -> TemperatureScale {
        TemperatureScale {
            gain: self.labels.gain,
            offset: self.labels.offset,
        }
    }

    /// Fresh coil set for one block; the first coil carries the inner boost
    pub fn heat_sources(&self) -> Vec<HeatSource> {
        self.coils
            .iter()
            .enumerate()
            .map(|(idx, coil)| {
                let boost = if idx == 0 { self.heat.inner_boost } else { 1.0 };
                HeatSource::new(coil.radius, coil.power).with_boost(boost)
            })
            .collect()
    }

    pub fn plane_grid(&self) -> PlaneGrid {
        PlaneGrid::new(self.layout.block_size, self.layout.subdivisions)
    }

    /// Block centres, the first one facing the camera
    pub fn block_centers(&self) -> Vec<Vec2> {
        carousel_positions(
            self.layout.block_count,
            self.layout.circle_radius,
            -FRAC_PI_2,
        )
    }

    pub fn scheduler(&self, start_timestamp: f64) -> StepRotationScheduler {
        StepRotationScheduler::with_step_count(
            self.rotation.step_count,
            self.rotation.wait_seconds,
            self.rotation.max_step_per_tick,
            start_timestamp,
        )
        .with_epsilon(self.rotation.epsilon)
    }
}

impl Default for HeatSealConfig {
    fn default() -> Self {
        Self::carousel()
    }
}
