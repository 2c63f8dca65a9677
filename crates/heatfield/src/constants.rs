use std::f32::consts::TAU;

/// Gaussian falloff width around each coil ring
pub const DEFAULT_SPREAD: f32 = 2.8;
/// Heat value mapped to full red
pub const DEFAULT_NORMALIZATION: f32 = 300.0;

pub const DEFAULT_MIN_POWER: f32 = 50.0;
pub const DEFAULT_MAX_POWER: f32 = 300.0;
/// Peak-to-peak width of a single power jitter draw
pub const DEFAULT_MAX_FLUCTUATION: f32 = 40.0;

pub const DEFAULT_STEP_COUNT: usize = 5;
pub const DEFAULT_STEP_ANGLE: f32 = TAU / DEFAULT_STEP_COUNT as f32; // 72°
pub const DEFAULT_WAIT_SECONDS: f64 = 5.0;
/// Radians per tick
pub const DEFAULT_MAX_STEP_PER_TICK: f32 = 0.02;
pub const DEFAULT_SNAP_EPSILON: f32 = 0.001;

pub const DEFAULT_BLOCK_SIZE: f32 = 15.0;
pub const DEFAULT_BLOCK_THICKNESS: f32 = 2.0;
pub const DEFAULT_SUBDIVISIONS: usize = 80;
/// Keeps `(subdivisions + 1)²` vertex indices well inside `u32`
pub const MAX_SUBDIVISIONS: usize = 1024;
pub const DEFAULT_BLOCK_COUNT: usize = 5;
pub const DEFAULT_CIRCLE_RADIUS: f32 = 40.0;

pub const DEFAULT_LABEL_INTERVAL_SECONDS: f64 = 1.0;

/// Concentric coil radii in block units (5, 8, 11 and 13 cm)
pub const COIL_RADII: [f32; 4] = [2.5, 4.0, 5.5, 6.5];

/// Colour of a sample point with no heat at all
pub const COLD_COLOR: [f32; 3] = [0.0, 0.0, 1.0];
