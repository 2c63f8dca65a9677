use crate::constants::COLD_COLOR;
use crate::fluctuation::{PowerBounds, PowerFluctuator};
use crate::grid::PlaneGrid;
use crate::heat::{HeatField, HeatSource, SamplePoint};
use crate::labels::TemperatureScale;
use glam::{Vec2, Vec3};
use rand::Rng;

/// All per-block heat state: its coils, the fixed sample points of its heat plane
/// and the colors last computed for them
#[derive(Debug, Clone)]
pub struct HeatBlock {
    /// Position on the carousel in (x, z); sample points stay block-local
    pub center: Vec2,
    pub sources: Vec<HeatSource>,
    points: Vec<SamplePoint>,
    colors: Vec<Vec3>,
}

impl HeatBlock {
    pub fn new(center: Vec2, sources: Vec<HeatSource>, grid: &PlaneGrid) -> Self {
        let points = grid.points().to_vec();
        let colors = vec![Vec3::from_array(COLD_COLOR); points.len()];
        Self {
            center,
            sources,
            points,
            colors,
        }
    }

    /// Jitter coil power for one simulation tick
    pub fn simulate<R: Rng>(&mut self, rng: &mut R, bounds: &PowerBounds) {
        PowerFluctuator::tick_with(rng, &mut self.sources, bounds);
    }

    /// Recompute the color of every sample point from the current coil power
    pub fn refresh_colors(&mut self, field: &HeatField) {
        field.fill_colors(&self.sources, &self.points, &mut self.colors);
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn colors(&self) -> &[Vec3] {
        &self.colors
    }

    pub fn coil_temperatures(&self, scale: &TemperatureScale) -> Vec<i32> {
        self.sources
            .iter()
            .map(|source| scale.temperature(source.power))
            .collect()
    }
}
