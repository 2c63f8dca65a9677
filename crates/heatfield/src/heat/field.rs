// Pure heat field calculation logic (engine-agnostic)

use glam::{Vec2, Vec3};

/// A circular heating coil centred on the block origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatSource {
    radius: f32,
    /// Current power, mutated every tick by the power fluctuator
    pub power: f32,
    boost: f32,
}

impl HeatSource {
    pub fn new(radius: f32, power: f32) -> Self {
        Self {
            radius,
            power,
            boost: 1.0,
        }
    }

    /// Scale this coil's contribution, e.g. to emphasise the inner coil
    pub fn with_boost(mut self, boost: f32) -> Self {
        self.boost = boost;
        self
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn boost(&self) -> f32 {
        self.boost
    }

    /// Gaussian contribution of this coil at radial distance `r` from the block origin
    pub fn contribution(&self, r: f32, spread: f32) -> f32 {
        let dr = r - self.radius;
        self.boost * self.power * (-(dr * dr) / (spread * spread)).exp()
    }
}

/// A fixed point on the block's heat plane, in block-local (x, z)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePoint {
    pub x: f32,
    pub z: f32,
}

impl SamplePoint {
    pub fn new(x: f32, z: f32) -> Self {
        Self { x, z }
    }

    /// Distance from the block origin, where every coil is centred
    pub fn radial_distance(&self) -> f32 {
        Vec2::new(self.x, self.z).length()
    }
}

/// Heat field parameters shared by every block of a scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatField {
    /// Gaussian falloff width, assumed > 0
    pub spread: f32,
    /// Heat value mapped to `t = 1`
    pub normalization: f32,
}

impl HeatField {
    pub fn new(spread: f32, normalization: f32) -> Self {
        Self {
            spread,
            normalization,
        }
    }

    /// Summed, unnormalized heat at radial distance `r`
    pub fn intensity_at(&self, sources: &[HeatSource], r: f32) -> f32 {
        sources
            .iter()
            .map(|source| source.contribution(r, self.spread))
            .sum()
    }

    /// Normalize raw heat into the gradient parameter `t` in [0, 1]
    pub fn heat_to_t(&self, heat: f32) -> f32 {
        (heat / self.normalization).clamp(0.0, 1.0)
    }

    /// Blue -> green -> red gradient with green peaking at `t = 0.5`
    ///
    /// # Returns
    /// RGB color as Vec3 (values in range 0.0-1.0)
    pub fn gradient(t: f32) -> Vec3 {
        let t = t.clamp(0.0, 1.0);
        Vec3::new(t, 1.0 - (t - 0.5).abs() * 2.0, 1.0 - t)
    }

    pub fn color_at(&self, sources: &[HeatSource], point: SamplePoint) -> Vec3 {
        let heat = self.intensity_at(sources, point.radial_distance());
        Self::gradient(self.heat_to_t(heat))
    }

    /// Compute one color per sample point
    pub fn compute_colors(&self, sources: &[HeatSource], points: &[SamplePoint]) -> Vec<Vec3> {
        points
            .iter()
            .map(|&point| self.color_at(sources, point))
            .collect()
    }

    /// Same as `compute_colors` but writes into an existing buffer.
    /// Only `min(points.len(), out.len())` entries are written.
    pub fn fill_colors(&self, sources: &[HeatSource], points: &[SamplePoint], out: &mut [Vec3]) {
        for (color, &point) in out.iter_mut().zip(points) {
            *color = self.color_at(sources, point);
        }
    }
}

/// Stateless form of [`HeatField::compute_colors`]
pub fn compute_colors(
    sources: &[HeatSource],
    points: &[SamplePoint],
    spread: f32,
    normalization: f32,
) -> Vec<Vec3> {
    HeatField::new(spread, normalization).compute_colors(sources, points)
}

/// Expand RGB colors into the RGBA layout vertex color buffers expect
pub fn to_vertex_colors(colors: &[Vec3]) -> Vec<[f32; 4]> {
    colors.iter().map(|c| [c.x, c.y, c.z, 1.0]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn reference_sources() -> Vec<HeatSource> {
        vec![
            HeatSource::new(2.5, 300.0),
            HeatSource::new(4.0, 180.0),
            HeatSource::new(5.5, 150.0),
            HeatSource::new(6.5, 120.0),
        ]
    }

    #[rstest]
    #[case(2.5, 300.0)]
    #[case(4.0, 180.0)]
    #[case(6.5, 42.0)]
    fn test_isolated_source_peaks_at_its_power(#[case] radius: f32, #[case] power: f32) {
        let field = HeatField::new(2.8, 300.0);
        let sources = [HeatSource::new(radius, power)];

        assert_relative_eq!(field.intensity_at(&sources, radius), power);
    }

    #[test]
    fn test_boost_scales_contribution() {
        let field = HeatField::new(2.2, 300.0);
        let plain = [HeatSource::new(2.5, 100.0)];
        let boosted = [HeatSource::new(2.5, 100.0).with_boost(1.6)];

        assert_relative_eq!(field.intensity_at(&boosted, 3.0), field.intensity_at(&plain, 3.0) * 1.6);
    }

    #[test]
    fn test_gradient_channel_identities() {
        for i in 0..=1000 {
            let t = i as f32 / 1000.0;
            let color = HeatField::gradient(t);

            assert_eq!(color.x + color.z, 1.0);
            assert_eq!(color.y, 1.0 - (t - 0.5).abs() * 2.0);
        }
    }

    #[rstest]
    #[case(f32::MAX)]
    #[case(1.0e9)]
    #[case(-1.0e9)]
    #[case(-0.5)]
    #[case(0.0)]
    fn test_colors_stay_in_unit_range(#[case] heat: f32) {
        let field = HeatField::new(2.8, 300.0);
        let color = HeatField::gradient(field.heat_to_t(heat));

        for channel in color.to_array() {
            assert!((0.0..=1.0).contains(&channel), "channel {channel} out of range");
        }
    }

    #[test]
    fn test_ring_sample_is_fully_red() {
        let colors = compute_colors(&reference_sources(), &[SamplePoint::new(2.5, 0.0)], 2.8, 300.0);

        assert_eq!(colors, vec![Vec3::new(1.0, 0.0, 0.0)]);
    }

    #[test]
    fn test_center_sample_sits_below_ring_heat() {
        let field = HeatField::new(2.8, 300.0);
        let sources = reference_sources();

        let center = field.heat_to_t(field.intensity_at(&sources, 0.0));
        let ring = field.heat_to_t(field.intensity_at(&sources, 2.5));

        // The inner coil's tail still reaches the centre of the block
        assert_relative_eq!(center, 0.541, epsilon = 0.005);
        assert!(center < ring);
    }

    #[test]
    fn test_far_sample_is_nearly_blue() {
        let field = HeatField::new(2.8, 300.0);
        let color = field.color_at(&reference_sources(), SamplePoint::new(0.0, 20.0));

        assert!(color.x < 0.01);
        assert!(color.z > 0.99);
    }

    #[test]
    fn test_empty_sources_yield_cold_colors() {
        let points = [SamplePoint::new(0.0, 0.0), SamplePoint::new(3.0, 4.0)];
        let colors = compute_colors(&[], &points, 2.8, 300.0);

        assert_eq!(colors, vec![Vec3::new(0.0, 0.0, 1.0); 2]);
    }

    #[test]
    fn test_empty_points_yield_no_colors() {
        assert!(compute_colors(&reference_sources(), &[], 2.8, 300.0).is_empty());
    }

    #[test]
    fn test_fill_colors_matches_compute_colors() {
        let field = HeatField::new(2.8, 300.0);
        let sources = reference_sources();
        let points: Vec<SamplePoint> = (0..20)
            .map(|i| SamplePoint::new(i as f32 * 0.4 - 4.0, 1.5))
            .collect();

        let mut buffer = vec![Vec3::ZERO; points.len()];
        field.fill_colors(&sources, &points, &mut buffer);

        assert_eq!(buffer, field.compute_colors(&sources, &points));
    }

    #[test]
    fn test_field_is_radially_symmetric() {
        let field = HeatField::new(2.8, 300.0);
        let sources = reference_sources();

        let a = field.color_at(&sources, SamplePoint::new(3.0, 4.0));
        let b = field.color_at(&sources, SamplePoint::new(-4.0, -3.0));

        assert_relative_eq!(a.x, b.x);
        assert_relative_eq!(a.y, b.y);
        assert_relative_eq!(a.z, b.z);
    }

    #[test]
    fn test_to_vertex_colors_appends_opaque_alpha() {
        let rgba = to_vertex_colors(&[Vec3::new(0.25, 0.5, 0.75)]);

        assert_eq!(rgba, vec![[0.25, 0.5, 0.75, 1.0]]);
    }
}
