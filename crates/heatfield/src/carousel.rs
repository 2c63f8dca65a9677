use glam::Vec2;
use std::f32::consts::TAU;

/// Block centres evenly spaced on a circle in the XZ plane
///
/// # Arguments
/// * `count` - Number of blocks
/// * `radius` - Circle radius; 0 stacks every block on the origin
/// * `angle_offset` - Angle of the first block, in radians
///
/// # Returns
/// (x, z) centre of each block
pub fn carousel_positions(count: usize, radius: f32, angle_offset: f32) -> Vec<Vec2> {
    (0..count)
        .map(|i| {
            let angle = (i as f32 / count as f32) * TAU + angle_offset;
            Vec2::new(angle.cos(), angle.sin()) * radius
        })
        .collect()
}
