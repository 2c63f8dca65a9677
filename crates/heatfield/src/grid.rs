use crate::constants::{COLD_COLOR, MAX_SUBDIVISIONS};
use crate::heat::SamplePoint;

/// Raw mesh data that can be used by any rendering engine
#[derive(Debug, Clone)]
pub struct MeshData {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 4]>,
    pub indices: Vec<u32>,
}

/// A square plane in the XZ plane, centred on the origin and subdivided into a regular grid.
/// Vertices are laid out row by row along +X, rows advancing along +Z.
#[derive(Debug, Clone)]
pub struct PlaneGrid {
    pub size: f32,
    pub subdivisions: usize,
    points: Vec<SamplePoint>,
}

impl PlaneGrid {
    pub fn new(size: f32, subdivisions: usize) -> Self {
        let subdivisions = subdivisions.clamp(1, MAX_SUBDIVISIONS);
        let half = size * 0.5;
        let step = size / subdivisions as f32;

        let mut points = Vec::with_capacity((subdivisions + 1) * (subdivisions + 1));
        for row in 0..=subdivisions {
            let z = -half + row as f32 * step;
            for col in 0..=subdivisions {
                let x = -half + col as f32 * step;
                points.push(SamplePoint::new(x, z));
            }
        }

        Self {
            size,
            subdivisions,
            points,
        }
    }

    /// Vertices per row (and per column)
    pub fn row_len(&self) -> usize {
        self.subdivisions + 1
    }

    pub fn points(&self) -> &[SamplePoint] {
        &self.points
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Build renderable mesh data at height 0 facing +Y, every vertex starting cold
    pub fn mesh_data(&self) -> MeshData {
        let positions = self.points.iter().map(|p| [p.x, 0.0, p.z]).collect();
        let normals = vec![[0.0, 1.0, 0.0]; self.points.len()];
        let [r, g, b] = COLD_COLOR;
        let colors = vec![[r, g, b, 1.0]; self.points.len()];

        let row_len = self.row_len() as u32;
        let mut indices = Vec::with_capacity(self.subdivisions * self.subdivisions * 6);
        for row in 0..self.subdivisions as u32 {
            for col in 0..self.subdivisions as u32 {
                let a = row * row_len + col;
                let b = a + 1;
                let c = a + row_len;
                let d = c + 1;

                // Counter-clockwise when seen from above
                indices.extend_from_slice(&[a, c, b, b, c, d]);
            }
        }

        MeshData {
            positions,
            normals,
            colors,
            indices,
        }
    }
}
