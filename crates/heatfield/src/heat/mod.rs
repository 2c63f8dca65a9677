// Pure heat map logic: coil sources, Gaussian heat field and color mapping

pub mod field;

pub use field::{HeatField, HeatSource, SamplePoint, compute_colors, to_vertex_colors};
