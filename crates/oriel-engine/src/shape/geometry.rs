use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// One interleaved vertex as submitted to the driver.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Clip-space position.
    pub pos: [f32; 3],
    /// Normalized straight-alpha RGBA.
    pub color: [f32; 4],
}

/// CPU-side shape data, ready for upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Builds geometry applying one color to every vertex.
    pub fn uniform(positions: &[[f32; 3]], indices: &[u32], color: Color) -> Self {
        let rgba = color.to_normalized();
        Self {
            vertices: positions
                .iter()
                .map(|&pos| Vertex { pos, color: rgba })
                .collect(),
            indices: indices.to_vec(),
        }
    }

    /// Builds geometry from an explicit per-vertex color list.
    ///
    /// `colors` must have one entry per position; the lengths are the
    /// caller's responsibility and are only checked in debug builds.
    pub fn per_vertex(positions: &[[f32; 3]], indices: &[u32], colors: &[Color]) -> Self {
        debug_assert_eq!(positions.len(), colors.len());
        Self {
            vertices: positions
                .iter()
                .zip(colors)
                .map(|(&pos, color)| Vertex { pos, color: color.to_normalized() })
                .collect(),
            indices: indices.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRI: [[f32; 3]; 3] = [[0.0, 0.5, 0.0], [-0.5, -0.5, 0.0], [0.5, -0.5, 0.0]];

    #[test]
    fn uniform_color_reaches_every_vertex_normalized() {
        let g = Geometry::uniform(&TRI, &[0, 1, 2], Color::rgba(51, 102, 153, 255));
        assert_eq!(g.vertices.len(), 3);
        for v in &g.vertices {
            assert!((v.color[0] - 51.0 / 255.0).abs() < 1e-6);
            assert!((v.color[1] - 102.0 / 255.0).abs() < 1e-6);
            assert!((v.color[2] - 153.0 / 255.0).abs() < 1e-6);
            assert!((v.color[3] - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn per_vertex_colors_are_kept_in_order() {
        let g = Geometry::per_vertex(&TRI, &[0, 1, 2], &[Color::RED, Color::GREEN, Color::BLUE]);
        assert_eq!(g.vertices[0].color, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(g.vertices[1].color, [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(g.vertices[2].color, [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn indices_are_preserved_verbatim() {
        let g = Geometry::uniform(&TRI, &[2, 1, 0], Color::WHITE);
        assert_eq!(g.indices, vec![2, 1, 0]);
    }
}
