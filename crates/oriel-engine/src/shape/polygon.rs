use std::rc::Rc;

use anyhow::Result;

use crate::paint::Color;

use super::geometry::Geometry;
use super::mesh::Mesh;
use super::Drawable;

/// Arbitrary triangulated polygon.
///
/// `positions` are clip-space offsets relative to `(x, y)`; `indices` is the
/// caller-supplied triangulation of the vertex set.
pub struct Polygon {
    mesh: Mesh,
}

impl Polygon {
    pub fn new(
        gl: &Rc<glow::Context>,
        x: f32,
        y: f32,
        positions: &[[f32; 3]],
        indices: &[u32],
        color: Color,
    ) -> Result<Self> {
        let geometry = Geometry::uniform(&translate(positions, x, y), indices, color);
        Ok(Self { mesh: Mesh::new(gl, x, y, &geometry)? })
    }

    /// Per-vertex colors; `colors` must have one entry per position
    /// (unchecked in release builds, see [`Geometry::per_vertex`]).
    pub fn with_vertex_colors(
        gl: &Rc<glow::Context>,
        x: f32,
        y: f32,
        positions: &[[f32; 3]],
        indices: &[u32],
        colors: &[Color],
    ) -> Result<Self> {
        let geometry = Geometry::per_vertex(&translate(positions, x, y), indices, colors);
        Ok(Self { mesh: Mesh::new(gl, x, y, &geometry)? })
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.mesh.x()
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.mesh.y()
    }
}

impl Drawable for Polygon {
    fn draw(&self) {
        self.mesh.draw()
    }
}

fn translate(positions: &[[f32; 3]], x: f32, y: f32) -> Vec<[f32; 3]> {
    positions
        .iter()
        .map(|&[px, py, pz]| [px + x, py + y, pz])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_translated_by_the_shape_position() {
        let shifted = translate(&[[0.0, 0.5, 0.0], [-0.5, -0.5, 0.25]], 0.1, -0.2);
        assert_eq!(shifted[0], [0.1, 0.3, 0.0]);
        assert_eq!(shifted[1], [-0.4, -0.7, 0.25]);
    }
}
