use std::rc::Rc;

use anyhow::Result;

use crate::paint::Color;

use super::geometry::Geometry;
use super::mesh::Mesh;
use super::Drawable;

/// Axis-aligned rectangle centered on `(x, y)` in clip space.
pub struct Rectangle {
    mesh: Mesh,
}

/// Two counter-clockwise triangles over the four corners.
const INDICES: [u32; 6] = [0, 1, 2, 0, 2, 3];

impl Rectangle {
    pub fn new(
        gl: &Rc<glow::Context>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: Color,
    ) -> Result<Self> {
        let geometry = Geometry::uniform(&corners(x, y, width, height), &INDICES, color);
        Ok(Self { mesh: Mesh::new(gl, x, y, &geometry)? })
    }

    /// One color per corner: bottom-left, bottom-right, top-right, top-left.
    pub fn with_vertex_colors(
        gl: &Rc<glow::Context>,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        colors: &[Color; 4],
    ) -> Result<Self> {
        let geometry = Geometry::per_vertex(&corners(x, y, width, height), &INDICES, colors);
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

impl Drawable for Rectangle {
    fn draw(&self) {
        self.mesh.draw()
    }
}

fn corners(x: f32, y: f32, width: f32, height: f32) -> [[f32; 3]; 4] {
    let hw = width * 0.5;
    let hh = height * 0.5;
    [
        [x - hw, y - hh, 0.0],
        [x + hw, y - hh, 0.0],
        [x + hw, y + hh, 0.0],
        [x - hw, y + hh, 0.0],
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_rectangle_at_origin_is_two_triangles_over_four_vertices() {
        let positions = corners(0.0, 0.0, 1.0, 1.0);
        assert_eq!(positions.len(), 4);

        // Two triangles sharing the 0-2 diagonal, referencing the four
        // unique corners only.
        assert_eq!(INDICES, [0, 1, 2, 0, 2, 3]);
        assert!(INDICES.iter().all(|&i| (i as usize) < positions.len()));
    }

    #[test]
    fn corners_are_centered_on_position() {
        let positions = corners(0.25, -0.5, 1.0, 0.5);
        assert_eq!(positions[0], [-0.25, -0.75, 0.0]);
        assert_eq!(positions[2], [0.75, -0.25, 0.0]);
    }
}
