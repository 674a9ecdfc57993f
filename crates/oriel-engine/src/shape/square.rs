use std::rc::Rc;

use anyhow::Result;

use crate::paint::Color;

use super::rectangle::Rectangle;
use super::Drawable;

/// Square centered on `(x, y)`; a rectangle with equal extents.
pub struct Square {
    inner: Rectangle,
}

impl Square {
    pub fn new(gl: &Rc<glow::Context>, x: f32, y: f32, size: f32, color: Color) -> Result<Self> {
        Ok(Self { inner: Rectangle::new(gl, x, y, size, size, color)? })
    }

    /// One color per corner: bottom-left, bottom-right, top-right, top-left.
    pub fn with_vertex_colors(
        gl: &Rc<glow::Context>,
        x: f32,
        y: f32,
        size: f32,
        colors: &[Color; 4],
    ) -> Result<Self> {
        Ok(Self { inner: Rectangle::with_vertex_colors(gl, x, y, size, size, colors)? })
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.inner.x()
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.inner.y()
    }
}

impl Drawable for Square {
    fn draw(&self) {
        self.inner.draw()
    }
}
